use crate::TableRef;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NoAction,
    Restrict,
    Cascade,
    SetNull,
    SetDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
    ForeignKey {
        references: TableRef,
        referenced_columns: Vec<Cow<'static, str>>,
        on_delete: Option<Action>,
    },
}

/// Table level constraint. The name may be left empty for the dialect to synthesize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub table: TableRef,
    pub columns: Vec<Cow<'static, str>>,
    pub name: Option<String>,
}

impl Constraint {
    pub fn primary_key<C>(table: TableRef, columns: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self {
            kind: ConstraintKind::PrimaryKey,
            table,
            columns: columns.into_iter().map(Into::into).collect(),
            name: None,
        }
    }

    pub fn unique<C>(table: TableRef, columns: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self {
            kind: ConstraintKind::Unique,
            table,
            columns: columns.into_iter().map(Into::into).collect(),
            name: None,
        }
    }

    pub fn foreign_key<C, R>(
        table: TableRef,
        columns: impl IntoIterator<Item = C>,
        references: TableRef,
        referenced_columns: impl IntoIterator<Item = R>,
    ) -> Self
    where
        C: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        Self {
            kind: ConstraintKind::ForeignKey {
                references,
                referenced_columns: referenced_columns.into_iter().map(Into::into).collect(),
                on_delete: None,
            },
            table,
            columns: columns.into_iter().map(Into::into).collect(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_delete(mut self, action: Action) -> Self {
        if let ConstraintKind::ForeignKey { on_delete, .. } = &mut self.kind {
            *on_delete = Some(action);
        }
        self
    }

    /// Name to emit, `None` when absent or blank.
    pub fn emitted_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|v| !v.is_empty())
    }
}
