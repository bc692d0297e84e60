use crate::{ColumnDef, Constraint, Expression, Ordered, TableRef};
use std::borrow::Cow;

/// `FETCH FIRST` clause requested explicitly by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchClause {
    pub count: Expression,
    pub percent: bool,
    pub with_ties: bool,
}

impl FetchClause {
    pub fn new(count: impl Into<Expression>) -> Self {
        Self {
            count: count.into(),
            percent: false,
            with_ties: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    pub columns: Vec<Expression>,
    pub from: Option<TableRef>,
    pub condition: Option<Expression>,
    pub order_by: Vec<Ordered>,
    pub limit: Option<Expression>,
    pub offset: Option<Expression>,
    pub fetch: Option<FetchClause>,
}

impl SelectQuery {
    pub fn new(columns: impl IntoIterator<Item = Expression>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn from(mut self, table: impl Into<TableRef>) -> Self {
        self.from = Some(table.into());
        self
    }

    pub fn filter(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn order_by(mut self, ordered: Ordered) -> Self {
        self.order_by.push(ordered);
        self
    }

    pub fn limit(mut self, limit: impl Into<Expression>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn offset(mut self, offset: impl Into<Expression>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn fetch(mut self, fetch: FetchClause) -> Self {
        self.fetch = Some(fetch);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertQuery {
    pub table: TableRef,
    pub columns: Vec<Cow<'static, str>>,
    pub rows: Vec<Vec<Expression>>,
}

impl InsertQuery {
    pub fn new<C>(table: impl Into<TableRef>, columns: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self {
            table: table.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn values(mut self, row: impl IntoIterator<Item = Expression>) -> Self {
        self.rows.push(row.into_iter().collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQuery {
    pub table: TableRef,
    pub assignments: Vec<(Cow<'static, str>, Expression)>,
    pub condition: Option<Expression>,
}

impl UpdateQuery {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            condition: None,
        }
    }

    pub fn set(mut self, column: impl Into<Cow<'static, str>>, value: impl Into<Expression>) -> Self {
        self.assignments.push((column.into(), value.into()));
        self
    }

    pub fn filter(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteQuery {
    pub table: TableRef,
    pub condition: Option<Expression>,
}

impl DeleteQuery {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            condition: None,
        }
    }

    pub fn filter(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }
}

#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<Constraint>,
}

impl CreateTable {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key<C>(mut self, columns: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.constraints
            .push(Constraint::primary_key(self.table.clone(), columns));
        self
    }

    pub fn unique<C>(mut self, columns: impl IntoIterator<Item = C>) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.constraints
            .push(Constraint::unique(self.table.clone(), columns));
        self
    }

    pub fn foreign_key<C, R>(
        mut self,
        columns: impl IntoIterator<Item = C>,
        references: impl Into<TableRef>,
        referenced_columns: impl IntoIterator<Item = R>,
    ) -> Self
    where
        C: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        self.constraints.push(Constraint::foreign_key(
            self.table.clone(),
            columns,
            references.into(),
            referenced_columns,
        ));
        self
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub table: TableRef,
}

/// `ALTER TABLE ... ADD CONSTRAINT ...`
#[derive(Debug, Clone, PartialEq)]
pub struct AddConstraint {
    pub constraint: Constraint,
}

#[derive(Debug, Clone)]
pub enum Statement {
    Select(SelectQuery),
    Insert(InsertQuery),
    Update(UpdateQuery),
    Delete(DeleteQuery),
    CreateTable(CreateTable),
    DropTable(DropTable),
    AddConstraint(AddConstraint),
}

macro_rules! impl_statement_from {
    ($($source:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$source> for Statement {
                fn from(value: $source) -> Self {
                    Statement::$variant(value)
                }
            }
        )+
    };
}

impl_statement_from!(
    SelectQuery => Select,
    InsertQuery => Insert,
    UpdateQuery => Update,
    DeleteQuery => Delete,
    CreateTable => CreateTable,
    DropTable => DropTable,
    AddConstraint => AddConstraint,
);
