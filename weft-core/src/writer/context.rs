use crate::{Error, Value};
use std::ops::{Deref, DerefMut};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    #[default]
    None,
    Casting,
    SqlAlterTable,
    SqlCreateTable,
    SqlCreateTableConstraint,
    SqlDeleteFrom,
    SqlDeleteFromWhere,
    SqlDropTable,
    SqlInsertInto,
    SqlInsertIntoValues,
    SqlSelect,
    SqlSelectFrom,
    SqlSelectOrderBy,
    SqlSelectWhere,
    SqlSelectPagination,
    SqlUpdate,
    SqlUpdateSet,
    SqlUpdateWhere,
}

/// State carried through one compilation.
#[derive(Debug)]
pub struct Context {
    pub fragment: Fragment,
    pub qualify_columns: bool,
    /// Render parameters inline instead of as `?` markers.
    pub literal_binds: bool,
    /// Positional parameters collected so far.
    pub params: Vec<Value>,
    /// First failure raised where the writer cannot return it, reported by `compile`.
    pub error: Option<Error>,
}

impl Context {
    pub fn new(fragment: Fragment, qualify_columns: bool) -> Self {
        Self {
            fragment,
            qualify_columns,
            literal_binds: false,
            params: Vec::new(),
            error: None,
        }
    }

    /// Keep the error for the end of the compilation, only the first one is reported.
    pub fn record_error(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Temporarily switch fragment, the previous one is restored when the updater drops.
    pub fn switch_fragment(&mut self, fragment: Fragment) -> ContextUpdater<'_> {
        let previous = (self.fragment, self.literal_binds);
        self.fragment = fragment;
        ContextUpdater {
            previous,
            context: self,
        }
    }

    /// Like [`Context::switch_fragment`] also forcing parameters to be rendered inline.
    pub fn with_literal_binds(&mut self, fragment: Fragment) -> ContextUpdater<'_> {
        let mut updater = self.switch_fragment(fragment);
        updater.literal_binds = true;
        updater
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(Fragment::None, false)
    }
}

pub struct ContextUpdater<'a> {
    previous: (Fragment, bool),
    context: &'a mut Context,
}

impl Deref for ContextUpdater<'_> {
    type Target = Context;
    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl DerefMut for ContextUpdater<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl Drop for ContextUpdater<'_> {
    fn drop(&mut self) {
        (self.context.fragment, self.context.literal_binds) = self.previous;
    }
}
