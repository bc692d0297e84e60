use crate::{Value, truncate_long};
use std::fmt::{self, Display};

/// SQL text produced by a compilation together with its positional parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl CompiledQuery {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }
}

impl Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.sql))
    }
}

/// Metadata about modify operations (INSERT/UPDATE/DELETE).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowsAffected {
    /// Total number of rows impacted, when the driver reports it.
    pub rows_affected: Option<u64>,
}

/// Owned row value slice, aligned with the cursor columns.
pub type Row = Box<[Value]>;
