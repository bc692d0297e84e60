use crate::Expression;
use std::borrow::Cow;

/// Abstract column type as declared by the mapping layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Decimal { precision: u8, scale: u8 },
    Double,
    /// Variable length text with its maximum length.
    Varchar(Option<u32>),
    Date,
    Timestamp,
    TimestampWithTimezone,
}

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: Cow<'static, str>,
    pub column_type: ColumnType,
    pub nullable: bool,
    pub default: Option<Expression>,
}

impl ColumnDef {
    pub fn new(name: impl Into<Cow<'static, str>>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: true,
            default: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, default: impl Into<Expression>) -> Self {
        self.default = Some(default.into());
        self
    }
}
