use std::borrow::Cow;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: Cow<'static, str>,
    pub schema: Cow<'static, str>,
    pub alias: Cow<'static, str>,
}

impl TableRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn with_alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn full_name(&self) -> String {
        let mut result = String::new();
        if !self.alias.is_empty() {
            result.push_str(&self.alias);
        } else {
            if !self.schema.is_empty() {
                result.push_str(&self.schema);
                result.push('.');
            }
            result.push_str(&self.name);
        }
        result
    }
}

impl From<&'static str> for TableRef {
    fn from(value: &'static str) -> Self {
        TableRef::new(value)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: Cow<'static, str>,
    pub table: Cow<'static, str>,
    pub schema: Cow<'static, str>,
}

impl ColumnRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn of(table: &TableRef, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            table: if table.alias.is_empty() {
                table.name.clone()
            } else {
                table.alias.clone()
            },
            schema: if table.alias.is_empty() {
                table.schema.clone()
            } else {
                Cow::Borrowed("")
            },
        }
    }
}
