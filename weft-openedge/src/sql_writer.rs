use crate::{CALC_TABLE, DEFAULT_SCHEMA, TypeRegistry, is_reserved_word, requires_quotes};
use weft_core::{
    ColumnType, Constraint, ConstraintKind, DialectError, Result, SelectQuery, Sequence,
    SqlWriter, WriterContext as Context,
};

/// Writer emitting OpenEdge SQL. Everything not overridden here is the generic SQL.
#[derive(Default, Debug, Clone, Copy)]
pub struct OpenEdgeSqlWriter;

impl OpenEdgeSqlWriter {
    pub const fn new() -> Self {
        Self
    }

    /// Name given to a constraint declared without one.
    pub fn default_constraint_name(constraint: &Constraint) -> String {
        let table = &constraint.table.name;
        let prefix = match constraint.kind {
            ConstraintKind::PrimaryKey => return format!("pk_{}", table),
            ConstraintKind::ForeignKey { .. } => "fk",
            ConstraintKind::Unique => "uq",
        };
        let mut name = format!("{}_{}", prefix, table);
        for column in &constraint.columns {
            name.push('_');
            name.push_str(column);
        }
        name
    }
}

impl SqlWriter for OpenEdgeSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn is_reserved_word(&self, value: &str) -> bool {
        is_reserved_word(value)
    }

    fn requires_quotes(&self, value: &str) -> bool {
        requires_quotes(value)
    }

    fn write_column_type(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &ColumnType,
    ) -> Result<()> {
        out.push_str(&TypeRegistry::ddl_name(value)?);
        Ok(())
    }

    fn write_value_bool(&self, _context: &mut Context, out: &mut String, value: bool) {
        out.push(if value { '1' } else { '0' });
    }

    fn write_function_current_timestamp(&self, _context: &mut Context, out: &mut String) {
        out.push_str("SYSDATE");
    }

    fn write_sequence_name(&self, _context: &mut Context, out: &mut String, value: &Sequence) {
        let schema = value
            .schema
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_SCHEMA);
        self.write_identifier(out, schema);
        out.push('.');
        self.write_identifier(out, &value.name);
    }

    fn write_sequence_next_value(&self, context: &mut Context, out: &mut String, value: &Sequence) {
        self.write_sequence_name(context, out, value);
        out.push_str(".NEXTVAL FROM ");
        out.push_str(CALC_TABLE);
    }

    fn write_select_without_from(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &SelectQuery,
    ) {
        // The next value of a sequence already brings its FROM
        if !value.columns.iter().any(|v| v.is_next_value()) {
            out.push_str("\nFROM ");
            out.push_str(CALC_TABLE);
        }
    }

    fn write_limit_clause(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &SelectQuery,
    ) -> Result<()> {
        let fragment = context.fragment;
        let mut context = context.with_literal_binds(fragment);
        if let Some(offset) = &value.offset {
            out.push_str("\n OFFSET ");
            self.write_pagination_expression(&mut context, out, offset, "OFFSET")?;
            out.push_str(" ROWS");
        }
        if let Some(limit) = &value.limit {
            out.push_str("\n FETCH FIRST ");
            self.write_pagination_expression(&mut context, out, limit, "FETCH FIRST")?;
            out.push_str(" ROWS ONLY");
        }
        Ok(())
    }

    fn write_fetch_clause(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &SelectQuery,
        require_offset: bool,
    ) -> Result<()> {
        if let Some(fetch) = &value.fetch {
            if fetch.percent {
                return Err(DialectError::compilation("FETCH FIRST ... PERCENT is not supported").into());
            }
            if fetch.with_ties {
                return Err(DialectError::compilation("FETCH FIRST ... WITH TIES is not supported").into());
            }
        }
        let fragment = context.fragment;
        let mut context = context.with_literal_binds(fragment);
        if let Some(offset) = &value.offset {
            out.push_str("\n OFFSET ");
            self.write_pagination_expression(&mut context, out, offset, "OFFSET")?;
            out.push_str(" ROWS");
        } else if require_offset {
            out.push_str("\n OFFSET 0 ROWS");
        }
        if let Some(fetch) = &value.fetch {
            out.push_str("\n FETCH FIRST ");
            self.write_pagination_expression(&mut context, out, &fetch.count, "FETCH FIRST")?;
            out.push_str(" ROWS ONLY");
        }
        Ok(())
    }

    fn prepare_constraint(&self, constraint: &mut Constraint) {
        if constraint.emitted_name().is_none() {
            constraint.name = Some(Self::default_constraint_name(constraint));
        }
    }
}
