use crate::{
    Action, AddConstraint, BinaryOp, BinaryOpType, ColumnDef, ColumnRef, ColumnType,
    CompiledQuery, Constraint, ConstraintKind, CreateTable, DeleteQuery, DialectError, DropTable,
    Expression, Function, InsertQuery, Operand, Order, Ordered, Result, SelectQuery, Sequence,
    Statement, TableRef, UnaryOp, UnaryOpType, UpdateQuery, Value, possibly_parenthesized,
    separated_by, try_separated_by,
    writer::{Context, Fragment},
};
use std::fmt::Write;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $context:ident, $out:ident, $value:expr) => {{
        if $value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        } else {
            $this.write_value_non_finite($context, $out, $value);
        }
    }};
}

/// Reserved words of the generic dialect, sorted.
static RESERVED_WORDS: &[&str] = &[
    "all",
    "and",
    "as",
    "asc",
    "between",
    "by",
    "case",
    "check",
    "column",
    "constraint",
    "create",
    "default",
    "delete",
    "desc",
    "distinct",
    "drop",
    "else",
    "end",
    "exists",
    "false",
    "fetch",
    "for",
    "foreign",
    "from",
    "grant",
    "group",
    "having",
    "in",
    "insert",
    "into",
    "is",
    "join",
    "key",
    "like",
    "limit",
    "not",
    "null",
    "offset",
    "on",
    "or",
    "order",
    "primary",
    "references",
    "select",
    "set",
    "table",
    "then",
    "to",
    "true",
    "union",
    "unique",
    "update",
    "user",
    "using",
    "values",
    "when",
    "where",
    "with",
];

/// Dialect printer converting the query tree into concrete SQL strings.
///
/// Every node kind has its own method. The defaults implement a generic ANSI-like
/// dialect, database specific writers override only what their SQL spells differently.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Compile a statement into SQL text and the parameters collected along the way.
    fn compile(&self, statement: &mut Statement) -> Result<CompiledQuery> {
        let mut out = String::with_capacity(128);
        let mut context = Context::default();
        let result = match statement {
            Statement::Select(v) => self.write_select(&mut context, &mut out, v),
            Statement::Insert(v) => self.write_insert(&mut context, &mut out, v),
            Statement::Update(v) => self.write_update(&mut context, &mut out, v),
            Statement::Delete(v) => self.write_delete(&mut context, &mut out, v),
            Statement::CreateTable(v) => self.write_create_table(&mut context, &mut out, v),
            Statement::DropTable(v) => self.write_drop_table(&mut context, &mut out, v),
            Statement::AddConstraint(v) => self.write_add_constraint(&mut context, &mut out, v),
        };
        let result = match context.error.take() {
            Some(error) if result.is_ok() => Err(error),
            _ => result,
        };
        if let Err(error) = result {
            log::error!("{:#}", error);
            return Err(error);
        }
        log::debug!("Compiled:\n{}", out);
        Ok(CompiledQuery {
            sql: out,
            params: context.params,
        })
    }

    fn is_reserved_word(&self, value: &str) -> bool {
        RESERVED_WORDS
            .binary_search(&value.to_ascii_lowercase().as_str())
            .is_ok()
    }

    /// Whether the identifier must be quoted to be read back unchanged.
    fn requires_quotes(&self, value: &str) -> bool {
        let mut chars = value.chars();
        let Some(first) = chars.next() else {
            return true;
        };
        !(first.is_ascii_lowercase() || first == '_')
            || chars.any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'))
            || self.is_reserved_word(value)
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(&self, out: &mut String, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + c.len_utf8();
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    fn write_identifier_quoted(&self, out: &mut String, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', "\"\"");
        out.push('"');
    }

    /// Write the identifier, quoted only when needed.
    fn write_identifier(&self, out: &mut String, value: &str) {
        if self.requires_quotes(value) {
            self.write_identifier_quoted(out, value);
        } else {
            out.push_str(value);
        }
    }

    /// Render a table reference with optional alias.
    fn write_table_ref(&self, context: &mut Context, out: &mut String, value: &TableRef) {
        let declaration = matches!(context.fragment, Fragment::SqlSelectFrom);
        if declaration || value.alias.is_empty() {
            if !value.schema.is_empty() {
                self.write_identifier(out, &value.schema);
                out.push('.');
            }
            self.write_identifier(out, &value.name);
        }
        if declaration && !value.alias.is_empty() {
            out.push(' ');
            self.write_identifier(out, &value.alias);
        } else if !value.alias.is_empty() {
            self.write_identifier(out, &value.alias);
        }
    }

    /// Render a column reference optionally qualifying with schema/table.
    fn write_column_ref(&self, context: &mut Context, out: &mut String, value: &ColumnRef) {
        if context.qualify_columns && !value.table.is_empty() {
            if !value.schema.is_empty() {
                self.write_identifier(out, &value.schema);
                out.push('.');
            }
            self.write_identifier(out, &value.table);
            out.push('.');
        }
        self.write_identifier(out, &value.name);
    }

    /// Render the DDL spelling of a column type.
    fn write_column_type(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &ColumnType,
    ) -> Result<()> {
        match value {
            ColumnType::Boolean => out.push_str("BOOLEAN"),
            ColumnType::SmallInt => out.push_str("SMALLINT"),
            ColumnType::Integer => out.push_str("INTEGER"),
            ColumnType::BigInt => out.push_str("BIGINT"),
            ColumnType::Decimal { precision, scale } => {
                out.push_str("DECIMAL");
                if *precision != 0 || *scale != 0 {
                    let _ = write!(out, "({},{})", precision, scale);
                }
            }
            ColumnType::Double => out.push_str("DOUBLE PRECISION"),
            ColumnType::Varchar(Some(len)) => {
                let _ = write!(out, "VARCHAR({})", len);
            }
            ColumnType::Varchar(None) => out.push_str("VARCHAR"),
            ColumnType::Date => out.push_str("DATE"),
            ColumnType::Timestamp => out.push_str("TIMESTAMP"),
            ColumnType::TimestampWithTimezone => out.push_str("TIMESTAMP WITH TIME ZONE"),
        };
        Ok(())
    }

    /// Render a concrete value (including proper quoting / escaping).
    fn write_value(&self, context: &mut Context, out: &mut String, value: &Value) {
        match value {
            v if v.is_null() => self.write_value_none(context, out),
            Value::Boolean(Some(v)) => self.write_value_bool(context, out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::Float64(Some(v)) => write_float!(self, context, out, *v),
            Value::Decimal(Some(v), ..) => {
                let _ = write!(out, "{}", v);
            }
            Value::Varchar(Some(v)) => self.write_value_string(context, out, v),
            Value::Date(Some(v)) => self.write_value_date(context, out, v),
            Value::Timestamp(Some(v)) => self.write_value_timestamp(context, out, v),
            Value::TimestampWithTimezone(Some(v)) => {
                self.write_value_timestamptz(context, out, v)
            }
            _ => log::error!("Cannot write {:?}", value),
        };
    }

    /// Render NULL literal.
    fn write_value_none(&self, _context: &mut Context, out: &mut String) {
        out.push_str("NULL");
    }

    /// Render boolean literal.
    fn write_value_bool(&self, _context: &mut Context, out: &mut String, value: bool) {
        out.push_str(["false", "true"][value as usize]);
    }

    /// Render +/- INF and NaN via CAST.
    fn write_value_non_finite(&self, context: &mut Context, out: &mut String, value: f64) {
        let mut buffer = ryu::Buffer::new();
        self.write_expression_binary_op(
            context,
            out,
            &BinaryOp {
                op: BinaryOpType::Cast,
                lhs: Box::new(Expression::string(buffer.format(value).to_owned())),
                rhs: Box::new(Operand::Type(ColumnType::Double).into()),
            },
        );
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, _context: &mut Context, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    fn write_value_date(&self, _context: &mut Context, out: &mut String, value: &Date) {
        out.push('\'');
        write_date(out, value);
        out.push('\'');
    }

    fn write_value_timestamp(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &PrimitiveDateTime,
    ) {
        out.push('\'');
        write_date(out, &value.date());
        out.push(' ');
        write_time(out, &value.time());
        out.push('\'');
    }

    /// Render a timestamp with time zone, normalized to UTC.
    fn write_value_timestamptz(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &OffsetDateTime,
    ) {
        let date_time = value.to_offset(time::UtcOffset::UTC);
        self.write_value_timestamp(
            context,
            out,
            &PrimitiveDateTime::new(date_time.date(), date_time.time()),
        );
    }

    /// Precedence table for unary operators.
    fn expression_unary_op_precedence(&self, value: &UnaryOpType) -> i32 {
        match value {
            UnaryOpType::Negative => 1250,
            UnaryOpType::Not => 250,
        }
    }

    /// Precedence table for binary operators.
    fn expression_binary_op_precedence(&self, value: &BinaryOpType) -> i32 {
        match value {
            BinaryOpType::Or => 100,
            BinaryOpType::And => 200,
            BinaryOpType::Equal => 300,
            BinaryOpType::NotEqual => 300,
            BinaryOpType::Less => 300,
            BinaryOpType::Greater => 300,
            BinaryOpType::LessEqual => 300,
            BinaryOpType::GreaterEqual => 300,
            BinaryOpType::Is => 400,
            BinaryOpType::IsNot => 400,
            BinaryOpType::Like => 400,
            BinaryOpType::NotLike => 400,
            BinaryOpType::Subtraction => 800,
            BinaryOpType::Addition => 800,
            BinaryOpType::Multiplication => 900,
            BinaryOpType::Division => 900,
            BinaryOpType::Remainder => 900,
            BinaryOpType::Cast => 1100,
            BinaryOpType::Alias => 1200,
        }
    }

    /// Dispatch on the node kind.
    fn write_expression(&self, context: &mut Context, out: &mut String, value: &Expression) {
        match value {
            Expression::Operand(v) => self.write_expression_operand(context, out, v),
            Expression::Unary(v) => self.write_expression_unary_op(context, out, v),
            Expression::Binary(v) => self.write_expression_binary_op(context, out, v),
            Expression::Function(v) => self.write_expression_function(context, out, v),
            Expression::NextValue(v) => self.write_sequence_next_value(context, out, v),
        }
    }

    /// Render an operand (literal / variable / parameter).
    fn write_expression_operand(&self, context: &mut Context, out: &mut String, value: &Operand) {
        match value {
            Operand::Null => self.write_value_none(context, out),
            Operand::LitBool(v) => self.write_value_bool(context, out, *v),
            Operand::LitFloat(v) => write_float!(self, context, out, *v),
            Operand::LitIdent(v) => out.push_str(v),
            Operand::LitInt(v) => write_integer!(out, *v),
            Operand::LitStr(v) => self.write_value_string(context, out, v),
            Operand::Column(v) => self.write_column_ref(context, out, v),
            Operand::Type(v) => {
                if let Err(e) = self.write_column_type(context, out, v) {
                    context.record_error(e);
                }
            }
            Operand::Variable(v) => self.write_value(context, out, v),
            Operand::Param(v) => self.write_expression_param(context, out, v),
            Operand::Asterisk => out.push('*'),
        };
    }

    /// Render a bound parameter: inline under literal binds, otherwise a marker collected in the context.
    fn write_expression_param(&self, context: &mut Context, out: &mut String, value: &Value) {
        if context.literal_binds {
            self.write_value(context, out, value);
        } else {
            out.push('?');
            context.params.push(value.clone());
        }
    }

    /// Render unary operator expression.
    fn write_expression_unary_op(&self, context: &mut Context, out: &mut String, value: &UnaryOp) {
        match value.op {
            UnaryOpType::Negative => out.push('-'),
            UnaryOpType::Not => out.push_str("NOT "),
        };
        possibly_parenthesized!(
            out,
            value.arg.precedence(self.as_dyn()) <= self.expression_unary_op_precedence(&value.op),
            self.write_expression(context, out, &value.arg)
        );
    }

    /// Render binary operator expression handling precedence / parenthesis.
    fn write_expression_binary_op(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &BinaryOp,
    ) {
        let (prefix, infix, suffix, lhs_parenthesized, rhs_parenthesized) = match value.op {
            BinaryOpType::Cast => ("CAST(", " AS ", ")", true, true),
            BinaryOpType::Multiplication => ("", " * ", "", false, false),
            BinaryOpType::Division => ("", " / ", "", false, false),
            BinaryOpType::Remainder => ("", " % ", "", false, false),
            BinaryOpType::Addition => ("", " + ", "", false, false),
            BinaryOpType::Subtraction => ("", " - ", "", false, false),
            BinaryOpType::Is => ("", " IS ", "", false, false),
            BinaryOpType::IsNot => ("", " IS NOT ", "", false, false),
            BinaryOpType::Like => ("", " LIKE ", "", false, false),
            BinaryOpType::NotLike => ("", " NOT LIKE ", "", false, false),
            BinaryOpType::Equal => ("", " = ", "", false, false),
            BinaryOpType::NotEqual => ("", " <> ", "", false, false),
            BinaryOpType::Less => ("", " < ", "", false, false),
            BinaryOpType::LessEqual => ("", " <= ", "", false, false),
            BinaryOpType::Greater => ("", " > ", "", false, false),
            BinaryOpType::GreaterEqual => ("", " >= ", "", false, false),
            BinaryOpType::And => ("", " AND ", "", false, false),
            BinaryOpType::Or => ("", " OR ", "", false, false),
            BinaryOpType::Alias => {
                if context.fragment == Fragment::SqlSelectOrderBy {
                    return self.write_expression(context, out, &value.lhs);
                } else {
                    ("", " AS ", "", false, false)
                }
            }
        };
        let fragment = if value.op == BinaryOpType::Cast {
            Fragment::Casting
        } else {
            context.fragment
        };
        let mut context = context.switch_fragment(fragment);
        let precedence = self.expression_binary_op_precedence(&value.op);
        out.push_str(prefix);
        possibly_parenthesized!(
            out,
            !lhs_parenthesized && value.lhs.precedence(self.as_dyn()) < precedence,
            self.write_expression(&mut context, out, &value.lhs)
        );
        out.push_str(infix);
        possibly_parenthesized!(
            out,
            !rhs_parenthesized && value.rhs.precedence(self.as_dyn()) <= precedence,
            self.write_expression(&mut context, out, &value.rhs)
        );
        out.push_str(suffix);
    }

    /// Dispatch on the function kind.
    fn write_expression_function(&self, context: &mut Context, out: &mut String, value: &Function) {
        match value {
            Function::CurrentTimestamp => self.write_function_current_timestamp(context, out),
            Function::CurrentDate => self.write_function_current_date(context, out),
            Function::Call(name, args) => self.write_function_call(context, out, name, args),
        }
    }

    fn write_function_current_timestamp(&self, _context: &mut Context, out: &mut String) {
        out.push_str("CURRENT_TIMESTAMP");
    }

    fn write_function_current_date(&self, _context: &mut Context, out: &mut String) {
        out.push_str("CURRENT_DATE");
    }

    fn write_function_call(
        &self,
        context: &mut Context,
        out: &mut String,
        name: &str,
        args: &[Expression],
    ) {
        out.push_str(name);
        out.push('(');
        separated_by(
            out,
            args,
            |out, v| self.write_expression(context, out, v),
            ", ",
        );
        out.push(')');
    }

    /// Render the possibly schema qualified sequence name.
    fn write_sequence_name(&self, _context: &mut Context, out: &mut String, value: &Sequence) {
        if let Some(schema) = value.schema.as_deref().filter(|v| !v.is_empty()) {
            self.write_identifier(out, schema);
            out.push('.');
        }
        self.write_identifier(out, &value.name);
    }

    /// Render the next value of a sequence.
    fn write_sequence_next_value(&self, context: &mut Context, out: &mut String, value: &Sequence) {
        out.push_str("NEXT VALUE FOR ");
        self.write_sequence_name(context, out, value);
    }

    /// Render ordered expression inside ORDER BY.
    fn write_expression_ordered(&self, context: &mut Context, out: &mut String, value: &Ordered) {
        self.write_expression(context, out, &value.expression);
        out.push_str(match value.order {
            Order::ASC => " ASC",
            Order::DESC => " DESC",
        });
    }

    /// Render a LIMIT / OFFSET / FETCH expression, rejecting what cannot be a row count.
    fn write_pagination_expression(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &Expression,
        clause: &str,
    ) -> Result<()> {
        let negative = match value {
            Expression::Operand(Operand::LitInt(v)) => *v < 0,
            Expression::Operand(Operand::Variable(v) | Operand::Param(v)) => {
                match v.as_integer() {
                    Some(v) => v < 0,
                    None => {
                        return Err(DialectError::compilation(format!(
                            "{} expects an integer row count, found {}",
                            clause,
                            if v.is_null() { "NULL" } else { v.type_name() }
                        ))
                        .into());
                    }
                }
            }
            _ => false,
        };
        if negative {
            return Err(DialectError::compilation(format!(
                "{} expects a non negative row count",
                clause
            ))
            .into());
        }
        let len = out.len();
        self.write_expression(context, out, value);
        if out[len..].trim().is_empty() {
            return Err(DialectError::compilation(format!(
                "{} expression did not render to SQL",
                clause
            ))
            .into());
        }
        Ok(())
    }

    /// Emit SELECT statement (projection, FROM, WHERE, ORDER BY, pagination).
    fn write_select(&self, context: &mut Context, out: &mut String, value: &SelectQuery) -> Result<()> {
        if value.columns.is_empty() {
            return Err(DialectError::compilation("SELECT without columns").into());
        }
        out.reserve(128 + value.columns.len() * 32);
        let mut context = context.switch_fragment(Fragment::SqlSelect);
        context.qualify_columns = true;
        out.push_str("SELECT ");
        separated_by(
            out,
            &value.columns,
            |out, col| self.write_expression(&mut context, out, col),
            ", ",
        );
        if let Some(from) = &value.from {
            out.push_str("\nFROM ");
            self.write_table_ref(&mut context.switch_fragment(Fragment::SqlSelectFrom), out, from);
        } else {
            self.write_select_without_from(&mut context, out, value);
        }
        if let Some(condition) = &value.condition {
            out.push_str("\nWHERE ");
            self.write_expression(
                &mut context.switch_fragment(Fragment::SqlSelectWhere),
                out,
                condition,
            );
        }
        if !value.order_by.is_empty() {
            out.push_str("\nORDER BY ");
            let mut context = context.switch_fragment(Fragment::SqlSelectOrderBy);
            separated_by(
                out,
                &value.order_by,
                |out, v| self.write_expression_ordered(&mut context, out, v),
                ", ",
            );
        }
        let mut context = context.switch_fragment(Fragment::SqlSelectPagination);
        match (&value.fetch, value.limit.is_some()) {
            (Some(..), true) => {
                return Err(
                    DialectError::compilation("LIMIT cannot be combined with FETCH FIRST").into(),
                );
            }
            (Some(..), false) => {
                self.write_fetch_clause(&mut context, out, value, self.fetch_requires_offset())?
            }
            (None, _) if value.limit.is_some() || value.offset.is_some() => {
                self.write_limit_clause(&mut context, out, value)?
            }
            _ => {}
        }
        Ok(())
    }

    /// Called for a SELECT that has no FROM clause.
    fn write_select_without_from(
        &self,
        _context: &mut Context,
        _out: &mut String,
        _value: &SelectQuery,
    ) {
    }

    /// Whether an explicit fetch clause always needs an OFFSET in front.
    fn fetch_requires_offset(&self) -> bool {
        false
    }

    /// Emit the LIMIT / OFFSET tail.
    fn write_limit_clause(&self, context: &mut Context, out: &mut String, value: &SelectQuery) -> Result<()> {
        if let Some(limit) = &value.limit {
            out.push_str("\nLIMIT ");
            self.write_pagination_expression(context, out, limit, "LIMIT")?;
        }
        if let Some(offset) = &value.offset {
            out.push_str("\nOFFSET ");
            self.write_pagination_expression(context, out, offset, "OFFSET")?;
        }
        Ok(())
    }

    /// Emit the OFFSET ... ROWS / FETCH FIRST ... tail.
    fn write_fetch_clause(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &SelectQuery,
        require_offset: bool,
    ) -> Result<()> {
        if let Some(offset) = &value.offset {
            out.push_str("\nOFFSET ");
            self.write_pagination_expression(context, out, offset, "OFFSET")?;
            out.push_str(" ROWS");
        } else if require_offset {
            out.push_str("\nOFFSET 0 ROWS");
        }
        if let Some(fetch) = &value.fetch {
            out.push_str("\nFETCH FIRST ");
            self.write_pagination_expression(context, out, &fetch.count, "FETCH FIRST")?;
            if fetch.percent {
                out.push_str(" PERCENT");
            }
            out.push_str(if fetch.with_ties {
                " ROWS WITH TIES"
            } else {
                " ROWS ONLY"
            });
        }
        Ok(())
    }

    /// Emit INSERT with one or more rows.
    fn write_insert(&self, context: &mut Context, out: &mut String, value: &InsertQuery) -> Result<()> {
        if value.rows.is_empty() {
            return Err(DialectError::compilation("INSERT without rows").into());
        }
        if let Some(row) = value.rows.iter().find(|v| v.len() != value.columns.len()) {
            return Err(DialectError::compilation(format!(
                "INSERT row has {} values but {} columns are listed",
                row.len(),
                value.columns.len()
            ))
            .into());
        }
        out.reserve(128 + value.columns.len() * 48);
        let mut context = context.switch_fragment(Fragment::SqlInsertInto);
        out.push_str("INSERT INTO ");
        self.write_table_ref(&mut context, out, &value.table);
        out.push_str(" (");
        separated_by(out, &value.columns, |out, v| self.write_identifier(out, v), ", ");
        out.push_str(") VALUES\n");
        let mut context = context.switch_fragment(Fragment::SqlInsertIntoValues);
        separated_by(
            out,
            &value.rows,
            |out, row| {
                out.push('(');
                separated_by(
                    out,
                    row,
                    |out, v| self.write_expression(&mut context, out, v),
                    ", ",
                );
                out.push(')');
            },
            ",\n",
        );
        Ok(())
    }

    /// Emit UPDATE ... SET with an optional WHERE clause.
    fn write_update(&self, context: &mut Context, out: &mut String, value: &UpdateQuery) -> Result<()> {
        if value.assignments.is_empty() {
            return Err(DialectError::compilation("UPDATE without assignments").into());
        }
        let mut context = context.switch_fragment(Fragment::SqlUpdate);
        out.push_str("UPDATE ");
        self.write_table_ref(&mut context, out, &value.table);
        out.push_str(" SET ");
        {
            let mut context = context.switch_fragment(Fragment::SqlUpdateSet);
            separated_by(
                out,
                &value.assignments,
                |out, (column, v)| {
                    self.write_identifier(out, column);
                    out.push_str(" = ");
                    self.write_expression(&mut context, out, v);
                },
                ", ",
            );
        }
        if let Some(condition) = &value.condition {
            out.push_str("\nWHERE ");
            self.write_expression(
                &mut context.switch_fragment(Fragment::SqlUpdateWhere),
                out,
                condition,
            );
        }
        Ok(())
    }

    /// Emit DELETE statement with an optional WHERE clause.
    fn write_delete(&self, context: &mut Context, out: &mut String, value: &DeleteQuery) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::SqlDeleteFrom);
        out.push_str("DELETE FROM ");
        self.write_table_ref(&mut context, out, &value.table);
        if let Some(condition) = &value.condition {
            out.push_str("\nWHERE ");
            self.write_expression(
                &mut context.switch_fragment(Fragment::SqlDeleteFromWhere),
                out,
                condition,
            );
        }
        Ok(())
    }

    /// Hook run on every constraint before it is emitted, may fill in missing parts.
    fn prepare_constraint(&self, _constraint: &mut Constraint) {}

    /// Emit CREATE TABLE with columns and table level constraints.
    fn write_create_table(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &mut CreateTable,
    ) -> Result<()> {
        if value.columns.is_empty() {
            return Err(DialectError::compilation(format!(
                "CREATE TABLE {} without columns",
                value.table.full_name()
            ))
            .into());
        }
        for constraint in value.constraints.iter_mut() {
            self.prepare_constraint(constraint);
        }
        out.reserve(128 + value.columns.len() * 64 + value.constraints.len() * 48);
        let mut context = context.switch_fragment(Fragment::SqlCreateTable);
        out.push_str("CREATE TABLE ");
        self.write_table_ref(&mut context, out, &value.table);
        out.push_str(" (\n");
        try_separated_by(
            out,
            &value.columns,
            |out, v| self.write_create_table_column(&mut context, out, v),
            ",\n",
        )?;
        let mut context = context.switch_fragment(Fragment::SqlCreateTableConstraint);
        for constraint in &value.constraints {
            out.push_str(",\n");
            self.write_constraint(&mut context, out, constraint)?;
        }
        out.push_str("\n)");
        Ok(())
    }

    /// Emit single column definition fragment.
    fn write_create_table_column(
        &self,
        context: &mut Context,
        out: &mut String,
        column: &ColumnDef,
    ) -> Result<()> {
        self.write_identifier(out, &column.name);
        out.push(' ');
        self.write_column_type(context, out, &column.column_type)?;
        if !column.nullable {
            out.push_str(" NOT NULL");
        }
        if let Some(default) = &column.default {
            out.push_str(" DEFAULT ");
            let fragment = context.fragment;
            let mut context = context.with_literal_binds(fragment);
            self.write_expression(&mut context, out, default);
        }
        Ok(())
    }

    /// Emit a table constraint, prefixed by its name when it has one.
    fn write_constraint(&self, context: &mut Context, out: &mut String, value: &Constraint) -> Result<()> {
        if value.columns.is_empty() {
            return Err(DialectError::compilation(format!(
                "Constraint on {} without columns",
                value.table.full_name()
            ))
            .into());
        }
        if let Some(name) = value.emitted_name() {
            out.push_str("CONSTRAINT ");
            self.write_identifier(out, name);
            out.push(' ');
        }
        let write_columns = |out: &mut String, columns: &[std::borrow::Cow<'static, str>]| {
            out.push('(');
            separated_by(out, columns, |out, v| self.write_identifier(out, v), ", ");
            out.push(')');
        };
        match &value.kind {
            ConstraintKind::PrimaryKey => {
                out.push_str("PRIMARY KEY ");
                write_columns(out, &value.columns);
            }
            ConstraintKind::Unique => {
                out.push_str("UNIQUE ");
                write_columns(out, &value.columns);
            }
            ConstraintKind::ForeignKey {
                references,
                referenced_columns,
                on_delete,
            } => {
                if referenced_columns.len() != value.columns.len() {
                    return Err(DialectError::compilation(format!(
                        "Foreign key on {} lists {} columns but references {}",
                        value.table.full_name(),
                        value.columns.len(),
                        referenced_columns.len()
                    ))
                    .into());
                }
                out.push_str("FOREIGN KEY ");
                write_columns(out, &value.columns);
                out.push_str(" REFERENCES ");
                self.write_table_ref(context, out, references);
                out.push(' ');
                write_columns(out, referenced_columns);
                if let Some(action) = on_delete {
                    out.push_str(" ON DELETE ");
                    self.write_references_action(context, out, action);
                }
            }
        }
        Ok(())
    }

    /// Emit referential action keyword.
    fn write_references_action(&self, _context: &mut Context, out: &mut String, action: &Action) {
        out.push_str(match action {
            Action::NoAction => "NO ACTION",
            Action::Restrict => "RESTRICT",
            Action::Cascade => "CASCADE",
            Action::SetNull => "SET NULL",
            Action::SetDefault => "SET DEFAULT",
        });
    }

    /// Emit ALTER TABLE ... ADD CONSTRAINT.
    fn write_add_constraint(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &mut AddConstraint,
    ) -> Result<()> {
        self.prepare_constraint(&mut value.constraint);
        let mut context = context.switch_fragment(Fragment::SqlAlterTable);
        out.push_str("ALTER TABLE ");
        self.write_table_ref(&mut context, out, &value.constraint.table);
        out.push_str(" ADD ");
        self.write_constraint(&mut context, out, &value.constraint)
    }

    /// Emit DROP TABLE statement.
    fn write_drop_table(&self, context: &mut Context, out: &mut String, value: &DropTable) -> Result<()> {
        let mut context = context.switch_fragment(Fragment::SqlDropTable);
        out.push_str("DROP TABLE ");
        self.write_table_ref(&mut context, out, &value.table);
        Ok(())
    }
}

fn write_date(out: &mut String, value: &Date) {
    let _ = write!(
        out,
        "{:04}-{:02}-{:02}",
        value.year(),
        value.month() as u8,
        value.day()
    );
}

fn write_time(out: &mut String, value: &Time) {
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        value.hour(),
        value.minute(),
        value.second()
    );
    let mut subsecond = value.nanosecond();
    if subsecond != 0 {
        let mut width = 9;
        while subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(out, ".{:0width$}", subsecond);
    }
}

/// Fallback generic SQL writer.
#[derive(Default, Debug, Clone, Copy)]
pub struct GenericSqlWriter;

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }
}
