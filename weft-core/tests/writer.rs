#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rust_decimal::Decimal;
    use time::macros::{date, datetime};
    use weft_core::{
        ColumnDef, ColumnRef, ColumnType, Constraint, CreateTable, DialectError, Expression,
        FetchClause, GenericSqlWriter, InsertQuery, Operand, SelectQuery, Sequence, SqlWriter, Statement,
        TableRef, UnaryOpType, UpdateQuery, Value, WriterContext,
    };

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    fn compile(statement: impl Into<Statement>) -> String {
        WRITER
            .compile(&mut statement.into())
            .expect("The statement should compile")
            .sql
    }

    fn expression(value: &Expression) -> String {
        let mut out = String::new();
        WRITER.write_expression(&mut WriterContext::default(), &mut out, value);
        out
    }

    fn value(value: Value) -> String {
        let mut out = String::new();
        WRITER.write_value(&mut WriterContext::default(), &mut out, &value);
        out
    }

    #[test]
    fn select_with_bound_limit() {
        let query = WRITER
            .compile(
                &mut SelectQuery::new([Expression::column("id"), Expression::column("name")])
                    .from("users")
                    .filter(Expression::column("age").gt(Expression::param(18)))
                    .order_by(Expression::column("name").asc())
                    .limit(Expression::param(10))
                    .offset(20)
                    .into(),
            )
            .expect("The statement should compile");
        assert_eq!(
            query.sql,
            indoc! {"
                SELECT id, name
                FROM users
                WHERE age > ?
                ORDER BY name ASC
                LIMIT ?
                OFFSET 20
            "}
            .trim_end()
        );
        assert_eq!(query.params, [Value::Int32(Some(18)), Value::Int32(Some(10))]);
    }

    #[test]
    fn fetch_first() {
        let mut fetch = FetchClause::new(10);
        fetch.percent = true;
        fetch.with_ties = true;
        assert_eq!(
            compile(
                SelectQuery::new([Expression::column("id")])
                    .from("users")
                    .offset(5)
                    .fetch(fetch)
            ),
            indoc! {"
                SELECT id
                FROM users
                OFFSET 5 ROWS
                FETCH FIRST 10 PERCENT ROWS WITH TIES
            "}
            .trim_end()
        );
        let query = SelectQuery::new([Expression::column("id")]).fetch(FetchClause::new(3));
        let mut out = String::new();
        WRITER
            .write_fetch_clause(&mut WriterContext::default(), &mut out, &query, true)
            .unwrap();
        assert_eq!(out, "\nOFFSET 0 ROWS\nFETCH FIRST 3 ROWS ONLY");
    }

    #[test]
    fn functions_and_sequences() {
        assert_eq!(expression(&Expression::now()), "CURRENT_TIMESTAMP");
        assert_eq!(
            expression(&Expression::call(
                "COALESCE",
                vec![Expression::column("nickname"), Expression::string("anonymous")]
            )),
            "COALESCE(nickname, 'anonymous')"
        );
        assert_eq!(
            expression(&Sequence::new("order_seq").next_value()),
            "NEXT VALUE FOR order_seq"
        );
        assert_eq!(
            expression(&Sequence::new("ORDER_SEQ").with_schema("sales").next_value()),
            "NEXT VALUE FOR sales.\"ORDER_SEQ\""
        );
        assert_eq!(compile(SelectQuery::new([Expression::int(1)])), "SELECT 1");
    }

    #[test]
    fn operators() {
        let a = || Expression::column("a");
        let b = || Expression::column("b");
        let c = || Expression::column("c");
        assert_eq!(
            expression(&a().eq(1).or(b().eq(2)).and(c().eq(3))),
            "(a = 1 OR b = 2) AND c = 3"
        );
        assert_eq!(
            expression(&a().eq(1).and(b().eq(2)).or(c().eq(3))),
            "a = 1 AND b = 2 OR c = 3"
        );
        assert_eq!(
            expression(&Expression::unary(UnaryOpType::Not, a().eq(true).and(b().eq(false)))),
            "NOT (a = true AND b = false)"
        );
        assert_eq!(expression(&Expression::unary(UnaryOpType::Negative, c())), "-c");
        assert_eq!(expression(&a().lt(Expression::int(-4))), "a < -4");
        assert_eq!(expression(&Operand::Null.into()), "NULL");
        assert_eq!(
            expression(&Expression::column("price").cast(ColumnType::Decimal {
                precision: 10,
                scale: 2
            })),
            "CAST(price AS DECIMAL(10,2))"
        );
    }

    #[test]
    fn alias_and_qualified_columns() {
        let rolls = TableRef::new("rolls").with_schema("inventory").with_alias("r");
        let length = Expression::from(ColumnRef::of(&rolls, "length"));
        assert_eq!(
            compile(
                SelectQuery::new([length.clone().alias("meters")])
                    .from(rolls.clone())
                    .order_by(length.clone().alias("meters").desc())
            ),
            indoc! {"
                SELECT r.length AS meters
                FROM inventory.rolls r
                ORDER BY r.length DESC
            "}
            .trim_end()
        );
        let looms = TableRef::new("looms").with_schema("inventory");
        assert_eq!(
            compile(SelectQuery::new([Expression::from(ColumnRef::of(&looms, "id"))]).from(looms)),
            "SELECT inventory.looms.id\nFROM inventory.looms"
        );
    }

    #[test]
    fn literals() {
        assert_eq!(value(Value::Varchar(Some("it's".into()))), "'it''s'");
        assert_eq!(value(Value::Int16(None)), "NULL");
        assert_eq!(value(Value::Null), "NULL");
        assert_eq!(value(Value::Boolean(Some(true))), "true");
        assert_eq!(value(Value::Int64(Some(-9_000_000_000))), "-9000000000");
        assert_eq!(value(Value::Float64(Some(1.5))), "1.5");
        assert_eq!(
            value(Value::Float64(Some(f64::INFINITY))),
            "CAST('inf' AS DOUBLE PRECISION)"
        );
        assert_eq!(
            value(Value::Decimal(Some(Decimal::new(1250, 2)), 10, 2)),
            "12.50"
        );
        assert_eq!(value(Value::Date(Some(date!(2024 - 03 - 01)))), "'2024-03-01'");
        assert_eq!(
            value(Value::Timestamp(Some(datetime!(2024-03-01 10:20:30.5)))),
            "'2024-03-01 10:20:30.5'"
        );
        assert_eq!(
            value(Value::TimestampWithTimezone(Some(
                datetime!(2024-03-01 01:00:00 +02:00)
            ))),
            "'2024-02-29 23:00:00'"
        );
    }

    #[test]
    fn create_table() {
        assert_eq!(
            compile(
                CreateTable::new("users")
                    .column(ColumnDef::new("id", ColumnType::BigInt).not_null())
                    .column(ColumnDef::new("email", ColumnType::Varchar(None)).not_null())
                    .column(ColumnDef::new("active", ColumnType::Boolean).default_value(true))
                    .column(ColumnDef::new("seen_at", ColumnType::TimestampWithTimezone))
                    .column(ColumnDef::new(
                        "balance",
                        ColumnType::Decimal {
                            precision: 0,
                            scale: 0
                        }
                    ))
                    .primary_key(["id"])
                    .constraint(
                        Constraint::unique(TableRef::new("users"), ["email"]).named("users_email")
                    )
            ),
            indoc! {"
                CREATE TABLE users (
                id BIGINT NOT NULL,
                email VARCHAR NOT NULL,
                active BOOLEAN DEFAULT true,
                seen_at TIMESTAMP WITH TIME ZONE,
                balance DECIMAL,
                PRIMARY KEY (id),
                CONSTRAINT users_email UNIQUE (email)
                )
            "}
            .trim_end()
        );
    }

    #[test]
    fn malformed_statements() {
        let error = |mut statement: Statement| {
            WRITER
                .compile(&mut statement)
                .expect_err("The statement should not compile")
                .downcast::<DialectError>()
                .expect("Expected a dialect error")
        };
        assert!(matches!(
            error(SelectQuery::new([]).from("users").into()),
            DialectError::Compilation(..)
        ));
        assert!(matches!(
            error(
                InsertQuery::new("users", ["id", "email"])
                    .values([Expression::param(1)])
                    .into()
            ),
            DialectError::Compilation(..)
        ));
        assert!(matches!(
            error(InsertQuery::new("users", ["id"]).into()),
            DialectError::Compilation(..)
        ));
        assert!(matches!(
            error(
                SelectQuery::new([Expression::column("id")])
                    .from("users")
                    .limit(Expression::param("ten"))
                    .into()
            ),
            DialectError::Compilation(..)
        ));
        assert!(matches!(
            error(
                SelectQuery::new([Expression::column("id")])
                    .from("users")
                    .offset(Expression::value(Value::Int64(None)))
                    .into()
            ),
            DialectError::Compilation(..)
        ));
        assert!(matches!(
            error(UpdateQuery::new("users").into()),
            DialectError::Compilation(..)
        ));
        assert!(matches!(
            error(CreateTable::new("users").into()),
            DialectError::Compilation(..)
        ));
        assert!(matches!(
            error(
                CreateTable::new("users")
                    .column(ColumnDef::new("id", ColumnType::Integer))
                    .foreign_key(["id"], "accounts", ["id", "region"])
                    .into()
            ),
            DialectError::Compilation(..)
        ));
    }
}
