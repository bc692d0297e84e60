#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rust_decimal::Decimal;
    use time::macros::date;
    use weft::{
        ColumnDef, ColumnType, CreateTable, Dialect, DialectError, Expression, InsertQuery, Value,
        openedge::{OpenEdgeDialect, TypeRegistry},
    };
    use weft_tests::{init_logs, silent_logs};

    #[test]
    fn boolean_round_trip() {
        init_logs();
        for value in [Some(true), Some(false), None] {
            let encoded = TypeRegistry::encode(Value::Boolean(value));
            assert!(matches!(encoded, Value::Int32(None | Some(0 | 1))), "{:?}", encoded);
            let decoded = TypeRegistry::decode_bit(encoded).expect("Should decode");
            assert_eq!(decoded, Value::Boolean(value));
        }
    }

    #[test]
    fn bit_decoding() {
        init_logs();
        assert_eq!(
            TypeRegistry::decode_bit(Value::Int16(Some(-3))).unwrap(),
            Value::Boolean(Some(true))
        );
        assert_eq!(
            TypeRegistry::decode_bit(Value::Int64(Some(0))).unwrap(),
            Value::Boolean(Some(false))
        );
        assert_eq!(
            TypeRegistry::decode_bit(Value::Null).unwrap(),
            Value::Boolean(None)
        );
        silent_logs! {
            let error = TypeRegistry::decode_bit(Value::Varchar(Some("yes".into())))
                .expect_err("Text is not a BIT");
            assert_eq!(
                error.downcast_ref::<DialectError>(),
                Some(&DialectError::TypeMismatch {
                    expected: "BIT",
                    found: "VARCHAR".into(),
                })
            );
            assert!(TypeRegistry::decode_bit(Value::Float64(Some(1.0))).is_err());
        }
    }

    #[test]
    fn decode_row_uses_column_types() {
        init_logs();
        let row = TypeRegistry::decode_row(
            [
                Value::Int32(Some(4)),
                Value::Int32(Some(1)),
                Value::Varchar(Some("denim".into())),
            ]
            .into(),
            &[ColumnType::Integer, ColumnType::Boolean],
        )
        .expect("Should decode the row");
        assert_eq!(
            *row,
            [
                Value::Int32(Some(4)),
                Value::Boolean(Some(true)),
                Value::Varchar(Some("denim".into())),
            ]
        );
    }

    #[test]
    fn boolean_column() {
        init_logs();
        let dialect = OpenEdgeDialect::new();
        let ddl = dialect
            .compile(
                &mut CreateTable::new("fabric_types")
                    .column(ColumnDef::new("code", ColumnType::Varchar(Some(8))).not_null())
                    .column(ColumnDef::new("stretch", ColumnType::Boolean))
                    .primary_key(["code"])
                    .into(),
            )
            .expect("The table should compile");
        assert_eq!(
            ddl.sql,
            indoc! {"
                CREATE TABLE fabric_types (
                code VARCHAR(8) NOT NULL,
                stretch BIT,
                CONSTRAINT pk_fabric_types PRIMARY KEY (code)
                )
            "}
            .trim_end()
        );
        let insert = dialect
            .compile(
                &mut InsertQuery::new("fabric_types", ["code", "stretch"])
                    .values([Expression::param("LYC"), Expression::param(true)])
                    .values([Expression::param("CTN"), Expression::param(Option::<bool>::None)])
                    .into(),
            )
            .expect("The insert should compile");
        assert_eq!(
            insert.params,
            [
                Value::Varchar(Some("LYC".into())),
                Value::Int32(Some(1)),
                Value::Varchar(Some("CTN".into())),
                Value::Int32(None),
            ]
        );
    }

    #[test]
    fn other_parameters_pass_through() {
        init_logs();
        let params = vec![
            Value::Decimal(Some(Decimal::new(1250, 2)), 10, 2),
            Value::Date(Some(date!(2024 - 03 - 01))),
            Value::Null,
        ];
        assert_eq!(TypeRegistry::bind_parameters(params.clone()), params);
    }

    #[test]
    fn reverse_type_lookup() {
        init_logs();
        let cases = [
            ("INTEGER", ColumnType::Integer),
            ("integer", ColumnType::Integer),
            ("varchar(40)", ColumnType::Varchar(Some(40))),
            ("VARCHAR", ColumnType::Varchar(None)),
            ("Date", ColumnType::Date),
            ("TIMESTAMP", ColumnType::Timestamp),
            ("bit", ColumnType::Boolean),
            ("SMALLINT", ColumnType::SmallInt),
            ("BIGINT", ColumnType::BigInt),
            (
                "DECIMAL(10, 2)",
                ColumnType::Decimal {
                    precision: 10,
                    scale: 2,
                },
            ),
            ("double  precision", ColumnType::Double),
        ];
        for (name, expected) in cases {
            assert_eq!(
                TypeRegistry::from_wire_name(name).expect("Known type"),
                expected,
                "{}",
                name
            );
        }
        for column_type in cases.iter().map(|(_, v)| v) {
            let Ok(name) = TypeRegistry::ddl_name(column_type) else {
                continue;
            };
            assert_eq!(
                TypeRegistry::from_wire_name(&name).expect("Known type"),
                *column_type
            );
        }
    }

    #[test]
    fn reverse_type_lookup_unknown() {
        init_logs();
        silent_logs! {
            for name in ["CLOB", "VARCHAR(abc)", "DATE(3)", "VARCHAR(10", ""] {
                let error = TypeRegistry::from_wire_name(name).expect_err("Unknown type");
                assert_eq!(
                    error.downcast_ref::<DialectError>(),
                    Some(&DialectError::UnsupportedType(name.into())),
                );
            }
        }
    }
}
