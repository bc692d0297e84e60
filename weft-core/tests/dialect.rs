#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use weft_core::{
        AsValue, Capabilities, Dialect, DialectFactory, DialectRegistry, Expression, GenericSqlWriter,
        SelectQuery, ServerVersion, SqlWriter, Value,
    };

    static CAPABILITIES: Capabilities = Capabilities::GENERIC;

    #[derive(Debug)]
    struct Generic;

    impl Dialect for Generic {
        fn driver(&self) -> &'static str {
            "memory"
        }
        fn capabilities(&self) -> &Capabilities {
            &CAPABILITIES
        }
        fn sql_writer(&self) -> &dyn SqlWriter {
            &GenericSqlWriter
        }
        fn default_schema_name(&self) -> &'static str {
            "public"
        }
        fn server_version_info(&self) -> Option<ServerVersion> {
            None
        }
        fn bind_parameters(&self, params: Vec<Value>) -> weft_core::Result<Vec<Value>> {
            Ok(params
                .into_iter()
                .map(|v| match v {
                    Value::Int16(v) => Value::Int64(v.map(Into::into)),
                    v => v,
                })
                .collect())
        }
    }

    fn generic() -> Arc<dyn Dialect> {
        Arc::new(Generic)
    }

    #[test]
    fn server_version() {
        assert_eq!(
            ServerVersion::parse("11.07.0000"),
            Some(ServerVersion(11, 7, 0))
        );
        assert_eq!(
            ServerVersion::parse("OpenEdge Release 12.2"),
            Some(ServerVersion(12, 2, 0))
        );
        assert_eq!(ServerVersion::parse("unknown"), None);
        assert!(ServerVersion::UNKNOWN.is_unknown());
        assert_eq!(ServerVersion(11, 7, 3).to_string(), "11.7.3");
        assert!(ServerVersion(12, 0, 0) > ServerVersion(11, 7, 9));
    }

    #[test]
    fn registry() {
        let registry = DialectRegistry::new([("generic.memory", generic as DialectFactory)]);
        assert_eq!(registry.keys().collect::<Vec<_>>(), ["generic.memory"]);
        assert!(registry.contains("generic.memory"));
        assert!(!registry.contains("generic.odbc"));
        let dialect = registry
            .from_url("generic+memory://localhost/db")
            .expect("Should find the dialect");
        assert_eq!(dialect.key(), "generic.memory");
        assert_eq!(dialect.name(), "generic");
        assert!(!dialect.is_disconnect(&weft_core::Error::msg("boom")));
        let error = registry.load("generic.odbc").err().expect("Should fail");
        assert!(format!("{:#}", error).contains("generic.memory"));
        assert!(registry.from_url("generic://localhost").is_err());
        assert!(registry.from_url("not a url").is_err());
    }

    #[test]
    fn compile_binds_parameters() {
        let query = Generic
            .compile(
                &mut SelectQuery::new([Expression::column("id")])
                    .from("items")
                    .filter(Expression::column("qty").gt(Expression::param(3_i16)))
                    .into(),
            )
            .expect("Should compile");
        assert_eq!(query.sql, "SELECT id\nFROM items\nWHERE qty > ?");
        assert_eq!(query.params, [Value::Int64(Some(3))]);
    }

    #[test]
    fn values() {
        assert_eq!(bool::try_from_value(Value::Int32(Some(2))).unwrap(), true);
        assert_eq!(bool::try_from_value(Value::Int16(Some(0))).unwrap(), false);
        assert_eq!(i64::try_from_value(Value::Int32(Some(7))).unwrap(), 7);
        assert!(i32::try_from_value(Value::Int64(Some(i64::MAX))).is_err());
        assert!(i32::try_from_value(Value::Varchar(Some("7".into()))).is_err());
        assert_eq!(
            Option::<i32>::try_from_value(Value::Int32(None)).unwrap(),
            None
        );
        assert_eq!(Value::from(Some(5_i64)), Value::Int64(Some(5)));
        assert_eq!(Value::from(None::<String>), Value::Varchar(None));
        assert_eq!(Value::from("abc"), Value::Varchar(Some("abc".into())));
        assert!(Value::Decimal(None, 10, 2).is_null());
        assert_eq!(Value::Int16(Some(-3)).as_integer(), Some(-3));
        assert_eq!(Value::Float64(Some(1.0)).as_integer(), None);
        assert_eq!(Value::Boolean(None).type_name(), "BOOLEAN");
    }
}
