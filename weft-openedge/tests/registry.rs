#[cfg(test)]
mod tests {
    use weft_core::{Expression, SelectQuery, Statement};
    use weft_openedge::registry;
    use weft_tests::{init_logs, silent_logs};

    #[test]
    fn keys() {
        init_logs();
        assert_eq!(
            registry().keys().collect::<Vec<_>>(),
            ["openedge.odbc", "openedge.odbc-async"]
        );
        assert!(registry().contains("openedge.odbc"));
        assert!(!registry().contains("openedge"));
    }

    #[test]
    fn load_by_key() {
        init_logs();
        let dialect = registry().load("openedge.odbc").expect("Registered");
        assert_eq!(dialect.key(), "openedge.odbc");
        assert_eq!(dialect.server_version_info(), None);
        let dialect = registry().load("openedge.odbc-async").expect("Registered");
        assert_eq!(dialect.driver(), "odbc-async");
        assert!(!dialect.capabilities().supports_native_boolean);
        silent_logs! {
            let error = registry().load("mysql.odbc").map(|_| ()).unwrap_err();
            assert!(error.to_string().contains("openedge.odbc-async"));
        }
    }

    #[test]
    fn load_by_url() {
        init_logs();
        assert_eq!(
            registry()
                .from_url("openedge+odbc://textile-dsn")
                .expect("Known scheme")
                .key(),
            "openedge.odbc"
        );
        assert_eq!(
            registry()
                .from_url("openedge+odbc-async://erp-db:20931/textile")
                .expect("Known scheme")
                .key(),
            "openedge.odbc-async"
        );
        silent_logs! {
            assert!(registry().from_url("openedge://erp-db/textile").is_err());
            assert!(registry().from_url("mssql+odbc://erp-db/textile").is_err());
            assert!(registry().from_url("not a url").is_err());
        }
    }

    #[test]
    fn dialects_compile_alike() {
        init_logs();
        let mut sync: Statement = SelectQuery::new([Expression::now()]).into();
        let mut other: Statement = SelectQuery::new([Expression::now()]).into();
        let sync = registry().load("openedge.odbc").unwrap().compile(&mut sync).unwrap();
        let other = registry()
            .load("openedge.odbc-async")
            .unwrap()
            .compile(&mut other)
            .unwrap();
        assert_eq!(sync, other);
        assert_eq!(sync.sql, "SELECT SYSDATE\nFROM SYSPROGRESS.SYSCALCTABLE");
    }
}
