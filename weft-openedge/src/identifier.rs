/// Schema owning user tables and sequences.
pub const DEFAULT_SCHEMA: &str = "PUB";
/// Schema of the system catalogs.
pub const SYSTEM_SCHEMA: &str = "SYSPROGRESS";
/// One-row synthetic table, the FROM source of scalar SELECTs.
pub const CALC_TABLE: &str = "SYSPROGRESS.SYSCALCTABLE";

/// OpenEdge SQL reserved words, sorted and uppercase.
static RESERVED_WORDS: &[&str] = &[
    "ADD",
    "ALL",
    "ALTER",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "AVG",
    "BEGIN",
    "BETWEEN",
    "BIGINT",
    "BIT",
    "BY",
    "CASE",
    "CAST",
    "CHAR",
    "CHARACTER",
    "CHECK",
    "CLOSE",
    "COLUMN",
    "COMMIT",
    "CONNECT",
    "CONSTRAINT",
    "CONTAINS",
    "COUNT",
    "CREATE",
    "CURRENT",
    "CURSOR",
    "DATE",
    "DECIMAL",
    "DECLARE",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DISTINCT",
    "DOUBLE",
    "DROP",
    "ELSE",
    "END",
    "ESCAPE",
    "EXISTS",
    "FETCH",
    "FLOAT",
    "FOR",
    "FOREIGN",
    "FROM",
    "GRANT",
    "GROUP",
    "HAVING",
    "IN",
    "INDEX",
    "INSERT",
    "INTEGER",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "LEFT",
    "LIKE",
    "MAX",
    "MIN",
    "NOT",
    "NULL",
    "NUMERIC",
    "OF",
    "OFFSET",
    "ON",
    "OPEN",
    "OPTION",
    "OR",
    "ORDER",
    "OUTER",
    "PRECISION",
    "PRIMARY",
    "PRIVILEGES",
    "PUBLIC",
    "REAL",
    "REFERENCES",
    "RESOURCE",
    "REVOKE",
    "RIGHT",
    "ROLLBACK",
    "ROWID",
    "ROWNUM",
    "ROWS",
    "SELECT",
    "SET",
    "SMALLINT",
    "SOME",
    "SUM",
    "SYNONYM",
    "SYSDATE",
    "SYSTIME",
    "SYSTIMESTAMP",
    "TABLE",
    "THEN",
    "TIME",
    "TIMESTAMP",
    "TINYINT",
    "TO",
    "UNION",
    "UNIQUE",
    "UPDATE",
    "USER",
    "USING",
    "VALUES",
    "VARCHAR",
    "VIEW",
    "WHEN",
    "WHERE",
    "WITH",
    "WORK",
];

pub fn is_reserved_word(value: &str) -> bool {
    RESERVED_WORDS
        .binary_search(&value.to_ascii_uppercase().as_str())
        .is_ok()
}

/// Quote reserved words, identifiers starting with a digit and identifiers with characters outside `[A-Za-z0-9_]`.
pub fn requires_quotes(value: &str) -> bool {
    match value.as_bytes().first() {
        None => true,
        Some(first) if first.is_ascii_digit() => true,
        Some(..) => {
            value
                .bytes()
                .any(|c| !(c.is_ascii_alphanumeric() || c == b'_'))
                || is_reserved_word(value)
        }
    }
}
