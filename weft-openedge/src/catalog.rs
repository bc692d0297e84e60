use crate::{DEFAULT_SCHEMA, OpenEdgeSqlWriter, SYSTEM_SCHEMA};
use weft_core::{SqlWriter, WriterContext as Context};

fn write_name_literal(out: &mut String, name: &str) {
    OpenEdgeSqlWriter::new().write_value_string(&mut Context::default(), out, name);
}

/// Probe returning one row when the table exists in the `PUB` schema.
pub fn has_table_sql(name: &str) -> String {
    let mut out = format!(
        "SELECT 1 FROM {}.SYSTABLES WHERE OWNER='{}' AND TBL=",
        SYSTEM_SCHEMA, DEFAULT_SCHEMA
    );
    write_name_literal(&mut out, name);
    out
}

/// Probe returning one row when the sequence exists in the `PUB` schema.
pub fn has_sequence_sql(name: &str) -> String {
    let mut out = format!(
        "SELECT 1 FROM {}.SYSSEQUENCES WHERE \"SEQ-OWNER\"='{}' AND \"SEQ-NAME\"=",
        SYSTEM_SCHEMA, DEFAULT_SCHEMA
    );
    write_name_literal(&mut out, name);
    out
}
