use crate::{
    DEFAULT_SCHEMA, OPENEDGE_CAPABILITIES, OpenEdgeSqlWriter, TypeRegistry, has_sequence_sql,
    has_table_sql, is_disconnect, ping, ping_async,
};
use std::sync::OnceLock;
use weft_core::{
    AsyncConnection, AsyncCursor, Capabilities, ColumnType, CompiledQuery, Connection, Cursor,
    Dialect, DialectError, Error, InfoType, Result, Row, RowsAffected, SelectQuery, Sequence,
    ServerVersion, SqlWriter, Statement, Value,
    stream::TryStreamExt,
    truncate_long,
};

static WRITER: OpenEdgeSqlWriter = OpenEdgeSqlWriter::new();

fn fail(error: Error, query: &str) -> Error {
    let error = error.context(format!(
        "While executing the query:\n{}",
        truncate_long!(query)
    ));
    log::error!("{:#}", error);
    error
}

fn sequence_query(sequence: &Sequence) -> Result<CompiledQuery> {
    WRITER.compile(&mut SelectQuery::new([sequence.next_value()]).into())
}

fn first_integer(rows: Vec<Row>, sequence: &Sequence) -> Result<i64> {
    let value = rows
        .into_iter()
        .next()
        .and_then(|row| row.into_vec().into_iter().next())
        .unwrap_or_default();
    value.as_integer().ok_or_else(|| {
        let error = Error::new(DialectError::TypeMismatch {
            expected: "INTEGER",
            found: value.type_name().into(),
        })
        .context(format!("While reading the next value of `{}`", sequence.name));
        log::error!("{:#}", error);
        error
    })
}

fn decode_rows(rows: Vec<Row>, types: &[ColumnType]) -> Result<Vec<Row>> {
    rows.into_iter()
        .map(|row| TypeRegistry::decode_row(row, types))
        .collect()
}

fn parse_server_version(version: &str) -> ServerVersion {
    ServerVersion::parse(version).unwrap_or_else(|| {
        log::warn!(
            "Could not parse the OpenEdge server version `{}`, recording {}",
            version,
            ServerVersion::UNKNOWN
        );
        ServerVersion::UNKNOWN
    })
}

/// Run one statement on a fresh cursor, the rows are collected only when asked.
fn run<C: Connection>(
    connection: &mut C,
    sql: &str,
    params: &[Value],
    fetch: bool,
) -> Result<(Vec<Row>, Option<u64>)> {
    let mut cursor = connection.cursor().map_err(|e| fail(e, sql))?;
    let result = (|| {
        cursor.execute(sql, params)?;
        let mut rows = Vec::new();
        if fetch {
            while let Some(row) = cursor.fetch_one()? {
                rows.push(row);
            }
        }
        Ok::<_, Error>((rows, cursor.rowcount()))
    })();
    // The cursor is closed even when the statement failed, the first error wins
    let closed = cursor.close();
    result.and_then(|v| closed.map(|_| v)).map_err(|e| fail(e, sql))
}

async fn run_async<C: AsyncConnection>(
    connection: &mut C,
    sql: &str,
    params: &[Value],
    fetch: bool,
) -> Result<(Vec<Row>, Option<u64>)> {
    let mut cursor = connection.cursor().await.map_err(|e| fail(e, sql))?;
    let result = async {
        cursor.execute(sql, params).await?;
        let rows = if fetch {
            cursor.fetch().try_collect::<Vec<_>>().await?
        } else {
            Vec::new()
        };
        Ok::<_, Error>((rows, cursor.rowcount()))
    }
    .await;
    let closed = cursor.close().await;
    result.and_then(|v| closed.map(|_| v)).map_err(|e| fail(e, sql))
}

/// OpenEdge over a blocking ODBC connection.
#[derive(Default, Debug)]
pub struct OpenEdgeDialect {
    server_version: OnceLock<ServerVersion>,
}

impl OpenEdgeDialect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the server version, only the first initialization has effect.
    pub fn initialize<C: Connection>(&self, connection: &mut C) -> Result<()> {
        let version = self.get_server_version_info(connection)?;
        if self.server_version.set(version).is_ok() {
            log::debug!("Initialized OpenEdge dialect, server version {}", version);
        }
        Ok(())
    }

    /// Ask the driver for the DBMS version.
    pub fn get_server_version_info<C: Connection>(&self, connection: &mut C) -> Result<ServerVersion> {
        let version = connection.get_info(InfoType::DbmsVersion).map_err(|e| {
            let e = e.context("While reading the OpenEdge server version");
            log::error!("{:#}", e);
            e
        })?;
        Ok(parse_server_version(&version))
    }

    pub fn ping<C: Connection>(&self, connection: &mut C) -> Result<bool> {
        ping(connection)
    }

    pub fn has_table<C: Connection>(&self, connection: &mut C, name: &str) -> Result<bool> {
        let (rows, ..) = run(connection, &has_table_sql(name), &[], true)?;
        Ok(!rows.is_empty())
    }

    pub fn has_sequence<C: Connection>(&self, connection: &mut C, name: &str) -> Result<bool> {
        let (rows, ..) = run(connection, &has_sequence_sql(name), &[], true)?;
        Ok(!rows.is_empty())
    }

    /// Compile and execute a statement, reporting the affected rows.
    pub fn execute<C: Connection>(
        &self,
        connection: &mut C,
        statement: &mut Statement,
    ) -> Result<RowsAffected> {
        let query = self.compile(statement)?;
        let (.., rowcount) = run(connection, &query.sql, &query.params, false)?;
        Ok(RowsAffected {
            rows_affected: rowcount,
        })
    }

    /// Compile and execute a statement, decoding the rows against the expected column types.
    pub fn fetch_all<C: Connection>(
        &self,
        connection: &mut C,
        statement: &mut Statement,
        types: &[ColumnType],
    ) -> Result<Vec<Row>> {
        let query = self.compile(statement)?;
        let (rows, ..) = run(connection, &query.sql, &query.params, true)?;
        decode_rows(rows, types)
    }

    /// Fire the sequence and return its new value.
    pub fn next_value<C: Connection>(&self, connection: &mut C, sequence: &Sequence) -> Result<i64> {
        let query = sequence_query(sequence)?;
        let (rows, ..) = run(connection, &query.sql, &[], true)?;
        first_integer(rows, sequence)
    }
}

impl Dialect for OpenEdgeDialect {
    fn driver(&self) -> &'static str {
        "odbc"
    }

    fn capabilities(&self) -> &Capabilities {
        &OPENEDGE_CAPABILITIES
    }

    fn sql_writer(&self) -> &dyn SqlWriter {
        &WRITER
    }

    fn default_schema_name(&self) -> &'static str {
        DEFAULT_SCHEMA
    }

    fn server_version_info(&self) -> Option<ServerVersion> {
        self.server_version.get().copied()
    }

    fn is_disconnect(&self, error: &Error) -> bool {
        is_disconnect(error)
    }

    fn bind_parameters(&self, params: Vec<Value>) -> Result<Vec<Value>> {
        Ok(TypeRegistry::bind_parameters(params))
    }
}

/// OpenEdge over an async ODBC connector. The server is never asked for its version.
#[derive(Default, Debug)]
pub struct OpenEdgeAsyncDialect {
    server_version: OnceLock<ServerVersion>,
}

impl OpenEdgeAsyncDialect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the unknown version sentinel without touching the connection.
    pub async fn initialize<C: AsyncConnection>(&self, connection: &mut C) -> Result<()> {
        let version = self.get_server_version_info(connection).await?;
        if self.server_version.set(version).is_ok() {
            log::debug!("Initialized async OpenEdge dialect, server version not interrogated");
        }
        Ok(())
    }

    pub async fn get_server_version_info<C: AsyncConnection>(
        &self,
        _connection: &mut C,
    ) -> Result<ServerVersion> {
        Ok(ServerVersion::UNKNOWN)
    }

    pub async fn ping<C: AsyncConnection>(&self, connection: &mut C) -> Result<bool> {
        ping_async(connection).await
    }

    pub async fn has_table<C: AsyncConnection>(&self, connection: &mut C, name: &str) -> Result<bool> {
        let (rows, ..) = run_async(connection, &has_table_sql(name), &[], true).await?;
        Ok(!rows.is_empty())
    }

    pub async fn has_sequence<C: AsyncConnection>(
        &self,
        connection: &mut C,
        name: &str,
    ) -> Result<bool> {
        let (rows, ..) = run_async(connection, &has_sequence_sql(name), &[], true).await?;
        Ok(!rows.is_empty())
    }

    pub async fn execute<C: AsyncConnection>(
        &self,
        connection: &mut C,
        statement: &mut Statement,
    ) -> Result<RowsAffected> {
        let query = self.compile(statement)?;
        let (.., rowcount) = run_async(connection, &query.sql, &query.params, false).await?;
        Ok(RowsAffected {
            rows_affected: rowcount,
        })
    }

    pub async fn fetch_all<C: AsyncConnection>(
        &self,
        connection: &mut C,
        statement: &mut Statement,
        types: &[ColumnType],
    ) -> Result<Vec<Row>> {
        let query = self.compile(statement)?;
        let (rows, ..) = run_async(connection, &query.sql, &query.params, true).await?;
        decode_rows(rows, types)
    }

    pub async fn next_value<C: AsyncConnection>(
        &self,
        connection: &mut C,
        sequence: &Sequence,
    ) -> Result<i64> {
        let query = sequence_query(sequence)?;
        let (rows, ..) = run_async(connection, &query.sql, &[], true).await?;
        first_integer(rows, sequence)
    }
}

impl Dialect for OpenEdgeAsyncDialect {
    fn driver(&self) -> &'static str {
        "odbc-async"
    }

    fn capabilities(&self) -> &Capabilities {
        &OPENEDGE_CAPABILITIES
    }

    fn sql_writer(&self) -> &dyn SqlWriter {
        &WRITER
    }

    fn default_schema_name(&self) -> &'static str {
        DEFAULT_SCHEMA
    }

    fn server_version_info(&self) -> Option<ServerVersion> {
        self.server_version.get().copied()
    }

    fn is_disconnect(&self, error: &Error) -> bool {
        is_disconnect(error)
    }

    fn bind_parameters(&self, params: Vec<Value>) -> Result<Vec<Value>> {
        Ok(TypeRegistry::bind_parameters(params))
    }
}
