use crate::{Result, Row, Value};
use futures::Stream;
use std::future::Future;

/// Information a connection can report about the server it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    DbmsName,
    DbmsVersion,
}

/// Blocking statement handle, borrowed from a [`Connection`].
pub trait Cursor {
    /// Run a statement with its positional parameters.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<()>;
    /// Next row of the current result set, `None` when exhausted.
    fn fetch_one(&mut self) -> Result<Option<Row>>;
    /// Rows affected by the last statement, when the driver knows.
    fn rowcount(&self) -> Option<u64>;
    fn close(&mut self) -> Result<()>;
}

/// Blocking ODBC session. Owned by the pool, the dialect only borrows it for the duration of a call.
pub trait Connection {
    type Cursor<'c>: Cursor
    where
        Self: 'c;

    fn cursor(&mut self) -> Result<Self::Cursor<'_>>;
    fn get_info(&mut self, info: InfoType) -> Result<String>;
}

/// Statement handle borrowed from an [`AsyncConnection`].
pub trait AsyncCursor: Send {
    fn execute(&mut self, sql: &str, params: &[Value]) -> impl Future<Output = Result<()>> + Send;
    /// Rows of the current result set.
    fn fetch(&mut self) -> impl Stream<Item = Result<Row>> + Send;
    fn rowcount(&self) -> Option<u64>;
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// ODBC session driven through an async connector.
pub trait AsyncConnection: Send {
    type Cursor<'c>: AsyncCursor
    where
        Self: 'c;

    fn cursor(&mut self) -> impl Future<Output = Result<Self::Cursor<'_>>> + Send;
    fn get_info(&mut self, info: InfoType) -> impl Future<Output = Result<String>> + Send;
}

/// Opens async connections from an opaque connection URL.
pub trait AsyncConnector: Send + Sync {
    type Connection: AsyncConnection;

    fn connect(&self, url: &str) -> impl Future<Output = Result<Self::Connection>> + Send;
}
