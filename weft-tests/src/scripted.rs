use std::{
    collections::VecDeque,
    future::Future,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use weft_core::{
    AsyncConnection, AsyncConnector, AsyncCursor, Connection, Cursor, DriverError, Error,
    InfoType, Result, Row, Value, stream,
};

/// What a scripted statement execution does.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Succeed and return these rows.
    Rows(Vec<Row>),
    /// Succeed without a result set, reporting the affected rows.
    Affected(u64),
    /// Fail with a driver error carrying the code.
    Driver(String, String),
    /// Fail with an error that did not come from the driver.
    Failure(String),
}

impl Outcome {
    pub fn driver(code: &str, message: &str) -> Self {
        Outcome::Driver(code.into(), message.into())
    }

    pub fn failure(message: &str) -> Self {
        Outcome::Failure(message.into())
    }

    fn into_result(self) -> Result<(Vec<Row>, Option<u64>)> {
        match self {
            Outcome::Rows(rows) => {
                let count = rows.len() as u64;
                Ok((rows, Some(count)))
            }
            Outcome::Affected(count) => Ok((Vec::new(), Some(count))),
            Outcome::Driver(code, message) => Err(DriverError::new(code, message).into()),
            Outcome::Failure(message) => Err(Error::msg(message)),
        }
    }
}

/// Interaction observed by a scripted connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect(String),
    Cursor,
    Execute(String),
    Fetch,
    Close,
    GetInfo(InfoType),
}

#[derive(Debug, Default)]
struct Script {
    outcomes: VecDeque<Outcome>,
    rows: Vec<Row>,
    dbms_version: Option<String>,
    params: Vec<Vec<Value>>,
    calls: Vec<Call>,
}

/// Fake ODBC session replaying scripted outcomes, usable both as a blocking and as an async connection.
///
/// Clones share the script, so a clone kept by the test observes what the dialect did with the other.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConnection {
    script: Arc<Mutex<Script>>,
}

impl ScriptedConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows returned by every execution that has no queued outcome.
    pub fn returning(self, rows: Vec<Row>) -> Self {
        self.lock().rows = rows;
        self
    }

    /// Queue the outcome of the next execution.
    pub fn then(self, outcome: Outcome) -> Self {
        self.queue(outcome);
        self
    }

    /// Like [`ScriptedConnection::then`] through a shared handle.
    pub fn queue(&self, outcome: Outcome) {
        self.lock().outcomes.push_back(outcome);
    }

    /// Answer `get_info(DbmsVersion)`, without it the call fails.
    pub fn with_dbms_version(self, version: &str) -> Self {
        self.lock().dbms_version = Some(version.into());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// SQL of every executed statement, in order.
    pub fn executed(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .filter_map(|v| match v {
                Call::Execute(sql) => Some(sql.clone()),
                _ => None,
            })
            .collect()
    }

    /// Parameters of every executed statement, in order.
    pub fn params(&self) -> Vec<Vec<Value>> {
        self.lock().params.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: Call) {
        self.lock().calls.push(call);
    }

    fn new_cursor(&self) -> ScriptedCursor {
        self.record(Call::Cursor);
        ScriptedCursor {
            connection: self.clone(),
            rows: VecDeque::new(),
            rowcount: None,
        }
    }

    fn info(&self, info: InfoType) -> Result<String> {
        let mut script = self.lock();
        script.calls.push(Call::GetInfo(info));
        match (info, &script.dbms_version) {
            (InfoType::DbmsName, ..) => Ok("OpenEdge".into()),
            (InfoType::DbmsVersion, Some(version)) => Ok(version.clone()),
            (InfoType::DbmsVersion, None) => Err(Error::msg("getinfo is not supported")),
        }
    }
}

/// Cursor of a [`ScriptedConnection`].
#[derive(Debug)]
pub struct ScriptedCursor {
    connection: ScriptedConnection,
    rows: VecDeque<Row>,
    rowcount: Option<u64>,
}

impl ScriptedCursor {
    fn run(&mut self, sql: &str, params: &[Value]) -> Result<()> {
        let outcome = {
            let mut script = self.connection.lock();
            script.calls.push(Call::Execute(sql.into()));
            script.params.push(params.to_vec());
            match script.outcomes.pop_front() {
                Some(outcome) => outcome,
                None => Outcome::Rows(script.rows.clone()),
            }
        };
        let (rows, rowcount) = outcome.into_result()?;
        self.rows = rows.into();
        self.rowcount = rowcount;
        Ok(())
    }

    fn finish(&mut self) {
        self.rows.clear();
        self.connection.record(Call::Close);
    }
}

impl Cursor for ScriptedCursor {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<()> {
        self.run(sql, params)
    }

    fn fetch_one(&mut self) -> Result<Option<Row>> {
        self.connection.record(Call::Fetch);
        Ok(self.rows.pop_front())
    }

    fn rowcount(&self) -> Option<u64> {
        self.rowcount
    }

    fn close(&mut self) -> Result<()> {
        self.finish();
        Ok(())
    }
}

impl AsyncCursor for ScriptedCursor {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<()> {
        self.run(sql, params)
    }

    fn fetch(&mut self) -> impl stream::Stream<Item = Result<Row>> + Send {
        self.connection.record(Call::Fetch);
        stream::iter(self.rows.drain(..).map(Ok).collect::<Vec<_>>())
    }

    fn rowcount(&self) -> Option<u64> {
        self.rowcount
    }

    async fn close(&mut self) -> Result<()> {
        self.finish();
        Ok(())
    }
}

impl Connection for ScriptedConnection {
    type Cursor<'c>
        = ScriptedCursor
    where
        Self: 'c;

    fn cursor(&mut self) -> Result<ScriptedCursor> {
        Ok(self.new_cursor())
    }

    fn get_info(&mut self, info: InfoType) -> Result<String> {
        self.info(info)
    }
}

impl AsyncConnection for ScriptedConnection {
    type Cursor<'c>
        = ScriptedCursor
    where
        Self: 'c;

    async fn cursor(&mut self) -> Result<ScriptedCursor> {
        Ok(self.new_cursor())
    }

    async fn get_info(&mut self, info: InfoType) -> Result<String> {
        self.info(info)
    }
}

/// Connector handing out clones of one scripted connection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConnector {
    connection: ScriptedConnection,
}

impl ScriptedConnector {
    pub fn new(connection: ScriptedConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &ScriptedConnection {
        &self.connection
    }
}

impl AsyncConnector for ScriptedConnector {
    type Connection = ScriptedConnection;

    fn connect(&self, url: &str) -> impl Future<Output = Result<ScriptedConnection>> + Send {
        self.connection.record(Call::Connect(url.into()));
        let connection = self.connection.clone();
        async move { Ok(connection) }
    }
}
