use crate::{Capabilities, CompiledQuery, Error, Result, SqlWriter, Statement, Value};
use std::fmt::{self, Display};

/// Version tuple reported by the server, `(0,0,0)` when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServerVersion(pub u16, pub u16, pub u16);

impl ServerVersion {
    pub const UNKNOWN: ServerVersion = ServerVersion(0, 0, 0);

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// Parse a dotted version string like `11.07.0000`, ignoring trailing text.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value
            .trim()
            .split(|c: char| !c.is_ascii_digit())
            .filter(|v| !v.is_empty())
            .map(|v| v.parse::<u16>());
        let major = parts.next()?.ok()?;
        let minor = parts.next().transpose().ok()?.unwrap_or(0);
        let patch = parts.next().transpose().ok()?.unwrap_or(0);
        Some(ServerVersion(major, minor, patch))
    }
}

impl Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

/// Bundle of compiler, capability flags, type processing and error classification for one database.
pub trait Dialect: Send + Sync {
    /// Driver part of the registry key, the family is `capabilities().name`.
    fn driver(&self) -> &'static str;

    fn capabilities(&self) -> &Capabilities;

    fn sql_writer(&self) -> &dyn SqlWriter;

    /// Schema owning user tables when a reference is unqualified.
    fn default_schema_name(&self) -> &'static str;

    /// Version recorded during initialization, `None` before it ran.
    fn server_version_info(&self) -> Option<ServerVersion>;

    fn name(&self) -> &'static str {
        self.capabilities().name
    }

    /// Registry key `<family>.<driver>`.
    fn key(&self) -> String {
        format!("{}.{}", self.name(), self.driver())
    }

    /// Whether the error means the connection is dead and must leave the pool.
    fn is_disconnect(&self, _error: &Error) -> bool {
        false
    }

    /// Convert parameters to what the wire accepts.
    fn bind_parameters(&self, params: Vec<Value>) -> Result<Vec<Value>> {
        Ok(params)
    }

    /// Compile a statement and process its parameters for binding.
    fn compile(&self, statement: &mut Statement) -> Result<CompiledQuery> {
        let mut query = self.sql_writer().compile(statement)?;
        query.params = self.bind_parameters(query.params)?;
        Ok(query)
    }
}
