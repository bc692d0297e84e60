/// Static feature flags the mapping layer consults before emitting SQL or trusting results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Dialect identity, also the family part of the registry key.
    pub name: &'static str,
    /// When false, booleans travel as integers and go through the dialect codec.
    pub supports_native_boolean: bool,
    /// Affected-row counts reported by the driver are reliable.
    pub supports_sane_rowcount: bool,
    /// Statements may contain non ASCII text.
    pub supports_unicode_statements: bool,
    /// Compiled statements may be cached across executions.
    pub supports_statement_cache: bool,
    /// Sequence constructs can be compiled.
    pub supports_sequences: bool,
}

impl Capabilities {
    /// Conservative flags for an unknown database.
    pub const GENERIC: Capabilities = Capabilities {
        name: "generic",
        supports_native_boolean: true,
        supports_sane_rowcount: true,
        supports_unicode_statements: true,
        supports_statement_cache: false,
        supports_sequences: true,
    };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::GENERIC
    }
}
