use weft_core::Capabilities;

pub static OPENEDGE_CAPABILITIES: Capabilities = Capabilities {
    name: "openedge",
    supports_native_boolean: false,
    supports_sane_rowcount: true,
    supports_unicode_statements: true,
    supports_statement_cache: true,
    supports_sequences: true,
};
