use crate::{OpenEdgeAsyncDialect, OpenEdgeDialect};
use std::sync::{Arc, LazyLock};
use weft_core::{Dialect, DialectRegistry};

fn odbc() -> Arc<dyn Dialect> {
    Arc::new(OpenEdgeDialect::new())
}

fn odbc_async() -> Arc<dyn Dialect> {
    Arc::new(OpenEdgeAsyncDialect::new())
}

static REGISTRY: LazyLock<DialectRegistry> = LazyLock::new(|| {
    DialectRegistry::new([
        ("openedge.odbc", odbc as fn() -> Arc<dyn Dialect>),
        ("openedge.odbc-async", odbc_async),
    ])
});

/// Dialects of this crate addressable by key or connection url.
pub fn registry() -> &'static DialectRegistry {
    &REGISTRY
}
