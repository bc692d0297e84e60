mod capabilities;
mod column_def;
mod connection;
mod constraint;
mod dialect;
mod error;
mod expression;
mod query;
mod registry;
mod statement;
mod table_ref;
mod util;
mod value;
pub mod writer;

pub use ::anyhow::Context;
pub use capabilities::*;
pub use column_def::*;
pub use connection::*;
pub use constraint::*;
pub use dialect::*;
pub use error::*;
pub use expression::*;
pub use query::*;
pub use registry::*;
pub use statement::*;
pub use table_ref::*;
pub use util::*;
pub use value::*;
pub use writer::{Context as WriterContext, Fragment, GenericSqlWriter, SqlWriter};
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
