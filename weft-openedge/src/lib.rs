mod capabilities;
mod catalog;
mod dialect;
mod identifier;
mod liveness;
mod pool;
mod registry;
mod sql_writer;
mod types;

pub use capabilities::*;
pub use catalog::*;
pub use dialect::*;
pub use identifier::*;
pub use liveness::*;
pub use pool::*;
pub use registry::*;
pub use sql_writer::*;
pub use types::*;
