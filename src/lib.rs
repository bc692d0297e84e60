pub use weft_core::*;
pub use weft_openedge as openedge;
