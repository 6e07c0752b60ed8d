//! Site document and page geometry

mod document;
mod layout;

pub use document::*;
pub use layout::*;
