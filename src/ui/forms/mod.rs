//! Form rendering module

mod field_renderer;

pub use field_renderer::{field_lines, submit_line};
