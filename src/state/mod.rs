//! Application state module

mod forms;
mod page_state;
mod scroll_state;
mod widgets;

pub use forms::*;
pub use page_state::*;
pub use scroll_state::*;
pub use widgets::*;
