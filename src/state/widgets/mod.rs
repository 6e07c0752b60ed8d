//! Page widgets
//!
//! Each widget attaches to a page independently. A widget whose elements are
//! missing is disabled on its own and the rest of the page keeps working.

mod anchors;
mod carousel;
mod lazy_images;
mod progress;
mod toggles;

pub use anchors::{AnchorTarget, SmoothScroll};
pub use carousel::Carousel;
pub use lazy_images::LazyImages;
pub use progress::ProgressBars;
pub use toggles::{MenuToggle, ThemeToggle};

use crate::error::SiteError;

/// Keep an attached widget, logging and dropping one that failed to attach
pub fn attached<T>(widget: Result<T, SiteError>) -> Option<T> {
    match widget {
        Ok(widget) => Some(widget),
        Err(err) => {
            tracing::error!(error = %err, "Widget disabled");
            None
        }
    }
}
