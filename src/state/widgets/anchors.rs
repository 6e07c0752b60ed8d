//! Smooth-scroll anchor resolution

use crate::error::SiteError;
use crate::site::{page_name, NavLink, Page};

/// Where following an anchor leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    /// Load another page, then jump to `hash` on it
    Page { path: String, hash: String },
    /// Scroll to a section of the current page
    Section(String),
    /// Scroll to the top of the current page
    Top,
}

/// Resolve an `href` of the form `path#hash` against the current page path
pub fn resolve_anchor(href: &str, current_path: &str) -> AnchorTarget {
    let (path, hash) = href.split_once('#').unwrap_or((href, ""));
    let current = page_name(current_path);

    if !path.is_empty() && path != current {
        AnchorTarget::Page {
            path: path.to_string(),
            hash: hash.to_string(),
        }
    } else if hash.is_empty() {
        AnchorTarget::Top
    } else {
        AnchorTarget::Section(hash.to_string())
    }
}

/// Anchor links of a page with smooth scrolling attached
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    current_path: String,
    anchors: Vec<NavLink>,
}

impl SmoothScroll {
    pub fn attach(page: &Page) -> Result<Self, SiteError> {
        let anchors: Vec<NavLink> = page.anchors().into_iter().cloned().collect();
        if anchors.is_empty() {
            return Err(SiteError::missing("smooth-scroll", "a[href*=\"#\"]"));
        }
        Ok(Self {
            current_path: page.path.clone(),
            anchors,
        })
    }

    /// Resolve a clicked link; `None` when the link has no smooth scrolling
    pub fn follow(&self, href: &str) -> Option<AnchorTarget> {
        self.anchors
            .iter()
            .any(|a| a.href == href)
            .then(|| resolve_anchor(href, &self.current_path))
    }
}
