//! Deferred image loading
//!
//! An image is observed when it carries `data-src` or one of the logo/badge
//! classes. The first time an observed image enters the viewport its
//! `data-src` is promoted to `src` and the image is no longer observed.

use crate::site::{Image, Page, PageLayout, Viewport};

/// Classes that are always observed
const OBSERVED_CLASSES: [&str; 2] = ["client-logo", "trust-badge"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    pub alt: String,
    pub src: Option<String>,
    pub data_src: Option<String>,
    pub row: u16,
    pub observed: bool,
}

impl LazyImage {
    fn from_image(image: &Image, row: u16) -> Self {
        let observed = image.data_src.is_some()
            || image
                .class
                .as_deref()
                .is_some_and(|class| {
                    class
                        .split_whitespace()
                        .any(|c| OBSERVED_CLASSES.contains(&c))
                });
        Self {
            alt: image.alt.clone(),
            src: image.src.clone(),
            data_src: image.data_src.clone(),
            row,
            observed,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.src.is_some()
    }
}

/// Every image of a page, observed or not, in document order
#[derive(Debug, Clone)]
pub struct LazyImages {
    images: Vec<LazyImage>,
}

impl LazyImages {
    /// `None` when the page has no images
    pub fn attach(page: &Page, layout: &PageLayout) -> Option<Self> {
        let images: Vec<LazyImage> = page
            .images()
            .zip(layout.image_rows.iter())
            .map(|(image, &row)| LazyImage::from_image(image, row))
            .collect();
        (!images.is_empty()).then_some(Self { images })
    }

    /// Load every observed image inside the viewport. Returns how many were loaded.
    pub fn observe(&mut self, viewport: Viewport) -> usize {
        let mut loaded = 0;
        for image in self
            .images
            .iter_mut()
            .filter(|i| i.observed && viewport.contains(i.row))
        {
            if let Some(src) = image.data_src.take() {
                tracing::debug!(src = %src, "Loading deferred image");
                image.src = Some(src);
                loaded += 1;
            }
            image.observed = false;
        }
        loaded
    }

    pub fn images(&self) -> &[LazyImage] {
        &self.images
    }

    pub fn observed_count(&self) -> usize {
        self.images.iter().filter(|i| i.observed).count()
    }

    pub fn image_at(&self, row: u16) -> Option<&LazyImage> {
        self.images.iter().find(|i| i.row == row)
    }
}
