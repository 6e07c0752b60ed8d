//! Testimonial carousel

use crate::error::SiteError;
use crate::site::Page;

/// Index of the active testimonial, wrapping in both directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn attach(page: &Page) -> Result<Self, SiteError> {
        let (items, nav_buttons) = page
            .testimonials()
            .ok_or_else(|| SiteError::missing("carousel", ".carousel-track"))?;
        if items.is_empty() {
            return Err(SiteError::missing("carousel", ".testimonial-card"));
        }
        if !nav_buttons {
            return Err(SiteError::missing("carousel", ".nav.prev, .nav.next"));
        }
        Ok(Self {
            len: items.len(),
            index: 0,
        })
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.log_slide();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.log_slide();
    }

    fn log_slide(&self) {
        tracing::debug!(index = self.index, offset = self.track_offset(), "Carousel moved");
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.index
    }

    /// Horizontal translation of the track, in percent
    pub fn track_offset(&self) -> usize {
        self.index * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;

    fn page_with(items: usize, nav_buttons: bool) -> Page {
        let items: Vec<String> = (0..items)
            .map(|i| format!(r#"{{"quote": "q{i}", "author": "a{i}"}}"#))
            .collect();
        let json = format!(
            r#"{{"pages": [{{"path": "index.html", "title": "T", "sections": [
                {{"id": "testimonials", "title": "T", "kind": "testimonials",
                  "nav_buttons": {nav_buttons}, "items": [{}]}}
            ]}}]}}"#,
            items.join(",")
        );
        Site::from_json(&json).unwrap().pages.remove(0)
    }

    #[test]
    fn test_starts_at_first_item() {
        let carousel = Carousel::attach(&page_with(3, true)).unwrap();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.len(), 3);
        assert!(carousel.is_active(0));
        assert_eq!(carousel.track_offset(), 0);
    }

    #[test]
    fn test_n_next_clicks_land_on_n_mod_k() {
        for k in 1..=4 {
            let mut carousel = Carousel::attach(&page_with(k, true)).unwrap();
            for n in 1..=10 {
                carousel.next();
                assert_eq!(carousel.index(), n % k, "{n} clicks on {k} items");
            }
        }
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::attach(&page_with(3, true)).unwrap();
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.track_offset(), 200);
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut carousel = Carousel::attach(&page_with(3, true)).unwrap();
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_requires_items() {
        let err = Carousel::attach(&page_with(0, true)).unwrap_err();
        assert_eq!(err.to_string(), "carousel: missing element `.testimonial-card`");
    }

    #[test]
    fn test_requires_nav_buttons() {
        assert!(matches!(
            Carousel::attach(&page_with(2, false)),
            Err(SiteError::MissingElement { widget: "carousel", .. })
        ));
    }

    #[test]
    fn test_requires_track() {
        let site = Site::from_json(r#"{"pages": [{"path": "a.html", "title": "T"}]}"#).unwrap();
        assert!(Carousel::attach(&site.pages[0]).is_err());
    }
}
