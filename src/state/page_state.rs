//! Widgets of the currently loaded page

use super::scroll_state::ScrollState;
use super::widgets::{
    attached, Carousel, LazyImages, MenuToggle, ProgressBars, SmoothScroll, ThemeToggle,
};
use crate::site::{Page, PageLayout, Viewport, HEADER_HEIGHT};
use std::time::{Duration, Instant};

/// Settings applied to every page load
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub dark: bool,
    pub scroll_duration: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            dark: false,
            scroll_duration: ScrollState::DEFAULT_DURATION,
        }
    }
}

/// Everything that lives for one page load. Navigating rebuilds it.
#[derive(Debug)]
pub struct PageSession {
    pub path: String,
    pub title: String,
    pub layout: PageLayout,
    pub scroll: ScrollState,
    viewport_height: u16,
    default_dark: bool,
    pub menu: Option<MenuToggle>,
    pub theme: Option<ThemeToggle>,
    pub carousel: Option<Carousel>,
    pub anchors: Option<SmoothScroll>,
    pub progress: Option<ProgressBars>,
    pub images: Option<LazyImages>,
}

impl PageSession {
    pub fn load(page: &Page, options: SessionOptions, viewport_height: u16) -> Self {
        let layout = PageLayout::compute(page);
        let progress = ProgressBars::attach(page, &layout);
        let images = LazyImages::attach(page, &layout);

        let mut session = Self {
            path: page.path.clone(),
            title: page.title.clone(),
            scroll: ScrollState::new(options.scroll_duration),
            viewport_height,
            default_dark: options.dark,
            menu: attached(MenuToggle::attach(page)),
            theme: attached(ThemeToggle::attach(page, options.dark)),
            carousel: attached(Carousel::attach(page)),
            anchors: attached(SmoothScroll::attach(page)),
            progress,
            images,
            layout,
        };
        session.refresh();
        tracing::info!(
            path = %session.path,
            pending_images = session.images.as_ref().map_or(0, LazyImages::observed_count),
            "Page loaded"
        );
        session
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll.offset(), self.viewport_height)
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_height)
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        if height == self.viewport_height {
            return;
        }
        self.viewport_height = height;
        let max = self.max_scroll();
        if self.scroll.offset() > max {
            self.scroll.jump_to(max);
        }
        self.refresh();
    }

    pub fn is_dark(&self) -> bool {
        self.theme.map_or(self.default_dark, |t| t.is_dark())
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll();
        self.scroll.scroll_by(delta, max);
        self.refresh();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.jump_to(self.max_scroll());
        self.refresh();
    }

    /// Scroll so the row sits just below the navbar. Animated when `now` is given.
    pub fn scroll_to_row(&mut self, row: u16, now: Option<Instant>) {
        let target = row.saturating_sub(HEADER_HEIGHT).min(self.max_scroll());
        match now {
            Some(now) => self.scroll.animate_to(target, now),
            None => self.scroll.jump_to(target),
        }
        self.refresh();
    }

    /// Scroll to `#hash`, or to the top when the hash is empty. Returns false
    /// when no section carries that id.
    pub fn scroll_to_hash(&mut self, hash: &str, now: Option<Instant>) -> bool {
        let row = if hash.is_empty() {
            0
        } else {
            match self.layout.section_top(hash) {
                Some(row) => row,
                None => {
                    tracing::debug!(hash, "Anchor target not found");
                    return false;
                }
            }
        };
        self.scroll_to_row(row, now);
        true
    }

    /// Advance the scroll animation. Returns true when the page moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let moved = self.scroll.update(now);
        if moved {
            self.refresh();
        }
        moved
    }

    /// Run the scroll-driven widgets against the current viewport
    pub fn refresh(&mut self) {
        let viewport = self.viewport();
        if let Some(progress) = self.progress.as_mut() {
            progress.reveal(viewport);
        }
        if let Some(images) = self.images.as_mut() {
            images.observe(viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;

    fn load(name: &str, height: u16) -> PageSession {
        let site = Site::bundled().unwrap();
        PageSession::load(site.page(name).unwrap(), SessionOptions::default(), height)
    }

    mod attach {
        use super::*;

        #[test]
        fn test_landing_page_widgets() {
            let session = load("index.html", 20);
            assert!(session.menu.is_some());
            assert!(session.theme.is_some());
            assert!(session.carousel.is_some());
            assert!(session.anchors.is_some());
            assert!(session.progress.is_none());
            assert!(session.images.is_some());
        }

        #[test]
        fn test_missing_carousel_only_disables_carousel() {
            let session = load("resume.html", 20);
            assert!(session.carousel.is_none());
            assert!(session.menu.is_some());
            assert!(session.progress.is_some());
        }

        #[test]
        fn test_theme_defaults_to_config_without_toggle() {
            let site = Site::from_json(r#"{"pages": [{"path": "a.html", "title": "T"}]}"#).unwrap();
            let options = SessionOptions {
                dark: true,
                ..Default::default()
            };
            let session = PageSession::load(&site.pages[0], options, 10);
            assert!(session.theme.is_none());
            assert!(session.is_dark());
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn test_scroll_to_hash_offsets_header() {
            let mut session = load("index.html", 10);
            let top = session.layout.section_top("about").unwrap();
            assert!(session.scroll_to_hash("about", None));
            assert_eq!(session.scroll.offset(), top - HEADER_HEIGHT);
        }

        #[test]
        fn test_empty_hash_scrolls_to_top() {
            let mut session = load("index.html", 10);
            session.scroll_by(12);
            assert!(session.scroll_to_hash("", None));
            assert_eq!(session.scroll.offset(), 0);
        }

        #[test]
        fn test_unknown_hash_does_nothing() {
            let mut session = load("index.html", 10);
            session.scroll_by(4);
            assert!(!session.scroll_to_hash("nowhere", None));
            assert_eq!(session.scroll.offset(), 4);
        }

        #[test]
        fn test_target_is_clamped_to_max_scroll() {
            let mut session = load("index.html", 10);
            session.scroll_to_hash("contact", None);
            assert!(session.scroll.offset() <= session.max_scroll());
        }

        #[test]
        fn test_animated_scroll_reaches_target() {
            let mut session = load("index.html", 10);
            let start = Instant::now();
            session.scroll_to_hash("services", Some(start));
            assert!(session.scroll.is_animating());
            assert!(session.tick(start + Duration::from_secs(1)));
            assert_eq!(
                session.scroll.offset(),
                session.layout.section_top("services").unwrap() - HEADER_HEIGHT
            );
        }

        #[test]
        fn test_resize_clamps_offset() {
            let mut session = load("index.html", 10);
            session.scroll_to_bottom();
            session.set_viewport_height(30);
            assert_eq!(session.scroll.offset(), session.max_scroll());
        }
    }

    mod scroll_widgets {
        use super::*;

        #[test]
        fn test_bars_below_the_fold_wait_for_scroll() {
            let mut session = load("resume.html", 8);
            let bars = session.progress.as_ref().unwrap();
            assert!(bars.bars().iter().all(|b| b.width == 0));

            session.scroll_to_hash("skills", None);
            let bars = session.progress.as_ref().unwrap();
            assert!(bars.bars()[0].is_revealed());
        }

        #[test]
        fn test_tall_viewport_reveals_everything_at_load() {
            let session = load("resume.html", 200);
            let bars = session.progress.as_ref().unwrap();
            assert!(bars.bars().iter().all(|b| b.is_revealed()));
            assert_eq!(session.images.as_ref().unwrap().observed_count(), 0);
        }

        #[test]
        fn test_images_load_when_scrolled_into_view() {
            let mut session = load("index.html", 8);
            assert_eq!(session.images.as_ref().unwrap().observed_count(), 4);
            session.scroll_to_hash("clients", None);
            let images = session.images.as_ref().unwrap();
            assert!(images.images()[0].is_loaded());
        }
    }
}
