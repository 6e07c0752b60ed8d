//! Mobile menu and theme toggles

use crate::error::SiteError;
use crate::site::{NavLink, Page};

/// The hamburger menu and its navigation links
#[derive(Debug, Clone)]
pub struct MenuToggle {
    expanded: bool,
    links: Vec<NavLink>,
    /// Highlighted link while the menu is open
    pub selected: usize,
}

impl MenuToggle {
    pub fn attach(page: &Page) -> Result<Self, SiteError> {
        let navbar = page
            .navbar
            .as_ref()
            .ok_or_else(|| SiteError::missing("menu", ".navbar"))?;
        if !navbar.hamburger {
            return Err(SiteError::missing("menu", ".hamburger"));
        }
        if navbar.links.is_empty() {
            return Err(SiteError::missing("menu", ".nav-links"));
        }

        Ok(Self {
            expanded: false,
            links: navbar.links.clone(),
            selected: 0,
        })
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        if self.expanded {
            self.selected = 0;
        }
        tracing::debug!(
            aria_expanded = self.aria_expanded(),
            display = self.nav_display(),
            "Menu toggled"
        );
    }

    pub fn close(&mut self) {
        self.expanded = false;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Value of the hamburger's `aria-expanded` attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.expanded {
            "true"
        } else {
            "false"
        }
    }

    /// CSS display of the navigation links
    pub fn nav_display(&self) -> &'static str {
        if self.expanded {
            "flex"
        } else {
            "none"
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.links.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.links.len() - 1);
    }

    pub fn selected_link(&self) -> Option<&NavLink> {
        self.links.get(self.selected)
    }
}

/// Light/dark theme switch
#[derive(Debug, Clone, Copy)]
pub struct ThemeToggle {
    dark: bool,
}

impl ThemeToggle {
    pub const DARK_CLASS: &'static str = "dark-theme";

    pub fn attach(page: &Page, dark: bool) -> Result<Self, SiteError> {
        if !page.theme_toggle {
            return Err(SiteError::missing("theme", ".theme-toggle"));
        }
        Ok(Self { dark })
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        tracing::debug!(body_class = ?self.body_class(), "Theme toggled");
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Class carried by the body element
    pub fn body_class(&self) -> Option<&'static str> {
        self.dark.then_some(Self::DARK_CLASS)
    }

    /// Sun while dark (click for light), moon while light
    pub fn icon(&self) -> &'static str {
        if self.dark {
            "☀"
        } else {
            "☾"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;

    fn page(json: &str) -> Page {
        Site::from_json(&format!(r#"{{"pages": [{json}]}}"#))
            .unwrap()
            .pages
            .remove(0)
    }

    fn page_with_menu() -> Page {
        page(
            r##"{"path": "index.html", "title": "T", "theme_toggle": true,
                "navbar": {"brand": "B", "hamburger": true, "links": [
                    {"label": "A", "href": "#a"}, {"label": "B", "href": "#b"}
                ]}}"##,
        )
    }

    mod menu {
        use super::*;

        #[test]
        fn test_starts_collapsed() {
            let menu = MenuToggle::attach(&page_with_menu()).unwrap();
            assert!(!menu.is_expanded());
            assert_eq!(menu.aria_expanded(), "false");
            assert_eq!(menu.nav_display(), "none");
        }

        #[test]
        fn test_toggle_flips_both_attributes() {
            let mut menu = MenuToggle::attach(&page_with_menu()).unwrap();
            menu.toggle();
            assert_eq!(menu.aria_expanded(), "true");
            assert_eq!(menu.nav_display(), "flex");
            menu.toggle();
            assert_eq!(menu.aria_expanded(), "false");
            assert_eq!(menu.nav_display(), "none");
        }

        #[test]
        fn test_selection_wraps() {
            let mut menu = MenuToggle::attach(&page_with_menu()).unwrap();
            menu.toggle();
            menu.select_prev();
            assert_eq!(menu.selected_link().unwrap().href, "#b");
            menu.select_next();
            assert_eq!(menu.selected_link().unwrap().href, "#a");
        }

        #[test]
        fn test_missing_navbar() {
            let err = MenuToggle::attach(&page(r#"{"path": "a.html", "title": "T"}"#)).unwrap_err();
            assert!(matches!(err, SiteError::MissingElement { widget: "menu", .. }));
        }

        #[test]
        fn test_missing_hamburger() {
            let err = MenuToggle::attach(&page(
                r##"{"path": "a.html", "title": "T",
                    "navbar": {"brand": "B", "links": [{"label": "A", "href": "#a"}]}}"##,
            ))
            .unwrap_err();
            assert_eq!(err.to_string(), "menu: missing element `.hamburger`");
        }

        #[test]
        fn test_missing_links() {
            let err = MenuToggle::attach(&page(
                r#"{"path": "a.html", "title": "T", "navbar": {"brand": "B", "hamburger": true}}"#,
            ))
            .unwrap_err();
            assert_eq!(err.to_string(), "menu: missing element `.nav-links`");
        }
    }

    mod theme {
        use super::*;

        #[test]
        fn test_light_by_default() {
            let theme = ThemeToggle::attach(&page_with_menu(), false).unwrap();
            assert!(!theme.is_dark());
            assert_eq!(theme.body_class(), None);
            assert_eq!(theme.icon(), "☾");
        }

        #[test]
        fn test_toggle_to_dark() {
            let mut theme = ThemeToggle::attach(&page_with_menu(), false).unwrap();
            theme.toggle();
            assert!(theme.is_dark());
            assert_eq!(theme.body_class(), Some("dark-theme"));
            assert_eq!(theme.icon(), "☀");
        }

        #[test]
        fn test_initial_dark_from_config() {
            let theme = ThemeToggle::attach(&page_with_menu(), true).unwrap();
            assert!(theme.is_dark());
        }

        #[test]
        fn test_missing_toggle_button() {
            let err = ThemeToggle::attach(&page(r#"{"path": "a.html", "title": "T"}"#), true)
                .unwrap_err();
            assert!(matches!(err, SiteError::MissingElement { widget: "theme", .. }));
        }
    }
}
