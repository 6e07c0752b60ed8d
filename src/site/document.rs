//! Site document model
//!
//! The page structure the widgets attach to. Pages are addressed by path
//! (`index.html`, `resume.html`) and sections by identifier, mirroring the
//! anchors used in navigation links.

use crate::error::SiteError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Site bundled with the binary
const DEFAULT_SITE: &str = include_str!("../../assets/site.json");

/// Page served when a path is empty
pub const DEFAULT_PAGE: &str = "index.html";

/// A whole site: every page that can be navigated to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub pages: Vec<Page>,
}

impl Site {
    /// Parse a site from its JSON description
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The site bundled with the binary
    pub fn bundled() -> Result<Self, SiteError> {
        Self::from_json(DEFAULT_SITE)
    }

    /// Load a site from a file, or the bundled one when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read site file {}", path.display()))?;
                Ok(Self::from_json(&content)?)
            }
            None => Ok(Self::bundled()?),
        }
    }

    /// Look up a page by the last segment of its path
    pub fn page(&self, path: &str) -> Result<&Page, SiteError> {
        let name = page_name(path);
        self.pages
            .iter()
            .find(|p| page_name(&p.path) == name)
            .ok_or_else(|| SiteError::UnknownPage(path.to_string()))
    }

    /// The landing page (`index.html`, or the first page defined)
    pub fn landing_page(&self) -> Option<&Page> {
        self.page(DEFAULT_PAGE).ok().or_else(|| self.pages.first())
    }
}

/// Last path segment, `index.html` when empty
pub fn page_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PAGE,
    }
}

/// A single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub path: String,
    pub title: String,
    #[serde(default)]
    pub navbar: Option<Navbar>,
    /// Whether the page carries the `.theme-toggle` button
    #[serde(default)]
    pub theme_toggle: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Page {
    /// Every navigation link pointing at an anchor (`href` containing `#`)
    pub fn anchors(&self) -> Vec<&NavLink> {
        self.navbar
            .iter()
            .flat_map(|nav| nav.links.iter())
            .filter(|link| link.href.contains('#'))
            .collect()
    }

    /// The contact form, if any section holds one
    pub fn contact_form(&self) -> Option<&ContactFormElement> {
        self.sections.iter().find_map(|s| match &s.kind {
            SectionKind::Contact { form } => form.as_ref(),
            _ => None,
        })
    }

    /// Every progress bar on the page, in document order
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.sections.iter().flat_map(|s| match &s.kind {
            SectionKind::Skills { bars } => bars.as_slice(),
            _ => &[][..],
        })
    }

    /// Every image on the page, in document order
    pub fn images(&self) -> impl Iterator<Item = &Image> {
        self.sections.iter().flat_map(|s| match &s.kind {
            SectionKind::Gallery { images } => images.as_slice(),
            _ => &[][..],
        })
    }

    /// The testimonial section, if any
    pub fn testimonials(&self) -> Option<(&[Testimonial], bool)> {
        self.sections.iter().find_map(|s| match &s.kind {
            SectionKind::Testimonials { items, nav_buttons } => {
                Some((items.as_slice(), *nav_buttons))
            }
            _ => None,
        })
    }
}

/// Top navigation bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navbar {
    pub brand: String,
    /// Whether the `.hamburger` menu button exists
    #[serde(default)]
    pub hamburger: bool,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// A page section addressable by `#id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub kind: SectionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKind {
    Text {
        #[serde(default)]
        paragraphs: Vec<String>,
    },
    Skills {
        #[serde(default)]
        bars: Vec<Skill>,
    },
    Testimonials {
        #[serde(default)]
        items: Vec<Testimonial>,
        /// Whether the `.nav.prev` / `.nav.next` buttons exist
        #[serde(default)]
        nav_buttons: bool,
    },
    Gallery {
        #[serde(default)]
        images: Vec<Image>,
    },
    Contact {
        #[serde(default)]
        form: Option<ContactFormElement>,
    },
}

/// A `.progress` bar with its `data-progress` target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub label: String,
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// An image, optionally deferred through `data-src`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub alt: String,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub data_src: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
}

/// The `#contact-form` element and the elements it is expected to contain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactFormElement {
    pub id: String,
    /// Submission endpoint (the form's `action`)
    #[serde(default)]
    pub action: String,
    /// Identifiers of the input elements present in the form
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Identifiers of the error elements present in the form
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub submit_button: bool,
}

impl ContactFormElement {
    pub fn has_input(&self, id: &str) -> bool {
        self.inputs.iter().any(|i| i == id)
    }

    pub fn has_error_element(&self, id: &str) -> bool {
        self.errors.iter().any(|e| e == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_site() -> Site {
        Site::from_json(
            r##"{
                "pages": [
                    {
                        "path": "/index.html",
                        "title": "Home",
                        "navbar": {
                            "brand": "Jane",
                            "hamburger": true,
                            "links": [
                                {"label": "About", "href": "#about"},
                                {"label": "Blog", "href": "https://blog.example.com"}
                            ]
                        },
                        "sections": [
                            {"id": "about", "title": "About", "kind": "text", "paragraphs": ["Hi"]},
                            {"id": "skills", "title": "Skills", "kind": "skills",
                             "bars": [{"label": "Rust", "progress": 80}]}
                        ]
                    },
                    {"path": "resume.html", "title": "Resume"}
                ]
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_bundled_site_parses() {
        let site = Site::bundled().unwrap();
        assert!(site.page("index.html").is_ok());
        assert!(site.page("resume.html").is_ok());
    }

    #[test]
    fn test_bundled_landing_page_has_contact_form() {
        let site = Site::bundled().unwrap();
        let landing = site.landing_page().unwrap();
        assert!(landing.contact_form().is_some());
    }

    #[test]
    fn test_page_lookup_uses_last_segment() {
        let site = minimal_site();
        assert_eq!(site.page("index.html").unwrap().title, "Home");
        assert_eq!(site.page("/site/resume.html").unwrap().title, "Resume");
        assert_eq!(site.page("").unwrap().title, "Home");
    }

    #[test]
    fn test_unknown_page() {
        let site = minimal_site();
        assert!(matches!(
            site.page("blog.html"),
            Err(SiteError::UnknownPage(p)) if p == "blog.html"
        ));
    }

    #[test]
    fn test_page_name() {
        assert_eq!(page_name("/a/b/resume.html"), "resume.html");
        assert_eq!(page_name("/"), "index.html");
        assert_eq!(page_name(""), "index.html");
    }

    #[test]
    fn test_anchors_only_include_hash_links() {
        let site = minimal_site();
        let page = site.page("index.html").unwrap();
        let anchors = page.anchors();
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "#about");
    }

    #[test]
    fn test_defaults_for_missing_parts() {
        let site = minimal_site();
        let resume = site.page("resume.html").unwrap();
        assert!(resume.navbar.is_none());
        assert!(!resume.theme_toggle);
        assert!(resume.sections.is_empty());
        assert!(resume.contact_form().is_none());
        assert!(resume.testimonials().is_none());
    }

    #[test]
    fn test_skills_are_collected() {
        let site = minimal_site();
        let page = site.page("index.html").unwrap();
        let skills: Vec<_> = page.skills().collect();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].progress, 80);
    }

    #[test]
    fn test_invalid_json_is_document_error() {
        assert!(matches!(
            Site::from_json("{\"pages\": 3}"),
            Err(SiteError::Document(_))
        ));
    }

    #[test]
    fn test_load_without_path_uses_bundled_site() {
        let site = Site::load(None).unwrap();
        assert!(!site.pages.is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(Site::load(Some(Path::new("/nonexistent/site.json"))).is_err());
    }
}
