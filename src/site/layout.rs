//! Row geometry of a rendered page
//!
//! Every section renders as a title line, a blank line, its body rows and a
//! trailing blank line. The page starts with `HEADER_HEIGHT` blank rows that
//! sit under the fixed navbar. Offsets here must agree with `ui::page`.

use super::document::{Page, SectionKind};

/// Height of the fixed navbar (borders + one content row)
pub const HEADER_HEIGHT: u16 = 3;

/// Rows taken by a section besides its body (title, blank, trailing blank)
pub const SECTION_CHROME: u16 = 3;

/// Body rows of the testimonial carousel (quote, author, blank, indicator)
pub const CAROUSEL_ROWS: u16 = 4;

/// Body rows per contact field (label, value, error)
pub const FIELD_ROWS: u16 = 3;

/// Body rows of the contact form: three fields and the submit button
pub const FORM_ROWS: u16 = FIELD_ROWS * 3 + 1;

/// Body rows of a contact section whose form is missing
pub const MISSING_FORM_ROWS: u16 = 1;

/// Body height of a section
pub fn body_rows(kind: &SectionKind) -> u16 {
    let rows = match kind {
        SectionKind::Text { paragraphs } => paragraphs.len(),
        SectionKind::Skills { bars } => bars.len(),
        SectionKind::Testimonials { .. } => CAROUSEL_ROWS as usize,
        SectionKind::Gallery { images } => images.len(),
        SectionKind::Contact { form: Some(_) } => FORM_ROWS as usize,
        SectionKind::Contact { form: None } => MISSING_FORM_ROWS as usize,
    };
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Absolute row positions of a page's sections and scroll-observed elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// (section id, row of the section title)
    sections: Vec<(String, u16)>,
    /// Row of every progress bar, in document order
    pub bar_rows: Vec<u16>,
    /// Row of every image, in document order
    pub image_rows: Vec<u16>,
    /// Row of the first contact field label, if the page has a form
    pub form_row: Option<u16>,
    pub total_height: u16,
}

impl PageLayout {
    pub fn compute(page: &Page) -> Self {
        let mut layout = Self::default();
        let mut row = HEADER_HEIGHT;

        for section in &page.sections {
            layout.sections.push((section.id.clone(), row));
            let body_top = row.saturating_add(2);

            match &section.kind {
                SectionKind::Skills { bars } => {
                    layout
                        .bar_rows
                        .extend((0..bars.len()).map(|i| body_top.saturating_add(i as u16)));
                }
                SectionKind::Gallery { images } => {
                    layout
                        .image_rows
                        .extend((0..images.len()).map(|i| body_top.saturating_add(i as u16)));
                }
                SectionKind::Contact { form: Some(_) } => {
                    layout.form_row.get_or_insert(body_top);
                }
                _ => {}
            }

            row = row
                .saturating_add(body_rows(&section.kind))
                .saturating_add(SECTION_CHROME);
        }

        layout.total_height = row;
        layout
    }

    /// Row of the section with the given id (its `offsetTop`)
    pub fn section_top(&self, id: &str) -> Option<u16> {
        self.sections
            .iter()
            .find(|(section_id, _)| section_id == id)
            .map(|(_, row)| *row)
    }

    /// Largest scroll offset that still fills a viewport of the given height
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }
}

/// Rows currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    /// Whether a one-row element at `row` intersects the viewport
    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && (row - self.top) < self.height
    }
}
