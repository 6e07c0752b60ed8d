//! Scroll-triggered skill bars

use crate::site::{Page, PageLayout, Viewport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    pub label: String,
    /// The `data-progress` percentage
    pub target: u8,
    pub row: u16,
    /// Current width in percent; 0 until the bar has been on screen
    pub width: u8,
    revealed: bool,
}

impl ProgressBar {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Every `.progress` bar of a page
#[derive(Debug, Clone)]
pub struct ProgressBars {
    bars: Vec<ProgressBar>,
}

impl ProgressBars {
    /// `None` when the page has no bars to animate
    pub fn attach(page: &Page, layout: &PageLayout) -> Option<Self> {
        let bars: Vec<ProgressBar> = page
            .skills()
            .zip(layout.bar_rows.iter())
            .map(|(skill, &row)| ProgressBar {
                label: skill.label.clone(),
                target: skill.progress.min(100),
                row,
                width: 0,
                revealed: false,
            })
            .collect();
        (!bars.is_empty()).then_some(Self { bars })
    }

    /// Reveal every bar inside the viewport. Returns how many were newly revealed.
    pub fn reveal(&mut self, viewport: Viewport) -> usize {
        let mut revealed = 0;
        for bar in self.bars.iter_mut().filter(|b| viewport.contains(b.row)) {
            if !bar.revealed {
                bar.width = bar.target;
                bar.revealed = true;
                revealed += 1;
            }
        }
        revealed
    }

    pub fn bars(&self) -> &[ProgressBar] {
        &self.bars
    }

    /// Width of the bar at a page row, if a bar sits there
    pub fn bar_at(&self, row: u16) -> Option<&ProgressBar> {
        self.bars.iter().find(|b| b.row == row)
    }
}
