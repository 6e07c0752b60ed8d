//! Light and dark color palettes

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        bg: Color::White,
        fg: Color::Black,
        muted: Color::DarkGray,
        accent: Color::Blue,
        error: Color::Red,
        success: Color::Green,
    };

    pub const DARK: Palette = Palette {
        bg: Color::Black,
        fg: Color::White,
        muted: Color::Gray,
        accent: Color::Cyan,
        error: Color::LightRed,
        success: Color::LightGreen,
    };

    pub fn for_theme(dark: bool) -> Self {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn heading(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }
}
