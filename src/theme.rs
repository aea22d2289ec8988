// Color theme for the TUI chrome and the status markers.

use ratatui::style::{Color, Modifier, Style};

use crate::status::Status;

/// Named color slots used by the UI (borders, text, status indicators).
#[derive(Debug, Clone)]
pub struct Theme {
    /// Branding and card titles.
    pub primary: Color,
    /// Locality line and key hints.
    pub accent: Color,
    /// Normal text color.
    pub text: Color,
    /// Secondary text: addresses, footers, table headings.
    pub text_dim: Color,
    /// Table heading background.
    pub heading_bg: Color,
    /// Border and divider color.
    pub border: Color,
    /// Error notice and finished marker.
    pub error: Color,
    /// Available marker.
    pub success: Color,
    /// Marker for slots without a congregation time.
    pub muted: Color,
    /// Call-to-action button.
    pub button_fg: Color,
    pub button_bg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(102, 115, 188),
            accent: Color::Yellow,
            text: Color::White,
            text_dim: Color::DarkGray,
            heading_bg: Color::Rgb(40, 40, 48),
            border: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
            muted: Color::Gray,
            button_fg: Color::Black,
            button_bg: Color::White,
        }
    }

    /// Marker color for a row status.
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Available => self.success,
            Status::Finished => self.error,
            Status::None => self.muted,
        }
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.heading_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
