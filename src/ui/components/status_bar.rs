//! Status bar component

use crate::constants::{STATUS_HINTS, STATUS_UNMOUNTED};
use crate::ui::core::Status;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the current status. `detached` means the view was
    /// released while its value was still running, not that it never had one.
    #[must_use]
    pub fn text(status: Status, detached: bool, attempt: u32) -> String {
        if detached && !status.is_settled() {
            return STATUS_UNMOUNTED.to_string();
        }

        format!("#{attempt} {status} • {STATUS_HINTS}")
    }

    #[must_use]
    pub fn color(status: Status, detached: bool) -> Color {
        match (status, detached) {
            (Status::Pending, false) => Color::Yellow,
            (Status::Pending, true) => Color::DarkGray,
            (Status::Fulfilled, _) => Color::Green,
            (Status::Rejected, _) => Color::Red,
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, status: Status, detached: bool, attempt: u32) {
        let status_bar = Paragraph::new(Self::text(status, detached, attempt))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Self::color(status, detached)));

        f.render_widget(status_bar, area);
    }
}
