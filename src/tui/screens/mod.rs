//! Per-phase screen rendering.
//!
//! [`draw`] lays out the frame chrome and hands the body to the phase's
//! screen. Screens record where they drew interactive widgets so the
//! controller can route mouse clicks.

mod answer;
mod display;
mod result;
mod setup;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use recall_core::{GameSession, Phase};

use super::widgets::{ActionButton, FocusHandle, FocusTarget};

/// Screen areas of the widgets drawn in the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Area of the phase's action button, if one was drawn.
    pub button: Option<Rect>,
    /// Areas of the input fields that were drawn.
    pub fields: Vec<(FocusTarget, Rect)>,
}

impl HitMap {
    /// True when a click at (`column`, `row`) lands on the action button.
    pub fn button_at(&self, column: u16, row: u16) -> bool {
        self.button
            .is_some_and(|area| ActionButton::hit(area, column, row))
    }

    /// Input field under (`column`, `row`), if any.
    pub fn field_at(&self, column: u16, row: u16) -> Option<FocusTarget> {
        self.fields
            .iter()
            .find(|(_, area)| ActionButton::hit(*area, column, row))
            .map(|(target, _)| *target)
    }
}

fn help_text(phase: Phase) -> &'static str {
    match phase {
        Phase::Setup => "Tab: Next field | Enter: Start | Esc: Quit",
        Phase::Display => "Memorize the number | Esc: Quit",
        Phase::Answer => "Enter: Submit | Esc: Quit",
        Phase::Result => "Enter: Play Again | Esc: Quit",
    }
}

/// Draws the whole frame and returns the interactive areas.
pub fn draw(
    frame: &mut Frame,
    session: &GameSession,
    focus: &FocusHandle,
    status: Option<&str>,
) -> HitMap {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new("Digit Recall")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let mut hits = HitMap::default();
    match session.phase() {
        Phase::Setup => setup::render(frame, chunks[1], session, focus, &mut hits),
        Phase::Display => display::render(frame, chunks[1], session),
        Phase::Answer => answer::render(frame, chunks[1], session, focus, &mut hits),
        Phase::Result => result::render(frame, chunks[1], session, focus, &mut hits),
    }

    let status_text = status.map_or_else(|| session.phase().to_string(), str::to_string);
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help_text(session.phase()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hits
}

/// Centers a `width` x `height` box inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
