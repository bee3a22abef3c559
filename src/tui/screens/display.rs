//! Display screen: the number and the countdown.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Wrap},
};
use recall_core::GameSession;

use super::center_rect;

pub(super) fn render(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width.saturating_sub(4).max(1);
    let digits = u16::try_from(session.target_number().len()).unwrap_or(u16::MAX);
    let number_rows = digits.div_ceil(width).max(1);
    let block = center_rect(area, width, number_rows.saturating_add(2));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(number_rows),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(block);

    let number = Paragraph::new(session.target_number())
        .style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(number, rows[0]);

    let time_left = Paragraph::new(format!(
        "Time left: {} seconds",
        session.remaining_seconds()
    ))
    .alignment(Alignment::Center);
    frame.render_widget(time_left, rows[2]);
}
