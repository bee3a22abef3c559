//! Result screen: verdict, both numbers, and Play Again.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
};
use recall_core::{GameSession, Phase, Verdict};

use super::{HitMap, center_rect};
use crate::tui::widgets::{ActionButton, ButtonVariant, FocusHandle, FocusTarget};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    focus: &FocusHandle,
    hits: &mut HitMap,
) {
    let width = area.width.saturating_sub(4).clamp(1, 80);
    let number_line = format!("The number was: {}", session.target_number());
    let answer_line = format!("Your answer: {}", session.user_answer());
    let details_height =
        wrapped_rows(&number_line, width).saturating_add(wrapped_rows(&answer_line, width));
    let form_height = details_height.saturating_add(6).min(area.height);

    let form = center_rect(area, width, form_height);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(details_height),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(form);

    let verdict = session.verdict().unwrap_or(Verdict::Incorrect);
    let color = if verdict.is_correct() {
        Color::Green
    } else {
        Color::Red
    };
    let headline = Paragraph::new(verdict.label())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(headline, rows[0]);

    let details = Paragraph::new(vec![Line::from(number_line), Line::from(answer_line)])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false });
    frame.render_widget(details, rows[1]);

    let button_area = center_rect(rows[3], 24.min(rows[3].width), 3);
    frame.render_widget(
        ActionButton::new(Phase::Result.confirm_label().unwrap_or_default())
            .variant(ButtonVariant::Secondary)
            .focused(focus.is_focused(FocusTarget::Confirm)),
        button_area,
    );
    hits.button = Some(button_area);
}

/// Rows a wrapped line may need, with one spare for a word pushed to the next row.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let rows = text.chars().count().div_ceil(usize::from(width.max(1))) + 1;
    u16::try_from(rows).unwrap_or(u16::MAX)
}
