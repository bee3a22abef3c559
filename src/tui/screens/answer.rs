//! Answer screen: the answer field and Submit.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use recall_core::{GameSession, Phase};

use super::{HitMap, center_rect};
use crate::tui::widgets::{ActionButton, FocusHandle, FocusTarget, InputField};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    focus: &FocusHandle,
    hits: &mut HitMap,
) {
    let form = center_rect(area, 44, 7);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(form);

    frame.render_widget(
        InputField::new("Your answer", session.user_answer())
            .placeholder("Enter your answer")
            .focused(focus.is_focused(FocusTarget::Answer)),
        rows[0],
    );
    frame.render_widget(
        ActionButton::new(Phase::Answer.confirm_label().unwrap_or_default())
            .focused(focus.is_focused(FocusTarget::Confirm)),
        rows[2],
    );

    hits.fields.push((FocusTarget::Answer, rows[0]));
    hits.button = Some(rows[2]);
}
