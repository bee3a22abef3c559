//! Setup screen: digit count, duration, and Start.

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
    let form = center_rect(area, 44, 10);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(form);

    let settings = session.settings();
    frame.render_widget(
        InputField::new("Number of digits", settings.digits())
            .placeholder("Enter number of digits")
            .focused(focus.is_focused(FocusTarget::Digits)),
        rows[0],
    );
    frame.render_widget(
        InputField::new("Seconds to memorize", settings.seconds())
            .placeholder("Enter seconds to memorize")
            .focused(focus.is_focused(FocusTarget::Seconds)),
        rows[1],
    );
    frame.render_widget(
        ActionButton::new(Phase::Setup.confirm_label().unwrap_or_default())
            .focused(focus.is_focused(FocusTarget::Confirm)),
        rows[3],
    );

    hits.fields.push((FocusTarget::Digits, rows[0]));
    hits.fields.push((FocusTarget::Seconds, rows[1]));
    hits.button = Some(rows[3]);
}
