//! Clickable action button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use strum::{Display, EnumIter};

/// Visual style of a button. Affects styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum ButtonVariant {
    /// Filled blue.
    #[default]
    Primary,
    /// Filled gray.
    Secondary,
    /// Border only.
    Outline,
}

impl ButtonVariant {
    /// Label and border styles for this variant.
    fn styles(self, focused: bool) -> (Style, Style) {
        let (label, border) = match self {
            Self::Primary => (
                Style::default().fg(Color::White).bg(Color::Blue),
                Style::default().fg(Color::Blue),
            ),
            Self::Secondary => (
                Style::default().fg(Color::Black).bg(Color::Gray),
                Style::default().fg(Color::Gray),
            ),
            Self::Outline => (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::DarkGray),
            ),
        };
        if focused {
            (
                label.add_modifier(Modifier::BOLD),
                border.fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            (label, border)
        }
    }
}

/// A bordered, labelled button.
///
/// Rendering is stateless; the owner keeps the area it was drawn into and
/// asks [`ActionButton::hit`] whether a click landed on it.
#[derive(Debug, Clone, Copy)]
pub struct ActionButton<'a> {
    label: &'a str,
    variant: ButtonVariant,
    focused: bool,
}

impl<'a> ActionButton<'a> {
    /// Creates a primary, unfocused button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            focused: false,
        }
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Marks the button as focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// True when a click at (`column`, `row`) lands inside `area`.
    pub fn hit(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}

impl Widget for ActionButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label_style, border_style) = self.variant.styles(self.focused);
        let border_type = if self.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        Paragraph::new(self.label)
            .style(label_style)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
