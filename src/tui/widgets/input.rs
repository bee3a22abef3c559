//! Single-line text input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tracing::{instrument, trace};

/// What an input field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Any printable character.
    #[default]
    Text,
    /// ASCII digits only. The field may still be empty.
    Number,
}

/// A labelled input box showing a value or a dimmed placeholder.
#[derive(Debug, Clone, Copy)]
pub struct InputField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> InputField<'a> {
    /// Creates an unfocused field.
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
        }
    }

    /// Sets the placeholder hint shown while the value is empty.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Marks the field as focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Applies one keystroke to `value`.
    ///
    /// Returns the new raw text when the key edits the field, or `None` when
    /// the key is not an edit or would not change anything.
    #[instrument(skip(value))]
    pub fn edit(kind: FieldKind, value: &str, key: KeyEvent) -> Option<String> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match key.code {
            KeyCode::Char(c) => {
                if kind == FieldKind::Number && !c.is_ascii_digit() {
                    trace!(%c, "Rejected non-digit");
                    return None;
                }
                let mut next = value.to_string();
                next.push(c);
                Some(next)
            }
            KeyCode::Backspace if !value.is_empty() => {
                let mut next = value.to_string();
                next.pop();
                Some(next)
            }
            _ => None,
        }
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label);

        // Keep the end of the value and the cursor inside the border.
        let room = usize::from(area.width.saturating_sub(2))
            .saturating_sub(usize::from(self.focused));
        let shown = visible_tail(self.value, room);

        let mut spans = if self.value.is_empty() {
            vec![Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(shown)]
        };
        if self.focused {
            spans.insert(
                if self.value.is_empty() { 0 } else { 1 },
                Span::styled("▏", Style::default().fg(Color::Cyan)),
            );
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}

/// Longest suffix of `value` with at most `width` characters.
fn visible_tail(value: &str, width: usize) -> &str {
    let len = value.chars().count();
    if len <= width {
        return value;
    }
    value
        .char_indices()
        .nth(len - width)
        .map_or("", |(start, _)| &value[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("12345", 10), "12345");
        assert_eq!(visible_tail("12345", 3), "345");
        assert_eq!(visible_tail("12345", 0), "");
        assert_eq!(visible_tail("ééé", 2), "éé");
    }
}
