//! Routes key presses to intents.
//!
//! The dispatcher only classifies keys. It does not look at the session,
//! so the controller always applies an intent to the current state.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{instrument, trace};

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Run the phase's confirm action.
    Confirm,
    /// Edit the focused field with this key.
    Edit(KeyEvent),
    /// Move focus forward.
    FocusNext,
    /// Move focus backward.
    FocusPrevious,
    /// Leave the game.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Global key router with a single confirm key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardDispatcher {
    confirm_key: KeyCode,
}

impl Default for KeyboardDispatcher {
    fn default() -> Self {
        Self {
            confirm_key: KeyCode::Enter,
        }
    }
}

impl KeyboardDispatcher {
    /// Creates a dispatcher confirming on Enter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Key that triggers [`Intent::Confirm`].
    pub fn confirm_key(&self) -> KeyCode {
        self.confirm_key
    }

    /// Classifies a key event.
    #[instrument(skip(self))]
    pub fn dispatch(&self, key: KeyEvent) -> Intent {
        // crossterm reports releases on some platforms
        if key.kind == KeyEventKind::Release {
            return Intent::Ignore;
        }

        let intent = match key.code {
            code if code == self.confirm_key => Intent::Confirm,
            KeyCode::Esc => Intent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Intent::Quit,
            KeyCode::Tab | KeyCode::Down => Intent::FocusNext,
            KeyCode::BackTab | KeyCode::Up => Intent::FocusPrevious,
            KeyCode::Char(_) | KeyCode::Backspace => Intent::Edit(key),
            _ => Intent::Ignore,
        };
        trace!(?intent, "Key dispatched");
        intent
    }
}
