//! Presentational widgets. They hold no game state.

mod button;
mod focus;
mod input;

pub use button::{ActionButton, ButtonVariant};
pub use focus::{FocusHandle, FocusTarget};
pub use input::{FieldKind, InputField};
