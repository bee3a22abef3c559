//! Terminal UI for Digit Recall

mod controller;
mod dispatch;
mod screens;
mod widgets;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

pub use controller::GameController;
pub use dispatch::{Intent, KeyboardDispatcher};
pub use screens::{HitMap, draw};
pub use widgets::{ActionButton, ButtonVariant, FieldKind, FocusHandle, FocusTarget, InputField};

use crate::RecallConfig;
use crate::audio::{AudioBackend, AudioCueBroker, RodioBackend, SilentBackend};

/// Runs the game in the current terminal until the player quits.
#[instrument(skip(config))]
pub async fn run_tui(config: RecallConfig) -> Result<()> {
    info!(muted = *config.muted(), "Starting Digit Recall TUI");

    if *config.muted() {
        play(&config, SilentBackend).await
    } else {
        let backend = RodioBackend::load(config.sounds_dir(), *config.volume());
        play(&config, backend).await
    }
}

async fn play<B: AudioBackend>(config: &RecallConfig, backend: B) -> Result<()> {
    let mut controller = GameController::new(config.game_settings(), AudioCueBroker::new(backend));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
