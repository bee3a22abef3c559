//! Game controller — owns the session and drives the event loop.
//!
//! All mutation happens here, one event at a time: a key, a click, or a
//! due countdown tick. Step functions take the current [`Instant`] so the
//! loop can be driven without a real terminal or clock.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use recall_core::{CountdownTimer, GameSession, GameSettings, Phase, Transition};
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use super::dispatch::{Intent, KeyboardDispatcher};
use super::screens::{self, HitMap};
use super::widgets::{FieldKind, FocusHandle, FocusTarget, InputField};
use crate::audio::{AudioBackend, AudioCueBroker};

/// Poll interval while no countdown is running.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Controller wiring the session, countdown, audio, and focus together.
///
/// Call [`GameController::run`] to start the event loop.
pub struct GameController<B> {
    session: GameSession,
    audio: AudioCueBroker<B>,
    countdown: Option<CountdownTimer>,
    focus: FocusHandle,
    dispatcher: KeyboardDispatcher,
    status: Option<String>,
    hits: HitMap,
    running: bool,
}

impl<B: AudioBackend> GameController<B> {
    /// Creates a controller in Setup with focus on the first field.
    #[instrument(skip(settings, audio))]
    pub fn new(settings: GameSettings, audio: AudioCueBroker<B>) -> Self {
        info!("Creating GameController");
        Self {
            session: GameSession::new(settings),
            audio,
            countdown: None,
            focus: FocusHandle::for_phase(Phase::Setup),
            dispatcher: KeyboardDispatcher::new(),
            status: None,
            hits: HitMap::default(),
            running: true,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The audio broker.
    pub fn audio(&self) -> &AudioCueBroker<B> {
        &self.audio
    }

    /// The focus handle.
    pub fn focus(&self) -> &FocusHandle {
        &self.focus
    }

    /// Message from the last refused action, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// True while the countdown timer is armed.
    pub fn countdown_active(&self) -> bool {
        self.countdown.is_some()
    }

    /// False once the player asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Interactive areas from the last render.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<T: Backend>(&mut self, terminal: &mut Terminal<T>) -> anyhow::Result<()>
    where
        <T as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting game event loop");

        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.poll_timeout(Instant::now()))? {
                let event = event::read()?;
                self.handle_event(event, Instant::now());
            }
            self.advance(Instant::now());

            sleep(Duration::from_millis(10)).await;
        }

        self.countdown = None;
        info!("Game event loop finished");
        Ok(())
    }

    /// Draws the current phase and records where its widgets landed.
    pub fn render(&mut self, frame: &mut Frame) {
        self.hits = screens::draw(frame, &self.session, &self.focus, self.status.as_deref());
    }

    /// How long the loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.countdown
            .map_or(IDLE_POLL, |timer| timer.until_next(now).min(IDLE_POLL))
    }

    /// Applies one terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
    }

    /// Applies one key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match self.dispatcher.dispatch(key) {
            Intent::Confirm => self.confirm(now),
            Intent::Edit(key) => self.edit_focused(key, now),
            Intent::FocusNext => self.focus.next(self.session.phase()),
            Intent::FocusPrevious => self.focus.previous(self.session.phase()),
            Intent::Quit => {
                info!("Player quit");
                self.running = false;
            }
            Intent::Ignore => {}
        }
    }

    /// Applies one mouse event. Only left-button presses do anything.
    #[instrument(skip(self, now))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.hits.button_at(mouse.column, mouse.row) {
            debug!("Button clicked");
            self.confirm(now);
        } else if let Some(target) = self.hits.field_at(mouse.column, mouse.row) {
            self.focus.focus(target);
        }
    }

    /// Unlocks audio, then runs the confirm action for the current phase.
    #[instrument(skip(self, now), fields(phase = %self.session.phase()))]
    pub fn confirm(&mut self, now: Instant) {
        self.audio.unlock();
        match self.session.confirm() {
            Some(Ok(transition)) => {
                self.status = None;
                self.apply(transition, now);
            }
            Some(Err(e)) => {
                info!(error = %e, "Confirm refused");
                self.status = Some(e.to_string());
            }
            None => debug!("Confirm ignored during display"),
        }
    }

    /// Feeds due countdown ticks into the session.
    ///
    /// Stops as soon as the session leaves Display; remaining ticks are
    /// discarded with the cancelled timer.
    pub fn advance(&mut self, now: Instant) {
        let ticks = match self.countdown.as_mut() {
            Some(timer) => timer.poll(now),
            None => return,
        };
        for _ in 0..ticks {
            if self.session.phase() != Phase::Display {
                break;
            }
            match self.session.tick() {
                Ok(transition) => self.apply(transition, now),
                Err(e) => {
                    warn!(error = %e, "Stale countdown tick, cancelling timer");
                    self.countdown = None;
                    break;
                }
            }
        }
    }

    fn edit_focused(&mut self, key: KeyEvent, now: Instant) {
        let phase = self.session.phase();
        let Some(target) = self.focus.current() else {
            return;
        };

        let field = match (phase, target) {
            (Phase::Setup, FocusTarget::Digits) => {
                Some((FieldKind::Number, self.session.settings_mut().digits_mut()))
            }
            (Phase::Setup, FocusTarget::Seconds) => {
                Some((FieldKind::Number, self.session.settings_mut().seconds_mut()))
            }
            _ => None,
        };
        if let Some((kind, value)) = field {
            if let Some(next) = InputField::edit(kind, value, key) {
                *value = next;
            }
            return;
        }

        match (phase, target) {
            (Phase::Answer, FocusTarget::Answer) => {
                if let Some(next) = InputField::edit(FieldKind::Text, self.session.user_answer(), key)
                {
                    self.session.set_user_answer(next);
                }
            }
            // Space activates a focused button
            (_, FocusTarget::Confirm) if key.code == crossterm::event::KeyCode::Char(' ') => {
                self.confirm(now);
            }
            _ => {}
        }
    }

    fn apply(&mut self, transition: Transition, now: Instant) {
        debug!(from = %transition.from, to = %transition.to, "Applying transition");

        if let Some(cue) = transition.cue {
            self.audio.play(cue);
        }
        if transition.arms_countdown() {
            self.countdown = Some(CountdownTimer::armed(now));
        }
        if transition.cancels_countdown() {
            self.countdown = None;
        }
        if transition.focuses_answer() {
            self.focus.focus(FocusTarget::Answer);
        } else if transition.changed_phase() {
            self.focus.reset_for(transition.to);
        }
    }
}
