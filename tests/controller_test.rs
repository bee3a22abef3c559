//! End-to-end tests for the game controller, driven with synthetic events.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};

use digit_recall::{
    AudioBackend, AudioCueBroker, AudioError, Cue, FocusTarget, GameController, GameSettings,
    Phase, Verdict,
};

/// Backend that records cues instead of producing sound.
#[derive(Debug, Default)]
struct RecordingBackend {
    opens: usize,
    played: Vec<Cue>,
    fail_open: bool,
}

impl AudioBackend for RecordingBackend {
    fn open(&mut self) -> Result<(), AudioError> {
        self.opens += 1;
        if self.fail_open {
            Err(AudioError::new("no device"))
        } else {
            Ok(())
        }
    }

    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.played.push(cue);
        Ok(())
    }
}

fn controller(digits: &str, seconds: &str) -> GameController<RecordingBackend> {
    GameController::new(
        GameSettings::new(digits, seconds),
        AudioCueBroker::new(RecordingBackend::default()),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(controller: &mut GameController<RecordingBackend>, text: &str, now: Instant) {
    for c in text.chars() {
        controller.handle_key(key(KeyCode::Char(c)), now);
    }
}

fn click(controller: &mut GameController<RecordingBackend>, column: u16, row: u16, now: Instant) {
    controller.handle_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
        now,
    );
}

fn render(terminal: &mut Terminal<TestBackend>, controller: &mut GameController<RecordingBackend>) -> String {
    terminal
        .draw(|f| controller.render(f))
        .expect("Draw failed");
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(60, 24)).expect("Terminal failed")
}

#[test]
fn test_full_round_correct_answer() {
    let mut terminal = terminal();
    let mut game = controller("4", "2");
    let t0 = Instant::now();

    let setup = render(&mut terminal, &mut game);
    assert!(setup.contains("Number of digits"));
    assert!(setup.contains("Seconds to memorize"));
    assert!(setup.contains("Start"));

    game.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(game.session().phase(), Phase::Display);
    assert!(game.countdown_active());
    assert!(game.audio().is_ready());
    assert_eq!(game.audio().backend().played, vec![Cue::Start]);

    let target = game.session().target_number().to_string();
    assert_eq!(target.len(), 4);
    assert!(target.chars().all(|c| c.is_ascii_digit()));

    let display = render(&mut terminal, &mut game);
    assert!(display.contains(&target));
    assert!(display.contains("Time left: 2 seconds"));

    game.advance(t0 + Duration::from_millis(1000));
    assert_eq!(game.session().phase(), Phase::Display);
    assert_eq!(game.session().remaining_seconds(), 1);

    game.advance(t0 + Duration::from_millis(2000));
    assert_eq!(game.session().phase(), Phase::Answer);
    assert_eq!(game.session().remaining_seconds(), 0);
    assert!(!game.countdown_active());
    assert_eq!(game.focus().current(), Some(FocusTarget::Answer));

    let t1 = t0 + Duration::from_secs(5);
    type_text(&mut game, &target, t1);
    assert_eq!(game.session().user_answer(), target);

    game.handle_key(key(KeyCode::Enter), t1);
    assert_eq!(game.session().phase(), Phase::Result);
    assert_eq!(game.session().verdict(), Some(Verdict::Correct));
    assert_eq!(game.audio().backend().played, vec![Cue::Start, Cue::Correct]);

    let result = render(&mut terminal, &mut game);
    assert!(result.contains("Correct!"));
    assert!(result.contains(&format!("The number was: {}", target)));
    assert!(result.contains(&format!("Your answer: {}", target)));
    assert!(result.contains("Play Again"));

    game.handle_key(key(KeyCode::Enter), t1);
    assert_eq!(game.session().phase(), Phase::Setup);
    assert_eq!(game.session().user_answer(), "");
    assert_eq!(game.session().settings().digits(), "4");
    assert_eq!(game.session().settings().seconds(), "2");
    assert_eq!(game.focus().current(), Some(FocusTarget::Digits));
    assert_eq!(game.audio().backend().opens, 1);
}

#[test]
fn test_wrong_answer_plays_incorrect() {
    let mut terminal = terminal();
    let mut game = controller("3", "1");
    let t0 = Instant::now();

    game.handle_key(key(KeyCode::Enter), t0);
    game.advance(t0 + Duration::from_secs(1));
    assert_eq!(game.session().phase(), Phase::Answer);

    let wrong = format!(" {}", game.session().target_number());
    type_text(&mut game, &wrong, t0);
    game.handle_key(key(KeyCode::Enter), t0);

    assert_eq!(game.session().verdict(), Some(Verdict::Incorrect));
    assert_eq!(game.audio().backend().played, vec![Cue::Start, Cue::Incorrect]);
    assert!(render(&mut terminal, &mut game).contains("Incorrect!"));
}

#[test]
fn test_confirm_during_display_is_noop() {
    let mut game = controller("5", "3");
    let t0 = Instant::now();

    game.handle_key(key(KeyCode::Enter), t0);
    let before = game.session().clone();
    game.handle_key(key(KeyCode::Enter), t0 + Duration::from_millis(200));
    type_text(&mut game, "12", t0);

    assert_eq!(game.session(), &before);
    assert_eq!(game.audio().backend().played, vec![Cue::Start]);
}

#[test]
fn test_late_poll_stops_ticking_at_answer() {
    let mut game = controller("5", "2");
    let t0 = Instant::now();

    game.handle_key(key(KeyCode::Enter), t0);
    game.advance(t0 + Duration::from_secs(10));

    assert_eq!(game.session().phase(), Phase::Answer);
    assert_eq!(game.session().remaining_seconds(), 0);
    assert!(!game.countdown_active());

    game.advance(t0 + Duration::from_secs(20));
    assert_eq!(game.session().phase(), Phase::Answer);
}

#[test]
fn test_poll_timeout_follows_countdown() {
    let mut game = controller("5", "2");
    let t0 = Instant::now();
    assert_eq!(game.poll_timeout(t0), Duration::from_millis(100));

    game.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(
        game.poll_timeout(t0 + Duration::from_millis(950)),
        Duration::from_millis(50)
    );
}

#[test]
fn test_invalid_settings_refused_with_status() {
    let mut terminal = terminal();
    let mut game = controller("5", "3");
    let t0 = Instant::now();

    game.handle_key(key(KeyCode::Backspace), t0);
    assert_eq!(game.session().settings().digits(), "");

    game.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(game.session().phase(), Phase::Setup);
    assert!(!game.countdown_active());
    assert!(game.audio().backend().played.is_empty());
    let status = game.status().expect("Refusal should set a status").to_string();
    assert!(status.contains("Digits must be"));
    assert!(render(&mut terminal, &mut game).contains("Digits must be a whole number"));

    type_text(&mut game, "6", t0);
    game.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(game.session().phase(), Phase::Display);
    assert_eq!(game.status(), None);
    assert_eq!(game.session().target_number().len(), 6);
}

#[test]
fn test_setup_fields_take_digits_and_tab_between() {
    let mut game = controller("", "");
    let t0 = Instant::now();

    type_text(&mut game, "1x2", t0);
    game.handle_key(key(KeyCode::Tab), t0);
    type_text(&mut game, "4", t0);

    assert_eq!(game.session().settings().digits(), "12");
    assert_eq!(game.session().settings().seconds(), "4");

    game.handle_key(key(KeyCode::Tab), t0);
    assert_eq!(game.focus().current(), Some(FocusTarget::Confirm));
    game.handle_key(key(KeyCode::Char(' ')), t0);
    assert_eq!(game.session().phase(), Phase::Display);
    assert_eq!(game.session().target_number().len(), 12);
}

#[test]
fn test_mouse_click_activates_button_and_focuses_fields() {
    let mut terminal = terminal();
    let mut game = controller("4", "2");
    let t0 = Instant::now();
    render(&mut terminal, &mut game);

    let (_, seconds_area) = game
        .hits()
        .fields
        .iter()
        .copied()
        .find(|(target, _)| *target == FocusTarget::Seconds)
        .expect("Seconds field drawn");
    click(&mut game, seconds_area.x + 1, seconds_area.y + 1, t0);
    assert_eq!(game.focus().current(), Some(FocusTarget::Seconds));

    let button = game.hits().button.expect("Start button drawn");
    click(&mut game, button.x + 1, button.y + 1, t0);
    assert_eq!(game.session().phase(), Phase::Display);
    assert!(game.audio().is_ready());

    render(&mut terminal, &mut game);
    assert_eq!(game.hits().button, None);
}

#[test]
fn test_audio_failure_does_not_block_play() {
    let mut game = GameController::new(
        GameSettings::new("4", "1"),
        AudioCueBroker::new(RecordingBackend {
            fail_open: true,
            ..Default::default()
        }),
    );
    let t0 = Instant::now();

    game.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(game.session().phase(), Phase::Display);
    assert!(!game.audio().is_ready());
    assert!(game.audio().backend().played.is_empty());

    game.advance(t0 + Duration::from_secs(1));
    game.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(game.session().phase(), Phase::Result);
    assert_eq!(game.audio().backend().opens, 2);
}

#[test]
fn test_escape_quits() {
    let mut game = controller("5", "3");
    assert!(game.is_running());
    game.handle_key(key(KeyCode::Esc), Instant::now());
    assert!(!game.is_running());
}

#[test]
fn test_long_answer_stays_on_screen() {
    let mut terminal = terminal();
    let mut game = controller("100", "1");
    let t0 = Instant::now();

    game.handle_key(key(KeyCode::Enter), t0);
    game.advance(t0 + Duration::from_secs(1));
    let target = game.session().target_number().to_string();
    type_text(&mut game, &target, t0);

    let answer = render(&mut terminal, &mut game);
    assert!(answer.contains(&format!("{}▏", &target[60..])));

    game.handle_key(key(KeyCode::Enter), t0);
    assert_eq!(game.session().verdict(), Some(Verdict::Correct));

    // Wrapped lines are centered, so compare with the padding removed.
    let result: String = render(&mut terminal, &mut game)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    assert!(result.contains(&format!("Thenumberwas:{}", target)));
    assert!(result.contains(&format!("Youranswer:{}", target)));
    assert!(result.contains("PlayAgain"));
}
