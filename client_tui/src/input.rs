//! Keyboard input handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{InputSource, InputState};
use std::io;
use std::time::{Duration, Instant};

/// Without release events a held key looks like a press followed, after the
/// OS repeat delay, by a stream of repeats. Bridge the delay, then expect
/// repeats at a steady rate.
const FIRST_HOLD: Duration = Duration::from_millis(300);
const REPEAT_HOLD: Duration = Duration::from_millis(90);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Quit,
}

/// Map a key to a game action
pub fn action_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Down),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hold {
    Released,
    Pressed,       // Until a release event arrives
    Until(Instant), // Emulated hold, expires unless refreshed
}

impl Hold {
    fn is_held(&self, now: Instant) -> bool {
        match self {
            Hold::Released => false,
            Hold::Pressed => true,
            Hold::Until(deadline) => now < *deadline,
        }
    }
}

/// Pressed state of the two paddle keys plus the quit latch
#[derive(Debug, Clone)]
pub struct KeyState {
    up: Hold,
    down: Hold,
    quit: bool,
    release_events: bool,
}

impl KeyState {
    pub fn new(release_events: bool) -> Self {
        Self {
            up: Hold::Released,
            down: Hold::Released,
            quit: false,
            release_events,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        let Some(action) = action_for(key.code, key.modifiers) else {
            return;
        };
        let release_events = self.release_events;
        let hold = match action {
            Action::Quit => {
                if key.kind != KeyEventKind::Release {
                    self.quit = true;
                }
                return;
            }
            Action::Up => &mut self.up,
            Action::Down => &mut self.down,
        };

        *hold = match (key.kind, release_events) {
            (KeyEventKind::Release, _) => Hold::Released,
            (_, true) => Hold::Pressed,
            (_, false) if hold.is_held(now) => Hold::Until(now + REPEAT_HOLD),
            (_, false) => Hold::Until(now + FIRST_HOLD),
        };
    }

    pub fn state(&self, now: Instant) -> InputState {
        InputState {
            up: self.up.is_held(now),
            down: self.down.is_held(now),
            quit: self.quit,
        }
    }
}

/// Reads pending crossterm events without blocking
pub struct TerminalInput {
    keys: KeyState,
}

impl TerminalInput {
    pub fn new(release_events: bool) -> Self {
        Self {
            keys: KeyState::new(release_events),
        }
    }
}

impl InputSource for TerminalInput {
    type Error = io::Error;

    fn poll(&mut self) -> Result<InputState, io::Error> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.keys.handle_key(&key, Instant::now());
            }
        }
        Ok(self.keys.state(Instant::now()))
    }
}
