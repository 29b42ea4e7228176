//! Seams between the simulation and the outside world: drawing, keyboard, clock.

use crate::{Rect, Score};

/// Static help text shown under the field
pub const INFO_LINES: [&str; 2] = ["W/S: Move | Esc: Quit", "First to any score (endless)."];

/// Key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub quit: bool,
}

impl InputState {
    /// -1 up, 1 down, 0 when idle or both held
    pub fn direction(&self) -> i8 {
        (self.down as i8) - (self.up as i8)
    }
}

/// Copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub field_width: f64,
    pub field_height: f64,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub score: Score,
    pub info: &'static [&'static str],
}

pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    fn render(&mut self, frame: &Snapshot) -> Result<(), Self::Error>;
}

pub trait InputSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn poll(&mut self) -> Result<InputState, Self::Error>;
}

pub trait Clock {
    /// Block until the next frame is due
    fn tick(&mut self);

    /// Monotonic milliseconds since the clock started
    fn now_ms(&self) -> u64;
}
