use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub frame: u64,  // Frames simulated so far
    pub now_ms: u64, // Clock reading for this frame, monotonic
}

impl Time {
    pub fn new(frame: u64, now_ms: u64) -> Self {
        Self { frame, now_ms }
    }
}

/// Goals produced by a single ball update. At most one side is ever nonzero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDelta {
    pub left: u32,
    pub right: u32,
}

impl ScoreDelta {
    pub const NONE: Self = Self { left: 0, right: 0 };

    pub fn goal(scorer: Side) -> Self {
        match scorer {
            Side::Left => Self { left: 1, right: 0 },
            Side::Right => Self { left: 0, right: 1 },
        }
    }

    pub fn scorer(&self) -> Option<Side> {
        if self.left > 0 {
            Some(Side::Left)
        } else if self.right > 0 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Game score tracking. Endless: there is no winning score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn increment_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn apply(&mut self, delta: ScoreDelta) {
        match delta.scorer() {
            Some(Side::Left) => self.increment_left(),
            Some(Side::Right) => self.increment_right(),
            None => {}
        }
    }
}

/// Random capability used by the ball serve and the AI noise
pub trait RandomSource {
    /// Uniform sample in `[low, high)`; returns `low` for an empty range
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Normal sample; a zero sigma returns `mean` exactly
    fn gaussian(&mut self, mean: f64, sigma: f64) -> f64;

    /// +1.0 or -1.0 with equal odds
    fn sign(&mut self) -> f64 {
        if self.uniform(0.0, 1.0) < 0.5 {
            -1.0
        } else {
            1.0
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if low < high {
            self.0.gen_range(low..high)
        } else {
            low
        }
    }

    fn gaussian(&mut self, mean: f64, sigma: f64) -> f64 {
        match Normal::new(mean, sigma) {
            Ok(normal) if sigma > 0.0 => normal.sample(&mut self.0),
            _ => mean,
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}
