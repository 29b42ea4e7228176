use std::f64::consts::PI;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f64 = 800.0;
    pub const FIELD_HEIGHT: f64 = 600.0;
    pub const FPS: u32 = 60;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 12.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    pub const PADDLE_MARGIN: f64 = 32.0; // gap between field edge and paddle
    pub const PADDLE_SPEED: f64 = 7.0; // pixels per frame
    pub const AI_PADDLE_SPEED: f64 = 6.0; // slightly slower than the player

    // Ball
    pub const BALL_SIZE: f64 = 12.0;
    pub const BALL_SPEED_INITIAL: f64 = 6.0;
    pub const BALL_SPEED_MAX: f64 = 12.0;
    pub const BALL_SPEED_INCREMENT: f64 = 0.35; // added on every paddle hit
    pub const MAX_DEFLECTION: f64 = 0.45 * PI; // ~81 degrees
    pub const SERVE_ANGLE: f64 = 0.35 * PI; // ~63 degrees either side of horizontal

    // AI
    pub const AI_REACTION_MS: u64 = 120;
    pub const AI_CENTER_BIAS: f64 = 0.15;
    pub const AI_SIGMA_BASE: f64 = 8.0;
    pub const AI_SIGMA_MAX: f64 = 80.0;
    pub const AI_DISTANCE_DIVISOR: f64 = 20.0;
    pub const AI_SPEED_WEIGHT: f64 = 1.2;
    pub const AI_RECENTER_SIGMA: f64 = 25.0;
}
