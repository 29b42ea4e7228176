use glam::DVec2;
use std::f64::consts::FRAC_PI_2;
use std::time::Duration;

use crate::{ConfigError, Params, Side};

/// Tuning for the computer-controlled paddle
#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    pub reaction_interval_ms: u64,
    pub center_bias: f64,
    pub sigma_base: f64,
    pub sigma_max: f64,
    pub distance_divisor: f64,
    pub speed_weight: f64,
    pub recenter_sigma: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            reaction_interval_ms: Params::AI_REACTION_MS,
            center_bias: Params::AI_CENTER_BIAS,
            sigma_base: Params::AI_SIGMA_BASE,
            sigma_max: Params::AI_SIGMA_MAX,
            distance_divisor: Params::AI_DISTANCE_DIVISOR,
            speed_weight: Params::AI_SPEED_WEIGHT,
            recenter_sigma: Params::AI_RECENTER_SIGMA,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub field_width: f64,
    pub field_height: f64,
    pub fps: u32,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_margin: f64,
    pub paddle_speed: f64,
    pub ai_paddle_speed: f64,
    pub ball_size: f64,
    pub ball_speed_initial: f64,
    pub ball_speed_max: f64,
    pub ball_speed_increment: f64,
    pub max_deflection: f64,
    pub serve_angle: f64,
    pub ai: AiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            fps: Params::FPS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            max_deflection: Params::MAX_DEFLECTION,
            serve_angle: Params::SERVE_ANGLE,
            ai: AiConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every startup precondition. Per-frame code assumes this passed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.field_width) || !positive(self.field_height) {
            return Err(ConfigError::FieldSize {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::FrameRate);
        }
        if !positive(self.paddle_width) || !positive(self.paddle_height) {
            return Err(ConfigError::PaddleSize {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height >= self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if !(self.paddle_margin.is_finite() && self.paddle_margin >= 0.0)
            || 2.0 * (self.paddle_margin + self.paddle_width) >= self.field_width
        {
            return Err(ConfigError::PaddlesOverlap {
                width: self.paddle_width,
                margin: self.paddle_margin,
                field: self.field_width,
            });
        }
        if !positive(self.paddle_speed) {
            return Err(ConfigError::PaddleSpeed {
                which: "player",
                speed: self.paddle_speed,
            });
        }
        if !positive(self.ai_paddle_speed) {
            return Err(ConfigError::PaddleSpeed {
                which: "AI",
                speed: self.ai_paddle_speed,
            });
        }
        if !positive(self.ball_size)
            || self.ball_size >= self.field_height
            || self.ball_size >= self.field_width
        {
            return Err(ConfigError::BallSize {
                size: self.ball_size,
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !positive(self.ball_speed_initial)
            || !self.ball_speed_max.is_finite()
            || self.ball_speed_initial > self.ball_speed_max
        {
            return Err(ConfigError::BallSpeed {
                initial: self.ball_speed_initial,
                max: self.ball_speed_max,
            });
        }
        if !(self.ball_speed_increment.is_finite() && self.ball_speed_increment >= 0.0) {
            return Err(ConfigError::BallSpeedIncrement(self.ball_speed_increment));
        }
        for (which, angle) in [
            ("deflection", self.max_deflection),
            ("serve", self.serve_angle),
        ] {
            if !(angle > 0.0 && angle < FRAC_PI_2) {
                return Err(ConfigError::Angle { which, angle });
            }
        }
        self.ai.validate()
    }

    /// Top-left corner of a paddle at match start
    pub fn paddle_spawn(&self, side: Side) -> DVec2 {
        let x = match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        };
        DVec2::new(x, (self.field_height - self.paddle_height) / 2.0)
    }

    pub fn paddle_size(&self) -> DVec2 {
        DVec2::new(self.paddle_width, self.paddle_height)
    }

    /// Per-frame speed for the paddle on `side`; the right paddle is the AI's
    pub fn paddle_speed_for(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.paddle_speed,
            Side::Right => self.ai_paddle_speed,
        }
    }

    pub fn field_center(&self) -> DVec2 {
        DVec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

impl AiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.center_bias) {
            return Err(ConfigError::CenterBias(self.center_bias));
        }
        for (which, value) in [
            ("sigma_base", self.sigma_base),
            ("sigma_max", self.sigma_max),
            ("speed_weight", self.speed_weight),
            ("recenter_sigma", self.recenter_sigma),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::AiNoise { which, value });
            }
        }
        if !(self.distance_divisor.is_finite() && self.distance_divisor > 0.0) {
            return Err(ConfigError::AiNoise {
                which: "distance_divisor",
                value: self.distance_divisor,
            });
        }
        Ok(())
    }
}
