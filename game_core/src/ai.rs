//! Computer opponent with human-like reaction lag and aiming error.
//!
//! The controller only re-reads the ball every `reaction_interval_ms`. While
//! the ball approaches it aims at the ball's current height plus Gaussian
//! noise that widens with distance and ball speed; while the ball recedes it
//! drifts back toward the middle of the field. Between re-reads the paddle
//! keeps chasing the stale target at a bounded speed.

use crate::{AiConfig, Ball, Config, Paddle, RandomSource, Side};

/// AI component, attached to the paddle it drives
#[derive(Debug, Clone)]
pub struct AiController {
    pub reaction_interval_ms: u64,
    pub last_update_ms: u64,
    pub target_center_y: f64,
    pub center_bias: f64,
    pub speed: f64, // Per-frame step once the target is out of reach
    tuning: AiConfig,
}

impl AiController {
    pub fn new(config: &Config) -> Self {
        Self {
            reaction_interval_ms: config.ai.reaction_interval_ms,
            last_update_ms: 0,
            target_center_y: config.field_height / 2.0,
            center_bias: config.ai.center_bias,
            speed: config.ai_paddle_speed,
            tuning: config.ai.clone(),
        }
    }

    /// Re-aim if the reaction interval has passed, then step `paddle` toward the target
    pub fn update(
        &mut self,
        paddle: &mut Paddle,
        ball: &Ball,
        config: &Config,
        now_ms: u64,
        rng: &mut dyn RandomSource,
    ) {
        if now_ms.saturating_sub(self.last_update_ms) >= self.reaction_interval_ms {
            self.last_update_ms = now_ms;
            self.retarget(paddle.side, ball, config, rng);
        }

        let mut dy = self.target_center_y - paddle.center_y();
        if dy.abs() > paddle.speed {
            dy = self.speed.copysign(dy);
        }
        paddle.move_by(dy, config.field_height);
    }

    fn retarget(&mut self, side: Side, ball: &Ball, config: &Config, rng: &mut dyn RandomSource) {
        let ball_towards_ai = ball.vel.x * side.toward() > 0.0;

        if ball_towards_ai {
            let sigma = self.aim_sigma(side, ball, config);
            let noise = rng.gaussian(0.0, sigma);
            self.target_center_y = ball.pos.y + noise;
            tracing::trace!(sigma, target = self.target_center_y, "AI tracking ball");
        } else {
            let noise = rng.gaussian(0.0, self.tuning.recenter_sigma);
            let home = config.field_height / 2.0 + noise;
            self.target_center_y =
                (1.0 - self.center_bias) * self.target_center_y + self.center_bias * home;
            tracing::trace!(target = self.target_center_y, "AI drifting to centre");
        }
    }

    /// Aiming error grows with horizontal distance to the paddle's edge and with ball speed
    pub fn aim_sigma(&self, side: Side, ball: &Ball, config: &Config) -> f64 {
        let distance_x = match side {
            Side::Left => ball.pos.x,
            Side::Right => config.field_width - ball.pos.x,
        }
        .max(1.0);
        let speed_factor = ball.vel.x.abs().max(1.0);

        let ai = &self.tuning;
        (ai.sigma_base + distance_x / ai.distance_divisor + speed_factor * ai.speed_weight)
            .min(ai.sigma_max)
    }
}
