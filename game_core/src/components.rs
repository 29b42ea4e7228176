use glam::DVec2;

use crate::{Config, Events, RandomSource, Rect, ScoreDelta};

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal sign of a ball travelling toward this side
    pub fn toward(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: DVec2,  // Top-left corner
    pub size: DVec2, // Width, height
    pub speed: f64,  // Max pixels per frame
}

impl Paddle {
    pub fn new(side: Side, pos: DVec2, size: DVec2, speed: f64) -> Self {
        Self {
            side,
            pos,
            size,
            speed,
        }
    }

    /// Paddle at its start position for `side`
    pub fn spawn(side: Side, config: &Config) -> Self {
        Self::new(
            side,
            config.paddle_spawn(side),
            config.paddle_size(),
            config.paddle_speed_for(side),
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::from_top_left(self.pos, self.size)
    }

    pub fn center_y(&self) -> f64 {
        self.pos.y + self.size.y / 2.0
    }

    /// Move vertically by `dy`, keeping the whole paddle inside `[0, field_height]`
    pub fn move_by(&mut self, dy: f64, field_height: f64) {
        let max_y = (field_height - self.size.y).max(0.0);
        self.pos.y = (self.pos.y + dy).clamp(0.0, max_y);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: DVec2,  // Center
    pub size: DVec2, // Width, height
    pub vel: DVec2,  // Pixels per frame
    pub speed: f64,  // Always vel.length()
}

impl Ball {
    pub fn new(pos: DVec2, size: DVec2, vel: DVec2) -> Self {
        Self {
            pos,
            size,
            vel,
            speed: vel.length(),
        }
    }

    /// Opening serve: centred, initial speed, random angle and direction
    pub fn serve(config: &Config, rng: &mut dyn RandomSource) -> Self {
        let mut ball = Self::new(
            config.field_center(),
            DVec2::splat(config.ball_size),
            DVec2::ZERO,
        );
        let direction = rng.sign();
        ball.reset(direction, config, rng);
        ball
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, self.size)
    }

    /// Advance one frame: move, bounce off walls and paddles, detect goals
    pub fn update(
        &mut self,
        left: Option<&Paddle>,
        right: Option<&Paddle>,
        config: &Config,
        rng: &mut dyn RandomSource,
        events: &mut Events,
    ) -> ScoreDelta {
        self.pos += self.vel;

        let half = self.size * 0.5;
        if self.pos.y - half.y <= 0.0 {
            self.pos.y = half.y;
            self.vel.y = self.vel.y.abs();
            events.ball_hit_wall = true;
        } else if self.pos.y + half.y >= config.field_height {
            self.pos.y = config.field_height - half.y;
            self.vel.y = -self.vel.y.abs();
            events.ball_hit_wall = true;
        }

        // Only bounce when heading into the paddle so a contact spanning
        // several frames reflects once
        let rect = self.rect();
        let heading_left = self.vel.x < 0.0;
        let heading_right = self.vel.x > 0.0;
        if let Some(paddle) = left.filter(|p| heading_left && rect.overlaps(&p.rect())) {
            self.bounce(paddle, Side::Left, config);
            events.ball_hit_paddle = true;
        } else if let Some(paddle) = right.filter(|p| heading_right && rect.overlaps(&p.rect())) {
            self.bounce(paddle, Side::Right, config);
            events.ball_hit_paddle = true;
        }

        // Serve toward whoever just conceded
        let rect = self.rect();
        if rect.max.x < 0.0 {
            events.right_scored = true;
            self.reset(Side::Left.toward(), config, rng);
            ScoreDelta::goal(Side::Right)
        } else if rect.min.x > config.field_width {
            events.left_scored = true;
            self.reset(Side::Right.toward(), config, rng);
            ScoreDelta::goal(Side::Left)
        } else {
            ScoreDelta::NONE
        }
    }

    /// Reflect off the paddle on `side`, angled by where the ball struck it
    pub fn bounce(&mut self, paddle: &Paddle, side: Side, config: &Config) {
        let paddle_rect = paddle.rect();
        let half_width = self.size.x / 2.0;
        self.pos.x = match side {
            Side::Left => paddle_rect.max.x + half_width,
            Side::Right => paddle_rect.min.x - half_width,
        };

        let offset = ((self.pos.y - paddle.center_y()) / (paddle.size.y / 2.0)).clamp(-1.0, 1.0);

        self.speed = (self.speed + config.ball_speed_increment).min(config.ball_speed_max);

        let angle = offset * config.max_deflection;
        let direction = side.opposite().toward();
        self.vel = DVec2::new(
            angle.cos() * self.speed * direction,
            angle.sin() * self.speed,
        );
    }

    /// Recentre at initial speed with a random angle; `direction` signs vx
    pub fn reset(&mut self, direction: f64, config: &Config, rng: &mut dyn RandomSource) {
        self.pos = config.field_center();
        self.speed = config.ball_speed_initial;

        let angle = rng.uniform(-config.serve_angle, config.serve_angle);
        self.vel = DVec2::new(
            angle.cos() * self.speed * direction.signum(),
            angle.sin() * self.speed,
        );
    }
}

/// Movement intent for the human paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
