use game_core::*;
use glam::DVec2;
use hecs::World;
use std::f64::consts::PI;

const EPS: f64 = 1e-6;

/// Deterministic source: serves flat toward +x, AI aims without error
struct FixedRng;

impl RandomSource for FixedRng {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }

    fn gaussian(&mut self, mean: f64, _sigma: f64) -> f64 {
        mean
    }
}

fn ball_from_center(config: &Config, angle: f64, speed: f64, direction: f64) -> Ball {
    Ball::new(
        config.field_center(),
        DVec2::splat(config.ball_size),
        DVec2::new(angle.cos() * speed * direction, angle.sin() * speed),
    )
}

#[test]
fn test_serve_at_minus_point_two_pi_reaches_top_wall_once() {
    let config = Config::new();
    let mut world = World::new();
    let mut score = Score::new();
    let mut events = Events::new();
    let mut rng = FixedRng;
    // No paddles: nothing but the walls to hit
    let ball = create_ball(&mut world, ball_from_center(&config, -0.2 * PI, 6.0, -1.0));

    let mut last_y = config.field_height / 2.0;
    for frame in 1..=83u64 {
        let delta = step(
            &mut world,
            &Time::new(frame, frame * 16),
            &config,
            &mut score,
            &mut events,
            &InputState::default(),
            &mut rng,
        );
        let b = *world.get::<&Ball>(ball).unwrap();

        assert_eq!(delta, ScoreDelta::NONE, "frame {frame}");
        assert!(!events.ball_hit_wall, "No wall contact yet at frame {frame}");
        assert!(b.vel.y < 0.0, "Still climbing at frame {frame}");
        assert!(b.pos.y < last_y);
        assert!(b.rect().min.y >= 0.0 && b.rect().max.y <= config.field_height);
        last_y = b.pos.y;
    }

    // Frame 84: the ball touches the top wall on the same frame it clears the left edge
    let delta = step(
        &mut world,
        &Time::new(84, 84 * 16),
        &config,
        &mut score,
        &mut events,
        &InputState::default(),
        &mut rng,
    );
    assert!(events.ball_hit_wall, "Exactly one wall contact, at frame 84");
    assert_eq!(delta, ScoreDelta { left: 0, right: 1 });
    assert_eq!(score.right, 1);
}

#[test]
fn test_vertical_reflections_only_happen_at_walls() {
    let config = Config::new();
    let mut world = World::new();
    let mut score = Score::new();
    let mut events = Events::new();
    let mut rng = GameRng::new(2024);
    let ball = create_ball(&mut world, ball_from_center(&config, 0.3 * PI, 6.0, 1.0));

    let mut last_vy = world.get::<&Ball>(ball).unwrap().vel.y;
    let mut wall_hits = 0;
    for frame in 1..=3000u64 {
        step(
            &mut world,
            &Time::new(frame, frame * 16),
            &config,
            &mut score,
            &mut events,
            &InputState::default(),
            &mut rng,
        );
        let b = *world.get::<&Ball>(ball).unwrap();

        assert!(b.rect().min.y >= 0.0, "frame {frame}: above the field");
        assert!(b.rect().max.y <= config.field_height, "frame {frame}: below the field");

        let scored = events.left_scored || events.right_scored;
        if b.vel.y.signum() != last_vy.signum() && !scored {
            assert!(events.ball_hit_wall, "frame {frame}: vy flipped away from a wall");
        }
        if events.ball_hit_wall {
            wall_hits += 1;
        }
        last_vy = b.vel.y;
    }
    assert!(wall_hits > 0, "A steep serve must reach a wall");
}

#[test]
fn test_right_goal_recentres_and_serves_toward_conceding_side() {
    let config = Config::new();
    let mut world = World::new();
    let mut score = Score::new();
    let mut events = Events::new();
    let mut rng = GameRng::new(9);
    // The right paddle is nowhere near the ball's path
    create_ai_paddle(&mut world, Side::Right, &config);
    let ball = create_ball(
        &mut world,
        Ball::new(DVec2::new(4.0, 300.0), DVec2::splat(12.0), DVec2::new(-11.0, 0.0)),
    );

    let delta = step(
        &mut world,
        &Time::new(1, 16),
        &config,
        &mut score,
        &mut events,
        &InputState::default(),
        &mut rng,
    );

    let b = *world.get::<&Ball>(ball).unwrap();
    assert_eq!(delta.right, 1, "Right player scores when the ball leaves on the left");
    assert_eq!(delta.left, 0);
    assert_eq!(b.rect().center(), config.field_center());
    assert_eq!(b.speed, config.ball_speed_initial);
    assert!(b.vel.x < 0.0, "Serve heads back toward the left player who conceded");
}

#[test]
fn test_left_goal_serves_toward_right() {
    let config = Config::new();
    let mut game = Match::new(config, FixedRng).unwrap();
    for (_entity, ball) in game.world.query_mut::<&mut Ball>() {
        ball.pos = DVec2::new(805.0, 100.0);
        ball.vel = DVec2::new(6.0, 0.0);
    }

    let delta = game.tick(&InputState::default(), 16);

    assert_eq!(delta, ScoreDelta { left: 1, right: 0 });
    assert_eq!(game.score, Score { left: 1, right: 0 });
    assert!(game.ball().vel.x > 0.0);
}

#[test]
fn test_scoring_is_exclusive_over_a_long_match() {
    let mut game = Match::new(Config::new(), GameRng::new(77)).unwrap();
    let mut goals = 0;

    for frame in 1..=20_000u64 {
        let delta = game.tick(&InputState::default(), frame * 16);
        assert!(delta.left <= 1 && delta.right <= 1);
        assert!(delta.left == 0 || delta.right == 0, "Both sides scored in one frame");
        goals += delta.left + delta.right;
    }

    assert_eq!(goals, game.score.left + game.score.right);
    assert!(goals > 0, "An idle human should concede eventually");
}

#[test]
fn test_ai_target_is_stale_within_reaction_interval() {
    let config = Config::new();
    let mut paddle = Paddle::spawn(Side::Right, &config);
    let mut ai = AiController::new(&config);
    let mut rng = GameRng::new(3);
    let mut ball = Ball::new(
        DVec2::new(500.0, 120.0),
        DVec2::splat(12.0),
        DVec2::new(6.0, 2.0),
    );

    ai.update(&mut paddle, &ball, &config, 1000, &mut rng);
    let target = ai.target_center_y;

    for now in [1016, 1050, 1100, 1119] {
        ball.pos += ball.vel;
        let before = paddle.center_y();
        ai.update(&mut paddle, &ball, &config, now, &mut rng);

        assert_eq!(ai.target_center_y, target, "Re-aimed early at {now} ms");
        assert!((paddle.center_y() - before).abs() <= config.ai_paddle_speed + EPS);
    }

    ai.update(&mut paddle, &ball, &config, 1120, &mut rng);
    assert_eq!(ai.last_update_ms, 1120, "Re-aims once the interval has passed");
}

#[test]
fn test_human_paddle_follows_input_through_match() {
    let mut game = Match::new(Config::new(), FixedRng).unwrap();
    let down = InputState {
        down: true,
        ..Default::default()
    };

    for frame in 1..=10u64 {
        game.tick(&down, frame * 16);
    }
    assert_eq!(game.paddle(Side::Left).pos.y, 250.0 + 70.0);

    let both = InputState {
        up: true,
        down: true,
        quit: false,
    };
    game.tick(&both, 176);
    assert_eq!(game.paddle(Side::Left).pos.y, 320.0, "Opposing keys cancel");
}

#[test]
fn test_ai_returns_flat_serve() {
    // FixedRng serves flat toward the AI, which aims perfectly
    let mut game = Match::new(Config::new(), FixedRng).unwrap();

    for frame in 1..=120u64 {
        let delta = game.tick(&InputState::default(), frame * 16);
        assert_eq!(delta, ScoreDelta::NONE, "AI missed a flat serve at frame {frame}");
    }
    assert!(game.ball().vel.x < 0.0, "Ball is on its way back to the human");
}

// --- Boundary fakes ---

#[derive(Debug, thiserror::Error)]
#[error("screen unplugged")]
struct ScreenError;

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Snapshot>,
    fail_after: Option<usize>,
}

impl Renderer for RecordingRenderer {
    type Error = ScreenError;

    fn render(&mut self, frame: &Snapshot) -> Result<(), ScreenError> {
        if self.fail_after == Some(self.frames.len()) {
            return Err(ScreenError);
        }
        self.frames.push(frame.clone());
        Ok(())
    }
}

struct ScriptedInput {
    frames_before_quit: usize,
    polled: usize,
}

impl InputSource for ScriptedInput {
    type Error = std::convert::Infallible;

    fn poll(&mut self) -> Result<InputState, Self::Error> {
        self.polled += 1;
        Ok(InputState {
            up: true,
            down: false,
            quit: self.polled > self.frames_before_quit,
        })
    }
}

struct ManualClock {
    now_ms: u64,
    ticks: u64,
}

impl Clock for ManualClock {
    fn tick(&mut self) {
        self.ticks += 1;
        self.now_ms += 16;
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

#[test]
fn test_run_renders_every_frame_until_quit() {
    let mut game = Match::new(Config::new(), GameRng::new(5)).unwrap();
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput {
        frames_before_quit: 30,
        polled: 0,
    };
    let mut clock = ManualClock { now_ms: 0, ticks: 0 };

    game.run(&mut renderer, &mut input, &mut clock).unwrap();

    assert_eq!(renderer.frames.len(), 30);
    assert_eq!(clock.ticks, 31, "One pacing tick per loop, including the quitting one");
    assert_eq!(game.time.frame, 30);
    assert_eq!(game.time.now_ms, 30 * 16);

    let last = renderer.frames.last().unwrap();
    assert_eq!(last.field_width, 800.0);
    assert_eq!(last.left_paddle.min.y, 250.0 - 30.0 * 7.0);
    assert_eq!(last.info, &INFO_LINES);
}

#[test]
fn test_run_surfaces_render_failure() {
    let mut game = Match::new(Config::new(), GameRng::new(5)).unwrap();
    let mut renderer = RecordingRenderer {
        frames: Vec::new(),
        fail_after: Some(3),
    };
    let mut input = ScriptedInput {
        frames_before_quit: 100,
        polled: 0,
    };
    let mut clock = ManualClock { now_ms: 0, ticks: 0 };

    let err = game.run(&mut renderer, &mut input, &mut clock).unwrap_err();

    assert!(matches!(err, GameError::Boundary { boundary: "render", .. }));
    assert_eq!(err.to_string(), "render boundary failed");
    assert_eq!(renderer.frames.len(), 3);
}
