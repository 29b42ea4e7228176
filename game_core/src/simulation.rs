use hecs::{Entity, World};

use crate::{
    create_ai_paddle, create_ball, create_paddle, step, AiController, Ball, Clock, Config,
    ConfigError, Events, GameError, GameRng, InputSource, InputState, Paddle, RandomSource,
    Renderer, Score, ScoreDelta, Side, Snapshot, Time, INFO_LINES,
};

/// One endless match: the human defends the left, the AI the right
pub struct Match<R = GameRng> {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: R,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl<R: RandomSource> Match<R> {
    pub fn new(config: Config, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let left = create_paddle(&mut world, Side::Left, &config);
        let right = create_ai_paddle(&mut world, Side::Right, &config);
        let ball = create_ball(&mut world, Ball::serve(&config, &mut rng));

        tracing::info!(
            width = config.field_width,
            height = config.field_height,
            fps = config.fps,
            "match started"
        );

        Ok(Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            left,
            right,
            ball,
        })
    }

    /// Simulate one frame with the given key state and clock reading
    pub fn tick(&mut self, input: &InputState, now_ms: u64) -> ScoreDelta {
        self.time = Time::new(self.time.frame + 1, now_ms);

        let delta = step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
            &mut self.rng,
        );

        if let Some(scorer) = delta.scorer() {
            tracing::debug!(
                ?scorer,
                left = self.score.left,
                right = self.score.right,
                frame = self.time.frame,
                "goal"
            );
        }
        delta
    }

    /// Pace, poll, simulate and draw until the input source asks to quit
    pub fn run<D, I, C>(
        &mut self,
        renderer: &mut D,
        input: &mut I,
        clock: &mut C,
    ) -> Result<(), GameError>
    where
        D: Renderer,
        I: InputSource,
        C: Clock,
    {
        loop {
            clock.tick();

            let state = input.poll().map_err(|e| GameError::boundary("input", e))?;
            if state.quit {
                tracing::info!(
                    left = self.score.left,
                    right = self.score.right,
                    frames = self.time.frame,
                    "match ended"
                );
                return Ok(());
            }

            self.tick(&state, clock.now_ms());

            renderer
                .render(&self.snapshot())
                .map_err(|e| GameError::boundary("render", e))?;
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            left_paddle: self.paddle(Side::Left).rect(),
            right_paddle: self.paddle(Side::Right).rect(),
            ball: self.ball().rect(),
            score: self.score,
            info: &INFO_LINES,
        }
    }

    pub fn ball(&self) -> Ball {
        self.component(self.ball)
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        match side {
            Side::Left => self.component(self.left),
            Side::Right => self.component(self.right),
        }
    }

    pub fn ai(&self) -> AiController {
        self.component(self.right)
    }

    // Entities are spawned in `new` and never despawned
    fn component<T: hecs::Component + Clone>(&self, entity: Entity) -> T {
        match self.world.get::<&T>(entity) {
            Ok(component) => (*component).clone(),
            Err(err) => unreachable!("match entity lost its component: {err}"),
        }
    }
}
