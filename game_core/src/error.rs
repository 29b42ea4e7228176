use thiserror::Error;

/// Startup precondition violations in a [`crate::Config`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("field must have positive dimensions, got {width}x{height}")]
    FieldSize { width: f64, height: f64 },

    #[error("frame rate must be positive")]
    FrameRate,

    #[error("paddle must have positive dimensions, got {width}x{height}")]
    PaddleSize { width: f64, height: f64 },

    #[error("paddle height {paddle} must be smaller than field height {field}")]
    PaddleTooTall { paddle: f64, field: f64 },

    #[error("paddles ({width} wide at margin {margin}) do not fit a field {field} wide")]
    PaddlesOverlap { width: f64, margin: f64, field: f64 },

    #[error("{which} paddle speed must be positive, got {speed}")]
    PaddleSpeed { which: &'static str, speed: f64 },

    #[error("ball size {size} must be positive and fit inside a {width}x{height} field")]
    BallSize { size: f64, width: f64, height: f64 },

    #[error("ball speeds must satisfy 0 < initial ({initial}) <= max ({max})")]
    BallSpeed { initial: f64, max: f64 },

    #[error("ball speed increment must be non-negative, got {0}")]
    BallSpeedIncrement(f64),

    #[error("{which} angle must lie in (0, pi/2), got {angle}")]
    Angle { which: &'static str, angle: f64 },

    #[error("AI center bias must lie in [0, 1), got {0}")]
    CenterBias(f64),

    #[error("AI noise parameter {which} must be finite and non-negative, got {value}")]
    AiNoise { which: &'static str, value: f64 },
}

/// Errors that end a running match
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{boundary} boundary failed")]
    Boundary {
        boundary: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GameError {
    pub(crate) fn boundary<E>(boundary: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Boundary {
            boundary,
            source: Box::new(err),
        }
    }
}
