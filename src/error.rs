use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),
    #[error("draw {0} is outside [0, 1)")]
    InvalidDraw(f64),
    #[error("cannot move {steps} steps from square {from}")]
    InvalidStepCount { from: usize, steps: i64 },
    #[error("card resolution exceeded depth {0}")]
    ResolutionDepthExceeded(usize),
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("random source exhausted")]
    RandomSourceExhausted,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
