use thiserror::Error;

#[derive(Error, Debug)]
pub enum FirError {
    #[error("Coefficient table is empty")]
    EmptyCoefficients,

    #[error("Gain divisor must be >= 1, got {0}")]
    InvalidGainDivisor(i32),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FirError>;
