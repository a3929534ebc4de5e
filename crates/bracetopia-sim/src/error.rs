use bracetopia_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("grid is {got}x{got} but the configuration wants {expected}x{expected}")]
    GridSizeMismatch { expected: usize, got: usize },
}

pub type SimResult<T> = Result<T, SimError>;
