use pt_core::PtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("patrol configuration error: {0}")]
    Config(#[from] PtError),
}

pub type SimResult<T> = Result<T, SimError>;
