use pt_core::PtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path parse error: {0}")]
    Parse(String),
}

impl From<ScheduleError> for PtError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::Io(io) => PtError::Io(io),
            ScheduleError::Parse(msg) => PtError::Parse(msg),
        }
    }
}
