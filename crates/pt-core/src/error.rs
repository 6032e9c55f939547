//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `PtError` via `From` or wrap `PtError` as one variant.  Note that nothing a
//! patroller does during a tick is an error: stalls and vetoed transitions are
//! ordinary outcomes.  Errors are reserved for setup (configuration, loading).

use thiserror::Error;

/// The top-level error type for `pt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pt-*` crates.
pub type PtResult<T> = Result<T, PtError>;
