//! The error taxonomy used throughout this crate.

use thiserror::Error;

/// Catch-all error for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An unknown detection mode or particle generation was requested.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A resource, such as the tau decay table, could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A resource was read but its contents were not in the expected format.
    #[error("malformed data: {0}")]
    Malformed(String),

    /// A retrying propagator exceeded its maximum number of trials.
    #[error("exceeded {maxtrials} trials without a detectable interaction")]
    Overflow {
        /// The trial budget that was exhausted.
        maxtrials: u32,
    },
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
