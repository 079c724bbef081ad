use core::convert::Infallible;

use derive_more::derive::{Display, Error};

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// A background task could not be spawned (its pool is already in use).
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    #[cfg(not(feature = "host"))]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// A value outside `0..=9` was offered as a [`Digit`](crate::glyph::Digit).
    #[display("digit {_0} is outside 0..=9")]
    DigitOutOfRange(#[error(not(source))] u8),

    /// The status LED line could not be driven.
    #[display("Error setting status output state")]
    StatusOutput,
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::StatusOutput
    }
}

#[cfg(not(feature = "host"))]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
