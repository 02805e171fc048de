//! Crate-wide error and result types.

use derive_more::{Display, Error, From};

/// Errors surfaced by device construction and binding.
///
/// The mapping operations themselves are fail-soft and never return errors:
/// the adapted [`LedControl`](crate::led_control::LedControl) contract has no
/// error channel, so out-of-range writes are logged and skipped instead.
#[derive(Debug, Display, Error, From)]
#[non_exhaustive]
pub enum Error {
    /// A background task could not be spawned.
    #[display("task spawn failed: {_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// `setup` was called after the zone outputs were already bound.
    ///
    /// Rebinding zones at runtime is unsupported; construct a new adapter
    /// instead.
    #[display("periscope zone outputs already bound")]
    AlreadyBound,
}

/// Result type alias using the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
