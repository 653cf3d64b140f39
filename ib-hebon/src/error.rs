use daachorse::errors::DaachorseError;
use thiserror::Error;

use crate::combo::StateError;

/// Result type of this crate, with [`Error`] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// Misuse of [`ComboBuilder`](crate::combo::ComboBuilder).
    #[error(transparent)]
    State(#[from] StateError),

    /// The spelling variants would exceed the configured limit.
    ///
    /// See [`HebonRomanizerBuilder::max_variants()`](crate::HebonRomanizerBuilder::max_variants).
    #[error("{size} spelling variants exceed the limit of {limit}")]
    TooManyVariants { size: u64, limit: u64 },

    /// A lookup table could not be built, e.g. a syllable is empty or duplicated.
    #[error("invalid lookup table: {0}")]
    Table(DaachorseError),
}
