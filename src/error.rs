use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StopIndexError {
    #[error("Latitude {0} is outside [-90, 90].")]
    InvalidLatitude(f64),

    #[error("Longitude {0} is outside [-180, 180].")]
    InvalidLongitude(f64),
}

pub type Result<T> = std::result::Result<T, StopIndexError>;
