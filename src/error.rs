use thiserror::Error;

use crate::types::PolarCondition;

pub type Result<T> = std::result::Result<T, SolarError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("invalid altitude {value} km (must be a non-negative distance above sea level)")]
    InvalidAltitude { value: f64 },

    #[error("no sunrise or sunset on day {day} at latitude {latitude}°: {condition}")]
    DegeneratePolarCondition {
        day: u16,
        latitude: f64,
        condition: PolarCondition,
    },
}
