use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::angles::Degrees;
use crate::error::SolarError;
use crate::time_correction::MINUTES_PER_DAY;
use crate::types::Location;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("interval of {0} minutes does not evenly divide a day")]
    InvalidInterval(i32),

    #[error("invalid location: {0}")]
    InvalidLocation(#[from] SolarError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableConfig {
    pub interval_minutes: i32,
    pub location: Location,
    pub year: i32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 5,
            location: Location {
                latitude: Degrees(47.1718),
                longitude: Degrees(-122.5185),
                altitude: 0.079,
                city: Some("Lakewood".to_string()),
                region: Some("WA".to_string()),
            },
            year: 2026,
        }
    }
}

// Deserializes through a helper so the interval and the location are validated
// before a config value exists.
impl<'de> Deserialize<'de> for TableConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            interval_minutes: Option<i32>,
            location: Option<Location>,
            year: Option<i32>,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;
        let defaults = TableConfig::default();

        let interval_minutes = helper.interval_minutes.unwrap_or(defaults.interval_minutes);
        validate_interval(interval_minutes).map_err(D::Error::custom)?;

        let location = helper.location.unwrap_or(defaults.location);
        location
            .validate()
            .map_err(|e| D::Error::custom(ConfigError::InvalidLocation(e)))?;

        Ok(TableConfig {
            interval_minutes,
            location,
            year: helper.year.unwrap_or(defaults.year),
        })
    }
}

fn validate_interval(interval_minutes: i32) -> Result<(), ConfigError> {
    if interval_minutes <= 0 || MINUTES_PER_DAY % interval_minutes != 0 {
        return Err(ConfigError::InvalidInterval(interval_minutes));
    }
    Ok(())
}

impl TableConfig {
    pub fn new(location: Location, interval_minutes: i32, year: i32) -> Result<Self, ConfigError> {
        validate_interval(interval_minutes)?;
        location.validate()?;
        Ok(Self {
            interval_minutes,
            location,
            year,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn intervals_per_day(&self) -> i32 {
        MINUTES_PER_DAY / self.interval_minutes
    }
}
