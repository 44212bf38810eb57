use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::angles::Degrees;
use crate::error::{Result, SolarError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Degrees,
    /// East-positive.
    pub longitude: Degrees,
    /// Kilometers above sea level.
    pub altitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, altitude_km: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::InvalidLatitude { value: latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::InvalidLongitude { value: longitude });
        }
        if !altitude_km.is_finite() || altitude_km < 0.0 {
            return Err(SolarError::InvalidAltitude { value: altitude_km });
        }
        Ok(Self {
            latitude: Degrees(latitude),
            longitude: Degrees(longitude),
            altitude: altitude_km,
            city: None,
            region: None,
        })
    }

    pub fn with_labels(mut self, city: impl Into<String>, region: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.region = Some(region.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        Self::new(self.latitude.0, self.longitude.0, self.altitude).map(|_| ())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude.0 >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude.0 >= 0.0 { 'E' } else { 'W' };
        if let (Some(city), Some(region)) = (&self.city, &self.region) {
            write!(f, "{}, {} ", city, region)?;
        }
        write!(
            f,
            "({:.4}°{}, {:.4}°{}, {:.3} km)",
            self.latitude.0.abs(),
            ns,
            self.longitude.0.abs(),
            ew,
            self.altitude
        )
    }
}

/// Zero-based day of the year, 0 = January 1. Values outside [0, 365) wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct DayOfYear(u16);

impl DayOfYear {
    pub fn new(day: i64) -> Self {
        DayOfYear(day.rem_euclid(365) as u16)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.ordinal0() as i64)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn to_month_day(self, year: i32) -> Option<(u32, u32)> {
        let date = NaiveDate::from_yo_opt(year, self.0 as u32 + 1)?;
        Some((date.month(), date.day()))
    }

    pub fn all() -> impl Iterator<Item = DayOfYear> {
        (0..365).map(DayOfYear)
    }
}

impl From<i64> for DayOfYear {
    fn from(day: i64) -> Self {
        Self::new(day)
    }
}

impl From<DayOfYear> for i64 {
    fn from(day: DayOfYear) -> Self {
        day.0 as i64
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    PolarDay,
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::PolarDay => f.write_str("polar day"),
            PolarCondition::PolarNight => f.write_str("polar night"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: DayOfYear,
    pub local_minutes: i32,
    pub declination: Degrees,
    pub equation_of_time: f64,
    pub local_solar_time: f64,
    pub hour_angle: Degrees,
    pub elevation: Degrees,
    pub zenith: Degrees,
    pub azimuth: Degrees,
    pub air_mass: f64,
    pub direct_intensity: f64,
    pub global_intensity: f64,
    pub module_power: f64,
}

/// Sunrise and sunset in local solar minutes past midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseSunset {
    pub sunrise: f64,
    pub sunset: f64,
}

impl SunriseSunset {
    pub fn duration(&self) -> f64 {
        self.sunset - self.sunrise
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IrradianceEntry {
    /// Local clock minutes past midnight.
    pub minutes: i32,
    pub elevation: Degrees,
    pub azimuth: Degrees,
    pub global_intensity: f64,
    pub module_power: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayData {
    pub day_of_year: DayOfYear,
    /// Local solar time; `None` on polar days and nights.
    pub sunrise_minutes: Option<f64>,
    pub sunset_minutes: Option<f64>,
    pub peak_solar_hours: f64,
    pub entries: Vec<IrradianceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableMetadata {
    pub generated_at: String,
    pub total_entries: usize,
    pub annual_peak_solar_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualTable {
    pub config: crate::config::TableConfig,
    pub days: Vec<DayData>,
    pub metadata: TableMetadata,
}
