use tracing::debug;

use crate::angles::Radians;
use crate::error::{Result, SolarError};
use crate::geometry::declination;
use crate::irradiance::global_intensity;
use crate::time_correction::{MINUTES_PER_DAY, MINUTES_PER_DEGREE, SOLAR_NOON_MINUTES};
use crate::types::{DayOfYear, Location, PolarCondition, SunriseSunset};

fn horizon_hour_angle(day: DayOfYear, location: &Location) -> Result<Radians> {
    let lat = location.latitude.to_radians();
    let cos_h = -lat.tan() * declination(day).tan();
    if cos_h > 1.0 {
        return Err(polar_error(day, location, PolarCondition::PolarNight));
    }
    if cos_h < -1.0 {
        return Err(polar_error(day, location, PolarCondition::PolarDay));
    }
    Ok(Radians::acos(cos_h))
}

fn polar_error(day: DayOfYear, location: &Location, condition: PolarCondition) -> SolarError {
    SolarError::DegeneratePolarCondition {
        day: day.get(),
        latitude: location.latitude.value(),
        condition,
    }
}

fn half_day_minutes(day: DayOfYear, location: &Location) -> Result<f64> {
    let h = horizon_hour_angle(day, location)?;
    Ok(MINUTES_PER_DEGREE * h.to_degrees().value())
}

/// Sunrise in local solar minutes past midnight. Subtract the time correction
/// factor (see [`crate::solar_to_clock_minutes`]) for clock time.
pub fn sunrise(day: DayOfYear, location: &Location) -> Result<f64> {
    Ok(SOLAR_NOON_MINUTES - half_day_minutes(day, location)?)
}

pub fn sunset(day: DayOfYear, location: &Location) -> Result<f64> {
    Ok(SOLAR_NOON_MINUTES + half_day_minutes(day, location)?)
}

pub fn sunrise_sunset(day: DayOfYear, location: &Location) -> Result<SunriseSunset> {
    let half = half_day_minutes(day, location)?;
    Ok(SunriseSunset {
        sunrise: SOLAR_NOON_MINUTES - half,
        sunset: SOLAR_NOON_MINUTES + half,
    })
}

pub fn sun_time(day: DayOfYear, location: &Location) -> Result<f64> {
    Ok(sunrise_sunset(day, location)?.duration())
}

pub fn peak_solar_hours(day: DayOfYear, location: &Location) -> f64 {
    let (start, steps) = match sunrise_sunset(day, location) {
        Ok(ss) => (ss.sunrise as i32, ss.duration() as i32),
        Err(SolarError::DegeneratePolarCondition {
            condition: PolarCondition::PolarDay,
            ..
        }) => (0, MINUTES_PER_DAY),
        Err(_) => {
            debug!(day = day.get(), "polar night, no sunlit window");
            return 0.0;
        }
    };

    let sum: f64 = (start..start + steps)
        .map(|minute| global_intensity(minute, day, location))
        .sum();
    let psh = sum / 60.0;
    debug!(day = day.get(), start, steps, psh, "integrated peak solar hours");
    psh
}
