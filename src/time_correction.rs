use chrono::NaiveTime;

use crate::angles::{day_angle, Degrees, Radians};
use crate::types::{DayOfYear, Location};

pub const MINUTES_PER_DAY: i32 = 1440;
pub const SOLAR_NOON_MINUTES: f64 = 720.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const DEGREES_PER_MINUTE: f64 = 0.25;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub fn normalize_minutes(local_minutes: i32) -> i32 {
    local_minutes.rem_euclid(MINUTES_PER_DAY)
}

pub fn local_standard_time_meridian(timezone_hours: f64) -> Radians {
    Degrees(DEGREES_PER_HOUR * timezone_hours).to_radians()
}

// Folds the dateline into (-180, 180] so both sides share one meridian.
fn normalized_longitude(location: &Location) -> Degrees {
    let lon = location.longitude.value();
    if lon <= -180.0 {
        Degrees(lon + 360.0)
    } else if lon > 180.0 {
        Degrees(lon - 360.0)
    } else {
        Degrees(lon)
    }
}

pub fn timezone_for(location: &Location) -> f64 {
    normalized_longitude(location).value() / DEGREES_PER_HOUR
}

pub fn equation_of_time(day: DayOfYear) -> f64 {
    let b = day_angle(day.get() as i64);
    let two_b = Radians(2.0 * b.value());
    9.87 * two_b.sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

pub fn time_correction_factor(day: DayOfYear, location: &Location) -> f64 {
    let lstm = local_standard_time_meridian(timezone_for(location)).to_degrees();
    MINUTES_PER_DEGREE * (normalized_longitude(location) - lstm).value() + equation_of_time(day)
}

/// Local solar time in minutes. The correction factor is already in minutes and is added as-is.
pub fn local_solar_time(local_minutes: i32, day: DayOfYear, location: &Location) -> f64 {
    normalize_minutes(local_minutes) as f64 + time_correction_factor(day, location)
}

pub fn hour_angle(local_minutes: i32, day: DayOfYear, location: &Location) -> Radians {
    let lst = local_solar_time(local_minutes, day, location);
    Degrees((lst - SOLAR_NOON_MINUTES) * DEGREES_PER_MINUTE).to_radians()
}

pub fn solar_to_clock_minutes(solar_minutes: f64, day: DayOfYear, location: &Location) -> f64 {
    solar_minutes - time_correction_factor(day, location)
}

pub fn minutes_to_time(minutes: f64) -> Option<NaiveTime> {
    if !minutes.is_finite() {
        return None;
    }
    let secs = (minutes * 60.0).round().rem_euclid(86_400.0) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
}
