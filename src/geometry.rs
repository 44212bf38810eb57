use std::f64::consts::FRAC_PI_2;

use crate::angles::{day_angle, Degrees, Radians, CIRCLE};
use crate::irradiance;
use crate::time_correction::{
    equation_of_time, hour_angle, local_solar_time, normalize_minutes, SOLAR_NOON_MINUTES,
};
use crate::types::{DayOfYear, Location, SolarPosition};

pub const EARTH_AXIAL_TILT: Degrees = Degrees(23.45);

pub fn declination(day: DayOfYear) -> Radians {
    EARTH_AXIAL_TILT.to_radians() * day_angle(day.get() as i64).sin()
}

pub fn elevation(local_minutes: i32, day: DayOfYear, location: &Location) -> Radians {
    let dec = declination(day);
    let lat = location.latitude.to_radians();
    let ha = hour_angle(local_minutes, day, location);
    let sin_el = dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos();
    Radians::asin(sin_el.clamp(-1.0, 1.0))
}

pub fn zenith(local_minutes: i32, day: DayOfYear, location: &Location) -> Radians {
    Radians(FRAC_PI_2) - elevation(local_minutes, day, location)
}

/// Compass bearing of the sun, 0 = north, clockwise. Defined as 0 when the sun
/// sits exactly at the zenith or nadir.
pub fn azimuth(local_minutes: i32, day: DayOfYear, location: &Location) -> Radians {
    let dec = declination(day);
    let lat = location.latitude.to_radians();
    let ha = hour_angle(local_minutes, day, location);
    let sin_zenith = zenith(local_minutes, day, location).sin();
    if sin_zenith.abs() < f64::EPSILON {
        return Radians(0.0);
    }

    let cos_az = (dec.sin() * lat.cos() - ha.cos() * dec.cos() * lat.sin()) / sin_zenith;
    let az = Radians::acos(cos_az.clamp(-1.0, 1.0));
    if local_solar_time(local_minutes, day, location) < SOLAR_NOON_MINUTES {
        az
    } else {
        Radians(CIRCLE) - az
    }
}

pub fn solar_position(local_minutes: i32, day: DayOfYear, location: &Location) -> SolarPosition {
    SolarPosition {
        day_of_year: day,
        local_minutes: normalize_minutes(local_minutes),
        declination: declination(day).to_degrees(),
        equation_of_time: equation_of_time(day),
        local_solar_time: local_solar_time(local_minutes, day, location),
        hour_angle: hour_angle(local_minutes, day, location).to_degrees(),
        elevation: elevation(local_minutes, day, location).to_degrees(),
        zenith: zenith(local_minutes, day, location).to_degrees(),
        azimuth: azimuth(local_minutes, day, location).to_degrees(),
        air_mass: irradiance::air_mass(local_minutes, day, location),
        direct_intensity: irradiance::direct_intensity(local_minutes, day, location),
        global_intensity: irradiance::global_intensity(local_minutes, day, location),
        module_power: irradiance::module_power(local_minutes, day, location),
    }
}
