use crate::geometry::{elevation, zenith};
use crate::types::{DayOfYear, Location};

pub const SOLAR_CONSTANT: f64 = 1.353;
pub const ATMOSPHERIC_TRANSMITTANCE: f64 = 0.7;
pub const ALTITUDE_CORRECTION_PER_KM: f64 = 0.14;
pub const DIFFUSE_FACTOR: f64 = 1.1;
/// Zenith angle, in degrees, past which the Kasten-Young fit is undefined.
pub const AIR_MASS_ZENITH_LIMIT: f64 = 96.07995;

/// Kasten-Young air mass. The power term takes the zenith margin in degrees, the cosine radians.
pub fn air_mass(local_minutes: i32, day: DayOfYear, location: &Location) -> f64 {
    let z = zenith(local_minutes, day, location);
    let x = AIR_MASS_ZENITH_LIMIT - z.to_degrees().value();
    if x < 0.0 {
        return 0.0;
    }
    let denominator = z.cos() + 0.50572 * x.powf(-1.6364);
    if denominator <= 0.0 {
        return 0.0;
    }
    1.0 / denominator
}

pub fn direct_intensity(local_minutes: i32, day: DayOfYear, location: &Location) -> f64 {
    let am = air_mass(local_minutes, day, location);
    if am <= 0.0 {
        return 0.0;
    }
    let alt = ALTITUDE_CORRECTION_PER_KM * location.altitude;
    SOLAR_CONSTANT * ((1.0 - alt) * ATMOSPHERIC_TRANSMITTANCE.powf(am.powf(0.678)) + alt)
}

pub fn global_intensity(local_minutes: i32, day: DayOfYear, location: &Location) -> f64 {
    DIFFUSE_FACTOR * direct_intensity(local_minutes, day, location)
}

/// Module tilted at |latitude| facing the equator, so southern sites mirror northern ones.
pub fn module_power(local_minutes: i32, day: DayOfYear, location: &Location) -> f64 {
    let el = elevation(local_minutes, day, location);
    if el.value() <= 0.0 {
        return 0.0;
    }
    let tilt = location.latitude.abs().to_radians();
    let power = global_intensity(local_minutes, day, location) * (el + tilt).sin() / el.sin();
    power.max(0.0)
}
