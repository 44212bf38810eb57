pub mod angles;
pub mod config;
pub mod daily;
pub mod error;
pub mod geometry;
pub mod irradiance;
pub mod lookup_table;
pub mod resolver;
pub mod time_correction;
pub mod types;

pub use angles::{
    day_angle, deg_to_rad, normalize_angle, rad_to_deg, Degrees, Radians, CIRCLE, DAYS_PER_YEAR,
    DEG_TO_RAD, RAD_TO_DEG,
};

pub use config::{ConfigError, TableConfig};

pub use daily::{peak_solar_hours, sun_time, sunrise, sunrise_sunset, sunset};

pub use error::{Result, SolarError};

pub use geometry::{azimuth, declination, elevation, solar_position, zenith, EARTH_AXIAL_TILT};

pub use irradiance::{air_mass, direct_intensity, global_intensity, module_power};

pub use lookup_table::{
    generate_annual_table, hour_minute_to_minutes, interpolate_angle, lookup_irradiance,
    minutes_to_hour_minute, monthly_peak_solar_hours,
};

pub use resolver::{Gazetteer, LocationResolver, ResolveError};

pub use time_correction::{
    equation_of_time, hour_angle, local_solar_time, local_standard_time_meridian,
    minutes_to_time, normalize_minutes, solar_to_clock_minutes, time_correction_factor,
    timezone_for, DEGREES_PER_HOUR, MINUTES_PER_DAY, MINUTES_PER_DEGREE, SOLAR_NOON_MINUTES,
};

pub use types::{
    AnnualTable, DayData, DayOfYear, IrradianceEntry, Location, PolarCondition, SolarPosition,
    SunriseSunset, TableMetadata,
};
