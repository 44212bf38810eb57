use chrono::{SecondsFormat, Utc};
use tracing::{debug, trace};

use crate::angles::Degrees;
use crate::config::TableConfig;
use crate::daily::{peak_solar_hours, sunrise_sunset};
use crate::error::SolarError;
use crate::geometry::{azimuth, elevation};
use crate::irradiance::{global_intensity, module_power};
use crate::time_correction::{solar_to_clock_minutes, MINUTES_PER_DAY};
use crate::types::{
    AnnualTable, DayData, DayOfYear, IrradianceEntry, Location, PolarCondition, TableMetadata,
};

pub fn minutes_to_hour_minute(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn hour_minute_to_minutes(time: (i32, i32)) -> i32 {
    time.0 * 60 + time.1
}

pub fn interpolate_angle(a1: Degrees, a2: Degrees, fraction: f64) -> Degrees {
    let diff = a2.value() - a1.value();
    let adjusted_diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    Degrees((a1.value() + adjusted_diff * fraction).rem_euclid(360.0))
}

fn interpolate_linear(a: f64, b: f64, fraction: f64) -> f64 {
    a + fraction * (b - a)
}

fn sample(minutes: i32, day: DayOfYear, location: &Location) -> IrradianceEntry {
    IrradianceEntry {
        minutes,
        elevation: elevation(minutes, day, location).to_degrees(),
        azimuth: azimuth(minutes, day, location).to_degrees(),
        global_intensity: global_intensity(minutes, day, location),
        module_power: module_power(minutes, day, location),
    }
}

fn generate_day(config: &TableConfig, day: DayOfYear) -> DayData {
    let location = &config.location;
    let interval = config.interval_minutes;
    let psh = peak_solar_hours(day, location);

    let (sunrise, sunset, first, last) = match sunrise_sunset(day, location) {
        Ok(ss) => {
            // Samples are keyed by clock minutes, sunrise and sunset by solar time.
            let rise = solar_to_clock_minutes(ss.sunrise, day, location).max(0.0);
            let set = solar_to_clock_minutes(ss.sunset, day, location);
            let first = (rise / interval as f64).ceil() as i32 * interval;
            let last = (set / interval as f64).floor() as i32 * interval;
            (Some(ss.sunrise), Some(ss.sunset), first, last.min(MINUTES_PER_DAY - 1))
        }
        // Polar day gets the full day, polar night an empty range.
        Err(SolarError::DegeneratePolarCondition {
            condition: PolarCondition::PolarDay,
            ..
        }) => (None, None, 0, MINUTES_PER_DAY - 1),
        Err(_) => (None, None, 0, -1),
    };

    let entries: Vec<IrradianceEntry> = (first..=last)
        .step_by(interval as usize)
        .map(|minutes| sample(minutes, day, location))
        .collect();
    trace!(day = day.get(), entries = entries.len(), psh, "generated day");

    DayData {
        day_of_year: day,
        sunrise_minutes: sunrise,
        sunset_minutes: sunset,
        peak_solar_hours: psh,
        entries,
    }
}

pub fn generate_annual_table(config: &TableConfig) -> AnnualTable {
    let days: Vec<DayData> = DayOfYear::all().map(|day| generate_day(config, day)).collect();

    let total_entries: usize = days.iter().map(|d| d.entries.len()).sum();
    let annual_peak_solar_hours: f64 = days.iter().map(|d| d.peak_solar_hours).sum();
    debug!(
        location = %config.location,
        total_entries,
        annual_peak_solar_hours,
        "generated annual irradiance table"
    );

    AnnualTable {
        config: config.clone(),
        days,
        metadata: TableMetadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            total_entries,
            annual_peak_solar_hours,
        },
    }
}

pub fn lookup_irradiance(table: &AnnualTable, day: DayOfYear, minutes: i32) -> Option<IrradianceEntry> {
    let entries = &table.days.get(day.get() as usize)?.entries;
    let first = entries.first()?;
    let last = entries.last()?;
    if minutes < first.minutes || minutes > last.minutes {
        return None;
    }

    let interval = table.config.interval_minutes;
    let idx = (((minutes - first.minutes) / interval) as usize).min(entries.len() - 1);
    let before = &entries[idx];
    let after = match entries.get(idx + 1) {
        Some(after) if minutes != before.minutes => after,
        _ => return Some(IrradianceEntry { minutes, ..*before }),
    };

    let fraction = (minutes - before.minutes) as f64 / (after.minutes - before.minutes) as f64;
    Some(IrradianceEntry {
        minutes,
        elevation: Degrees(interpolate_linear(
            before.elevation.value(),
            after.elevation.value(),
            fraction,
        )),
        azimuth: interpolate_angle(before.azimuth, after.azimuth, fraction),
        global_intensity: interpolate_linear(before.global_intensity, after.global_intensity, fraction),
        module_power: interpolate_linear(before.module_power, after.module_power, fraction),
    })
}

pub fn monthly_peak_solar_hours(table: &AnnualTable) -> [f64; 12] {
    let mut sums = [0.0; 12];
    let mut counts = [0u32; 12];
    for day in &table.days {
        if let Some((month, _)) = day.day_of_year.to_month_day(table.config.year) {
            let idx = (month - 1) as usize;
            sums[idx] += day.peak_solar_hours;
            counts[idx] += 1;
        }
    }

    let mut means = [0.0; 12];
    for (i, mean) in means.iter_mut().enumerate() {
        if counts[i] > 0 {
            *mean = sums[i] / counts[i] as f64;
        }
    }
    means
}
