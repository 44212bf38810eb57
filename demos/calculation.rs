use chrono::{Datelike, TimeZone, Timelike};
use chrono_tz::America::Los_Angeles;

use solar_irradiance::{
    minutes_to_time, peak_solar_hours, solar_position, solar_to_clock_minutes, sunrise_sunset,
    timezone_for, DayOfYear, Location,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let location = Location::new(47.1718, -122.5185, 0.079)?.with_labels("Lakewood", "WA");

    let dt = Los_Angeles
        .with_ymd_and_hms(2026, 6, 21, 12, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;
    let day = DayOfYear::from_date(dt.date_naive());
    let minutes = (dt.hour() * 60 + dt.minute()) as i32;

    let pos = solar_position(minutes, day, &location);

    println!("=== Solar Irradiance Calculation Example ===");
    println!("Location: {}", location);
    println!("Date/Time: {} (day {} of {})", dt, day, dt.year());
    println!("Nominal time zone: {:+.2} h", timezone_for(&location));
    println!();
    println!("--- Solar Position ---");
    println!("Declination: {:.2}", pos.declination);
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("Local Solar Time: {:.1} minutes", pos.local_solar_time);
    println!("Hour Angle: {:.2}", pos.hour_angle);
    println!("Elevation: {:.2}", pos.elevation);
    println!("Zenith: {:.2}", pos.zenith);
    println!("Azimuth: {:.2} (0°=N, 90°=E, 180°=S)", pos.azimuth);
    println!();
    println!("--- Irradiance ---");
    println!("Air mass: {:.3}", pos.air_mass);
    println!("Direct intensity: {:.3} kW/m²", pos.direct_intensity);
    println!("Global intensity: {:.3} kW/m²", pos.global_intensity);
    println!("Latitude-tilted module: {:.3} kW/m²", pos.module_power);
    println!();
    println!("--- Day ---");
    match sunrise_sunset(day, &location) {
        Ok(ss) => {
            let rise = solar_to_clock_minutes(ss.sunrise, day, &location);
            let set = solar_to_clock_minutes(ss.sunset, day, &location);
            if let (Some(rise), Some(set)) = (minutes_to_time(rise), minutes_to_time(set)) {
                println!("Sunrise: {} / Sunset: {} (nominal clock)", rise, set);
            }
            println!("Daylight: {:.0} minutes", ss.duration());
        }
        Err(e) => println!("{}", e),
    }
    println!("Peak solar hours: {:.2}", peak_solar_hours(day, &location));

    Ok(())
}
