use std::sync::LazyLock;

use solar_irradiance::angles::*;
use solar_irradiance::time_correction::*;
use solar_irradiance::types::{DayOfYear, Location};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

static LAKEWOOD: LazyLock<Location> = LazyLock::new(|| {
    Location::new(47.1718, -122.5185, 0.079)
        .unwrap()
        .with_labels("Lakewood", "WA")
});

fn day(n: i64) -> DayOfYear {
    DayOfYear::new(n)
}

// ── DegRad ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, 270.0, 360.0, -45.0, -180.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
        assert_approx!(Degrees(deg).to_radians().to_degrees().value(), deg, 1e-10);
    }
}

#[test]
fn test_known_conversions() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-10);
    assert_approx!(Degrees(90.0).to_radians().value(), std::f64::consts::FRAC_PI_2, 1e-10);
    assert_approx!(Radians(std::f64::consts::PI).to_degrees().value(), 180.0, 1e-10);
    assert_approx!(CIRCLE, 2.0 * std::f64::consts::PI, 1e-15);
    assert_eq!(DAYS_PER_YEAR, 365.0);
}

#[test]
fn test_angle_arithmetic_keeps_units() {
    let sum = Degrees(30.0) + Degrees(15.0);
    assert_eq!(sum, Degrees(45.0));
    let diff = Radians(1.0) - Radians(0.25);
    assert_eq!(diff, Radians(0.75));
    assert_eq!(-Degrees(10.0), Degrees(-10.0));
    assert_eq!(Degrees(2.0) * 3.0, Degrees(6.0));
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (810.0, 90.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(Degrees(input)).value(), expected, 1e-9);
    }
}

// ── DayOfYear ──

#[test]
fn test_day_of_year_from_date() {
    let jan1 = chrono::NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let jun21 = chrono::NaiveDate::from_ymd_opt(2026, 6, 21).unwrap();
    let leap_end = chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert_eq!(DayOfYear::from_date(jan1).get(), 0);
    assert_eq!(DayOfYear::from_date(jun21).get(), 171);
    assert_eq!(DayOfYear::from_date(leap_end).get(), 0);
}

#[test]
fn test_day_of_year_month_day() {
    assert_eq!(day(0).to_month_day(2026), Some((1, 1)));
    assert_eq!(day(171).to_month_day(2026), Some((6, 21)));
    assert_eq!(day(364).to_month_day(2026), Some((12, 31)));
    assert_eq!(day(59).to_month_day(2024), Some((2, 29)));
}

#[test]
fn test_day_of_year_normalizes() {
    assert_eq!(day(365), day(0));
    assert_eq!(day(-365 + 79), day(79));
    assert_eq!(DayOfYear::all().count(), 365);
}

// ── EquationOfTime ──

#[test]
fn test_equation_of_time_jan_1() {
    assert_approx!(equation_of_time(day(0)), -3.256, 0.01);
}

#[test]
fn test_equation_of_time_periodic() {
    for n in 0..365 {
        assert_eq!(equation_of_time(day(n)), equation_of_time(day(n + 365)));
    }
}

#[test]
fn test_equation_of_time_bounded() {
    for d in DayOfYear::all() {
        let eot = equation_of_time(d);
        assert!((-15.0..=17.0).contains(&eot), "Day {}: {}", d, eot);
    }
}

// ── Timezone / LSTM ──

#[test]
fn test_timezone_lakewood() {
    let tz = timezone_for(&LAKEWOOD);
    assert_eq!(tz as i32, -8);
    assert_approx!(tz, -8.168, 0.001);
}

#[test]
fn test_timezone_sign_follows_longitude() {
    let tokyo = Location::new(35.7, 139.7, 0.04).unwrap();
    assert_approx!(timezone_for(&tokyo), 139.7 / 15.0, 1e-12);
    let dateline = Location::new(0.0, -180.0, 0.0).unwrap();
    assert_approx!(timezone_for(&dateline), 12.0, 1e-12);
}

#[test]
fn test_lstm_matches_longitude() {
    let lstm = local_standard_time_meridian(timezone_for(&LAKEWOOD));
    assert_approx!(lstm.to_degrees().value(), LAKEWOOD.longitude.value(), 1e-9);
}

// ── TimeCorrectionFactor ──

#[test]
fn test_tcf_summer_solstice() {
    let tcf = time_correction_factor(day(172), &LAKEWOOD);
    assert_eq!(tcf as i32, -1);
    assert_approx!(tcf, -1.447, 0.01);
}

#[test]
fn test_local_solar_time_adds_raw_minutes() {
    let tcf = time_correction_factor(day(0), &LAKEWOOD);
    assert_approx!(local_solar_time(720, day(0), &LAKEWOOD), 720.0 + tcf, 1e-12);
    assert_approx!(local_solar_time(1440 + 720, day(0), &LAKEWOOD), 720.0 + tcf, 1e-12);
}

#[test]
fn test_solar_to_clock_inverts_correction() {
    let lst = local_solar_time(600, day(100), &LAKEWOOD);
    assert_approx!(solar_to_clock_minutes(lst, day(100), &LAKEWOOD), 600.0, 1e-9);
}

#[test]
fn test_tcf_same_on_both_sides_of_dateline() {
    let west = Location::new(-20.0, -180.0, 0.0).unwrap();
    let east = Location::new(-20.0, 180.0, 0.0).unwrap();
    for n in [0, 79, 171, 300] {
        let tcf = time_correction_factor(day(n), &west);
        assert_eq!(tcf, time_correction_factor(day(n), &east));
        assert_approx!(tcf, equation_of_time(day(n)), 1e-9);
    }
    assert_approx!(local_solar_time(720, day(0), &west), 720.0 - 3.26, 0.01);
}

// ── HourAngle ──

#[test]
fn test_hour_angle_near_zero_at_noon() {
    let h = hour_angle(720, day(0), &LAKEWOOD).to_degrees().value();
    assert_approx!(h, -0.814, 0.01);
}

#[test]
fn test_hour_angle_morning_negative_afternoon_positive() {
    assert!(hour_angle(0, day(0), &LAKEWOOD).value() < 0.0);
    assert!(hour_angle(800, day(0), &LAKEWOOD).value() > 0.0);
}

#[test]
fn test_hour_angle_fifteen_degrees_per_hour() {
    let h1 = hour_angle(600, day(40), &LAKEWOOD).to_degrees().value();
    let h2 = hour_angle(660, day(40), &LAKEWOOD).to_degrees().value();
    assert_approx!(h2 - h1, DEGREES_PER_HOUR, 1e-9);
}
