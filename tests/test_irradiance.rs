use std::sync::LazyLock;

use solar_irradiance::geometry::{elevation, zenith};
use solar_irradiance::irradiance::*;
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

static LAKEWOOD: LazyLock<Location> =
    LazyLock::new(|| Location::new(47.1718, -122.5185, 0.079).unwrap());

fn day(n: i64) -> DayOfYear {
    DayOfYear::new(n)
}

// ── AirMass ──

#[test]
fn test_air_mass_equinox_noon() {
    let am = air_mass(720, day(79), &LAKEWOOD);
    assert_eq!(am as i32, 1);
    assert_approx!(am, 1.493, 0.005);
}

#[test]
fn test_air_mass_summer_morning() {
    assert_approx!(air_mass(465, day(179), &LAKEWOOD), 1.785, 0.005);
}

#[test]
fn test_air_mass_grows_toward_horizon() {
    let noon = air_mass(720, day(171), &LAKEWOOD);
    let afternoon = air_mass(960, day(171), &LAKEWOOD);
    let evening = air_mass(1140, day(171), &LAKEWOOD);
    assert!(noon < afternoon && afternoon < evening);
}

#[test]
fn test_air_mass_zero_past_zenith_limit() {
    for n in (0..365).step_by(5) {
        for minutes in (0..1440).step_by(10) {
            let d = day(n);
            let z = zenith(minutes, d, &LAKEWOOD).to_degrees().value();
            let am = air_mass(minutes, d, &LAKEWOOD);
            if z > AIR_MASS_ZENITH_LIMIT {
                assert_eq!(am, 0.0, "day {} minute {} zenith {}", n, minutes, z);
            } else {
                assert!(am > 0.0, "day {} minute {} zenith {}", n, minutes, z);
            }
        }
    }
}

// ── DirectIntensity / GlobalIntensity ──

#[test]
fn test_intensity_zero_at_midnight() {
    assert_eq!(direct_intensity(0, day(0), &LAKEWOOD), 0.0);
    assert_eq!(global_intensity(0, day(171), &LAKEWOOD), 0.0);
}

#[test]
fn test_global_is_ten_percent_above_direct() {
    let direct = direct_intensity(720, day(171), &LAKEWOOD);
    let global = global_intensity(720, day(171), &LAKEWOOD);
    assert_approx!(global, 1.1 * direct, 1e-12);
    assert_approx!(global, 1.0244, 0.001);
}

#[test]
fn test_direct_intensity_below_solar_constant_at_sea_level() {
    let sea = Location::new(0.0, 0.0, 0.0).unwrap();
    for minutes in (0..1440).step_by(15) {
        let i = direct_intensity(minutes, day(79), &sea);
        assert!((0.0..SOLAR_CONSTANT).contains(&i), "minute {}: {}", minutes, i);
    }
}

#[test]
fn test_altitude_boosts_intensity() {
    let sea = Location::new(47.17, -122.5, 0.0).unwrap();
    let mountain = Location::new(47.17, -122.5, 2.0).unwrap();
    let low = global_intensity(720, day(171), &sea);
    let high = global_intensity(720, day(171), &mountain);
    assert_approx!(low, 1.0193, 0.001);
    assert_approx!(high, 1.1506, 0.001);
}

// ── ModulePower ──

#[test]
fn test_module_power_summer_noon() {
    let p = module_power(720, day(171), &LAKEWOOD);
    assert_eq!(p as i32, 1);
    assert_approx!(p, 1.0267, 0.001);
}

#[test]
fn test_module_power_tilt_helps_in_winter() {
    let p = module_power(720, day(0), &LAKEWOOD);
    let g = global_intensity(720, day(0), &LAKEWOOD);
    assert!(p > g, "module={} global={}", p, g);
}

#[test]
fn test_module_power_zero_when_sun_down() {
    for minutes in (0..1440).step_by(5) {
        if elevation(minutes, day(0), &LAKEWOOD).value() <= 0.0 {
            assert_eq!(module_power(minutes, day(0), &LAKEWOOD), 0.0);
        }
    }
}

#[test]
fn test_module_power_never_negative() {
    let sydney = Location::new(-33.9, 151.2, 0.05).unwrap();
    for site in [&*LAKEWOOD, &sydney] {
        for n in (0..365).step_by(10) {
            for minutes in (0..1440).step_by(7) {
                assert!(module_power(minutes, day(n), site) >= 0.0);
            }
        }
    }
}

#[test]
fn test_module_power_faces_equator_in_south() {
    let sydney = Location::new(-33.9, 151.2, 0.05).unwrap();
    let el = elevation(720, day(171), &sydney);
    let g = global_intensity(720, day(171), &sydney);
    let tilt = sydney.latitude.abs().to_radians();
    let p = module_power(720, day(171), &sydney);
    assert_approx!(p, g * (el + tilt).sin() / el.sin(), 1e-12);
    assert_approx!(p, 1.4805, 0.001);
    assert!(p > g, "module={} global={}", p, g);

    let mirror = Location::new(33.9, 151.2, 0.05).unwrap();
    assert_approx!(module_power(720, day(356), &mirror), p, 0.001);
}
