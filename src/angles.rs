use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;
pub const CIRCLE: f64 = 2.0 * PI;
pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl Degrees {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_radians(self) -> Radians {
        Radians(self.0 * DEG_TO_RAD)
    }

    pub fn abs(self) -> Self {
        Degrees(self.0.abs())
    }
}

impl Radians {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * RAD_TO_DEG)
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    pub fn asin(x: f64) -> Self {
        Radians(x.asin())
    }

    pub fn acos(x: f64) -> Self {
        Radians(x.acos())
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}

macro_rules! angle_ops {
    ($t:ident) => {
        impl Add for $t {
            type Output = $t;
            fn add(self, rhs: $t) -> $t {
                $t(self.0 + rhs.0)
            }
        }

        impl Sub for $t {
            type Output = $t;
            fn sub(self, rhs: $t) -> $t {
                $t(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $t {
            type Output = $t;
            fn mul(self, rhs: f64) -> $t {
                $t(self.0 * rhs)
            }
        }

        impl Neg for $t {
            type Output = $t;
            fn neg(self) -> $t {
                $t(-self.0)
            }
        }
    };
}

angle_ops!(Degrees);
angle_ops!(Radians);

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.0),
            None => write!(f, "{}°", self.0),
        }
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} rad", p, self.0),
            None => write!(f, "{} rad", self.0),
        }
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

pub fn normalize_angle(angle: Degrees) -> Degrees {
    Degrees(angle.0.rem_euclid(360.0))
}

pub fn day_angle(day: i64) -> Radians {
    Radians((CIRCLE / DAYS_PER_YEAR) * (day as f64 - 81.0))
}
