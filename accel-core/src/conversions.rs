//! Scalar conversion factors between unit representations.
//!
//! Each constant is a ratio: multiplying a value in the source unit by the
//! factor yields the value in the target unit. Factors are preferred over
//! conversion functions so callers can apply them to scalars or to any
//! array type that supports scalar multiplication. Every `A_TO_B` with an
//! inverse counterpart satisfies `A_TO_B * B_TO_A == 1` to within
//! floating-point rounding.

use crate::constants::{METER, PI};
use crate::units::{ELECTRON_VOLT, EV, GEV, JOULE, MILLIMETER, MRAD, PASCAL, RAD};

pub const RADIAN_TO_DEGREE: f64 = 180.0 / PI;
pub const DEGREE_TO_RADIAN: f64 = PI / 180.0;

pub const RAD_TO_MRAD: f64 = RAD / MRAD;
pub const MRAD_TO_RAD: f64 = 1.0 / RAD_TO_MRAD;

pub const METER_TO_MM: f64 = METER / MILLIMETER;
pub const MM_TO_METER: f64 = 1.0 / METER_TO_MM;

pub const JOULE_TO_EV: f64 = JOULE / ELECTRON_VOLT;
pub const EV_TO_JOULE: f64 = 1.0 / JOULE_TO_EV;

pub const EV_TO_GEV: f64 = EV / GEV;
pub const GEV_TO_EV: f64 = 1.0 / EV_TO_GEV;

pub const JOULE_TO_GEV: f64 = JOULE_TO_EV * EV_TO_GEV;

pub const PASCAL_TO_BAR: f64 = PASCAL * 1.0e-5;
