//! Derived SI units, metric prefixes, and time/energy units.
//!
//! Every compound unit is a product or quotient of the base units in
//! [`crate::constants`], so all of them evaluate to 1.0 at SI scale; the
//! compositions are kept explicit so each unit's dimensional makeup is
//! readable at the declaration. The prefix and time constants are plain
//! scale factors.

use crate::constants::{AMPERE, ELEMENTARY_CHARGE, KILOGRAM, METER, SECOND};

// Compound SI units

/// Force: kg·m/s².
pub const NEWTON: f64 = KILOGRAM * METER / (SECOND * SECOND);

/// Electric charge: A·s.
pub const COULOMB: f64 = SECOND * AMPERE;

/// Energy: N·m.
pub const JOULE: f64 = NEWTON * METER;

/// Power: J/s.
pub const WATT: f64 = JOULE / SECOND;

/// Electric potential: W/A.
pub const VOLT: f64 = WATT / AMPERE;

/// Magnetic flux: V·s.
pub const WEBER: f64 = VOLT * SECOND;

/// Magnetic flux density: Wb/m².
pub const TESLA: f64 = WEBER / (METER * METER);

/// Pressure: kg/(m·s²).
pub const PASCAL: f64 = KILOGRAM / (METER * SECOND * SECOND);

/// Plane angle, dimensionless.
pub const RADIAN: f64 = METER / METER;

// Metric prefixes

pub const MILLIAMPERE: f64 = 1e-3;
pub const MICROAMPERE: f64 = 1e-6;

pub const KILOMETER: f64 = 1e3;
pub const CENTIMETER: f64 = 1e-2;
pub const MILLIMETER: f64 = 1e-3;
pub const MICROMETER: f64 = 1e-6;
pub const NANOMETER: f64 = 1e-9;

pub const RAD: f64 = 1e0;
pub const MRAD: f64 = 1e-3;
pub const URAD: f64 = 1e-6;
pub const NRAD: f64 = 1e-9;

// Time units

pub const MINUTE: f64 = 60.0 * SECOND;
pub const HOUR: f64 = 60.0 * MINUTE;
pub const DAY: f64 = 24.0 * HOUR;

/// Julian year: 365.25 days.
pub const YEAR: f64 = 365.25 * DAY;

// Energy units

/// Electron volt: the kinetic energy gained by one elementary charge
/// crossing one volt [J].
pub const ELECTRON_VOLT: f64 = ELEMENTARY_CHARGE * VOLT;

pub const EV: f64 = ELECTRON_VOLT;
pub const MEV: f64 = ELECTRON_VOLT * 1e6;
pub const GEV: f64 = ELECTRON_VOLT * 1e9;
