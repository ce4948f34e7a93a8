//! Numeric foundation for accelerator-physics calculations.
//!
//! `accel-core` is a registry of named scalar values: SI base units, physical
//! constants, derived units, and conversion factors. Everything is a
//! `pub const f64` evaluated at compile time, so the registry has no
//! initialization step, no interior mutability, and is trivially safe to read
//! from any number of threads.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | SI base units and physical constants (exact, measured, derived) |
//! | [`units`] | Compound SI units, metric prefixes, time and energy units |
//! | [`conversions`] | Scalar conversion factors between unit representations |
//!
//! # Evaluation Order
//!
//! The registry is a four-tier dependency chain: base units feed the physical
//! constants, both feed the derived units, and all three feed the conversion
//! factors. Each tier is expressed as const arithmetic over the tiers before
//! it, so the chain is visible in the source and enforced by the compiler.
//!
//! # Conversions Are Factors, Not Functions
//!
//! Unit conversions are exposed as ratios to multiply by, never as functions:
//!
//! ```
//! use accel_core::conversions::RADIAN_TO_DEGREE;
//!
//! let angle_rad = 0.25;
//! let angle_deg = angle_rad * RADIAN_TO_DEGREE;
//! assert!((angle_deg - 14.32394487827058).abs() < 1e-12);
//! ```
//!
//! A factor composes with scalars and with any array or vector type that
//! supports multiplication by a scalar, without this crate having to know
//! about the container.

pub mod constants;
pub mod conversions;
pub mod units;

pub mod test_helpers;
