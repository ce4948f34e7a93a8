//! SI base units and physical constants for accelerator calculations.
//!
//! Base units come first and are all 1.0, fixing SI as the working scale.
//! Physical constants follow in three classes: exact by definition (2019 SI
//! redefinition), measured (each with its source and retrieval date), and
//! derived (const arithmetic over the previous two classes). Derived
//! constants are declared in dependency order; later ones reference earlier
//! ones directly.

// SI base units
// Reference: BIPM SI Brochure, 9th edition (2019)

/// Length scale. 1.0 fixes the meter as the working unit.
pub const METER: f64 = 1.0;

/// Mass scale (kilogram).
pub const KILOGRAM: f64 = 1.0;

/// Time scale (second).
pub const SECOND: f64 = 1.0;

/// Electric current scale (ampere).
pub const AMPERE: f64 = 1.0;

/// Thermodynamic temperature scale (kelvin).
pub const KELVIN: f64 = 1.0;

/// Amount of substance scale (mole).
pub const MOLE: f64 = 1.0;

/// Luminous intensity scale (candela).
pub const CANDELA: f64 = 1.0;

// Mathematical constants

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const SQRT_3: f64 = 1.7320508075688772935274463;

// Auxiliary compound units used by the constant definitions below. The
// public unit set lives in crate::units, which itself depends on this module.
const VOLT: f64 = (KILOGRAM * METER * METER) / (AMPERE * SECOND * SECOND * SECOND);
const COULOMB: f64 = SECOND * AMPERE;
const JOULE: f64 = KILOGRAM * METER * METER / (SECOND * SECOND);

// Physical constants, exact by definition
// Reference: 2019 redefinition of the SI base units (CGPM, 26th meeting)

/// Speed of light in vacuum [m/s]. Exact.
pub const LIGHT_SPEED: f64 = 299_792_458.0 * (METER / SECOND);

/// Molar gas constant [J/(mol·K)]. Exact since the 2019 redefinition
/// (product of the Boltzmann and Avogadro constants).
pub const GAS_CONSTANT: f64 = 8.314_462_618 * (JOULE / MOLE / KELVIN);

/// Boltzmann constant [J/K]. Exact.
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23 * (JOULE / KELVIN);

/// Avogadro constant [1/mol]. Exact.
pub const AVOGADRO_CONSTANT: f64 = 6.022_140_76e23 * (1.0 / MOLE);

/// Elementary charge [C]. Exact.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19 * COULOMB;

/// Reduced Planck constant h/2π [J·s]. h is exact; the division by 2π makes
/// this value a rounded literal rather than a const expression, following
/// the CODATA-listed value.
pub const REDUCED_PLANCK_CONSTANT: f64 = 1.054_571_817e-34 * (JOULE * SECOND);

// Physical constants, measured

/// Electron mass [kg].
///
/// CODATA 2018 recommended value.
/// Retrieved 2022-03-19 from
/// <https://physics.nist.gov/cgi-bin/cuu/Value?me>
pub const ELECTRON_MASS: f64 = 9.109_383_7015e-31 * KILOGRAM;

/// Vacuum magnetic permeability μ₀ [V·s/(A·m)].
///
/// No longer exact since the 2019 SI redefinition; CODATA 2018 value.
/// Retrieved 2022-03-19 from
/// <https://physics.nist.gov/cgi-bin/cuu/Value?mu0>
pub const VACUUM_PERMEABILITY: f64 = 1.256_637_062_12e-6 * (VOLT * SECOND / AMPERE / METER);

// Physical constants, derived

/// Electron rest energy m·c² [J].
pub const ELECTRON_REST_ENERGY: f64 = ELECTRON_MASS * LIGHT_SPEED * LIGHT_SPEED;

/// Vacuum electric permittivity ε₀ = 1/(μ₀c²) [A·s/(V·m)].
pub const VACUUM_PERMITTIVITY: f64 = 1.0 / (VACUUM_PERMEABILITY * LIGHT_SPEED * LIGHT_SPEED);

/// Impedance of free space Z₀ = μ₀c [Ω].
pub const VACUUM_IMPEDANCE: f64 = VACUUM_PERMEABILITY * LIGHT_SPEED;

/// Classical electron radius r_e = e²/(4πε₀·m c²) [m].
pub const ELECTRON_RADIUS: f64 =
    ELEMENTARY_CHARGE * ELEMENTARY_CHARGE / (4.0 * PI * VACUUM_PERMITTIVITY * ELECTRON_REST_ENERGY);

// Electron rest energy expressed in GeV, used by the radiation constants.
const REST_ENERGY_GEV: f64 = ELECTRON_REST_ENERGY / ELEMENTARY_CHARGE / 1.0e9;

/// Synchrotron radiation constant C_γ = (4π/3)·r_e/(m c²)³ [m/GeV³].
///
/// Appears in the energy loss per turn, U₀ = C_γ E⁴ I₂ / 2π.
/// Reference: Sands, "The Physics of Electron Storage Rings" (SLAC-121).
pub const RAD_CGAMMA: f64 =
    4.0 * PI * ELECTRON_RADIUS / (REST_ENERGY_GEV * REST_ENERGY_GEV * REST_ENERGY_GEV) / 3.0;

/// Quantum excitation constant C_q = (55/32√3)·ħc/(m c²) [m].
///
/// Sets the equilibrium emittance and energy spread of an electron beam.
pub const CQ: f64 = (55.0 / (32.0 * SQRT_3)) * REDUCED_PLANCK_CONSTANT * LIGHT_SPEED
    / ELECTRON_REST_ENERGY;

/// Radiation damping constant C_α = r_e·c/3(m c²)³ [m²/(s·GeV³)].
pub const CA: f64 = ELECTRON_RADIUS * LIGHT_SPEED
    / (3.0 * (REST_ENERGY_GEV * REST_ENERGY_GEV * REST_ENERGY_GEV));
