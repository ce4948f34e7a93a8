//! Magnetic rigidity and relativistic parameters of an electron beam.
//!
//! For a beam of total energy E the solver computes the Lorentz factor
//! γ = E/E₀ (E₀ the electron rest energy), the normalized velocity
//! β = √((γ−1)(γ+1))/γ, the magnetic rigidity Bρ = βE/c, and the lab-frame
//! velocity v = βc. The factored form of β avoids the cancellation that
//! `1 − 1/γ²` suffers at ultrarelativistic energies.
//!
//! # Quick Start
//!
//! ```
//! use accel_optics::beam_rigidity;
//!
//! let (brho, beta, gamma) = beam_rigidity(3.0)?;
//! assert!((brho - 10.0069).abs() < 1e-4);
//! assert!(beta < 1.0 && gamma > 1.0);
//! # Ok::<(), accel_optics::OpticsError>(())
//! ```

use accel_core::constants::{ELECTRON_REST_ENERGY, LIGHT_SPEED};
use accel_core::conversions::JOULE_TO_GEV;
use serde::{Deserialize, Serialize};

use crate::errors::{OpticsError, OpticsResult};

/// Electron rest energy expressed in GeV.
const REST_ENERGY_GEV: f64 = ELECTRON_REST_ENERGY * JOULE_TO_GEV;

/// Relativistic parameters of an electron beam at a fixed total energy.
///
/// Construct with [`from_energy`](Self::from_energy) or
/// [`from_gamma`](Self::from_gamma); the remaining fields are derived.
/// All fields are finite and positive for any successfully constructed
/// value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeamRigidity {
    /// Magnetic rigidity Bρ [T·m].
    pub rigidity: f64,
    /// Lab-frame velocity [m/s].
    pub velocity: f64,
    /// Velocity as a fraction of the speed of light.
    pub beta: f64,
    /// Lorentz factor.
    pub gamma: f64,
    /// Total beam energy [GeV].
    pub energy: f64,
}

impl BeamRigidity {
    /// Solves the beam parameters for a total energy in GeV.
    ///
    /// # Errors
    ///
    /// Returns [`OpticsError::NotFinite`] if `energy` is NaN or infinite,
    /// and [`OpticsError::SubRestEnergy`] if it does not exceed the electron
    /// rest energy (≈0.511 MeV).
    pub fn from_energy(energy: f64) -> OpticsResult<Self> {
        if !energy.is_finite() {
            return Err(OpticsError::not_finite("energy", energy));
        }
        if energy <= REST_ENERGY_GEV {
            return Err(OpticsError::sub_rest_energy(energy, REST_ENERGY_GEV));
        }

        let gamma = energy / REST_ENERGY_GEV;
        let beta = libm::sqrt((gamma - 1.0) * (gamma + 1.0)) / gamma;
        let rigidity = beta * energy * 1.0e9 / LIGHT_SPEED;

        Ok(Self {
            rigidity,
            velocity: beta * LIGHT_SPEED,
            beta,
            gamma,
            energy,
        })
    }

    /// Solves the beam parameters for a given Lorentz factor.
    ///
    /// # Errors
    ///
    /// Returns [`OpticsError::NotFinite`] if `gamma` is NaN or infinite;
    /// a gamma at or below 1 surfaces as
    /// [`OpticsError::SubRestEnergy`] from the energy solver.
    pub fn from_gamma(gamma: f64) -> OpticsResult<Self> {
        if !gamma.is_finite() {
            return Err(OpticsError::not_finite("gamma", gamma));
        }
        Self::from_energy(gamma * REST_ENERGY_GEV)
    }
}

/// Returns `(rigidity, beta, gamma)` for an electron beam of the given total
/// energy in GeV.
///
/// Thin forwarding wrapper around [`BeamRigidity::from_energy`]; errors from
/// the solver propagate unchanged.
pub fn beam_rigidity(energy: f64) -> OpticsResult<(f64, f64, f64)> {
    let beam = BeamRigidity::from_energy(energy)?;
    Ok((beam.rigidity, beam.beta, beam.gamma))
}

#[cfg(test)]
mod tests {
    use super::*;
    use accel_core::test_helpers::assert_close;

    #[test]
    fn three_gev_reference_values() {
        let beam = BeamRigidity::from_energy(3.0).unwrap();
        assert_close(beam.rigidity, 10.006_922_710_777_506, 1e-12);
        assert_close(beam.beta, 0.999_999_985_493_337_2, 1e-12);
        assert_close(beam.gamma, 5870.853_550_721_619, 1e-12);
        assert_close(beam.velocity, 299_792_453.651_011_9, 1e-12);
        assert_eq!(beam.energy, 3.0);
    }

    #[test]
    fn booster_injection_energy() {
        let beam = BeamRigidity::from_energy(0.15).unwrap();
        assert_close(beam.rigidity, 0.500_343_239_447_732_6, 1e-12);
        assert_close(beam.gamma, 293.542_677_536_080_93, 1e-12);
    }

    #[test]
    fn helper_matches_solver() {
        let beam = BeamRigidity::from_energy(3.0).unwrap();
        let (brho, beta, gamma) = beam_rigidity(3.0).unwrap();
        assert_eq!(brho, beam.rigidity);
        assert_eq!(beta, beam.beta);
        assert_eq!(gamma, beam.gamma);
    }

    #[test]
    fn outputs_are_finite_and_positive() {
        for energy in [0.001, 0.15, 1.0, 3.0, 6.0, 120.0] {
            let beam = BeamRigidity::from_energy(energy).unwrap();
            for value in [beam.rigidity, beam.velocity, beam.beta, beam.gamma] {
                assert!(value.is_finite() && value > 0.0, "energy={}", energy);
            }
            assert!(beam.beta < 1.0);
            assert!(beam.gamma > 1.0);
        }
    }

    #[test]
    fn gamma_roundtrip_recovers_energy() {
        let beam = BeamRigidity::from_energy(3.0).unwrap();
        let again = BeamRigidity::from_gamma(beam.gamma).unwrap();
        assert_close(again.energy, 3.0, 1e-12);
        assert_close(again.rigidity, beam.rigidity, 1e-12);
    }

    #[test]
    fn non_finite_energy_is_rejected() {
        for energy in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = BeamRigidity::from_energy(energy).unwrap_err();
            assert!(matches!(err, OpticsError::NotFinite { parameter: "energy", .. }));
        }
        let err = BeamRigidity::from_gamma(f64::NAN).unwrap_err();
        assert!(matches!(err, OpticsError::NotFinite { parameter: "gamma", .. }));
    }

    #[test]
    fn sub_rest_energy_is_rejected() {
        // at, below, and just below the rest energy
        for energy in [REST_ENERGY_GEV, 1e-4, 0.0, -3.0] {
            let err = BeamRigidity::from_energy(energy).unwrap_err();
            assert!(matches!(err, OpticsError::SubRestEnergy { .. }), "energy={}", energy);
        }
    }

    #[test]
    fn serde_roundtrip() {
        let beam = BeamRigidity::from_energy(3.0).unwrap();
        let json = serde_json::to_string(&beam).unwrap();
        let back: BeamRigidity = serde_json::from_str(&json).unwrap();
        assert_eq!(beam, back);
    }
}
