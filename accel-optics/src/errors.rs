//! Error types for beam-optics calculations.

use thiserror::Error;

/// Convenience alias for `Result<T, OpticsError>`.
pub type OpticsResult<T> = Result<T, OpticsError>;

/// Error type for beam-optics calculations.
///
/// Both variants are caller errors: the input either is not a number or
/// describes a beam that cannot exist. Neither is recoverable by retrying.
#[derive(Error, Debug)]
pub enum OpticsError {
    /// An input parameter is NaN or infinite.
    #[error("{parameter} is not finite: {value}")]
    NotFinite { parameter: &'static str, value: f64 },

    /// The requested beam energy does not exceed the particle rest energy,
    /// so the relativistic beta would be zero or imaginary.
    #[error("beam energy {energy} GeV does not exceed the electron rest energy ({rest_energy} GeV)")]
    SubRestEnergy { energy: f64, rest_energy: f64 },
}

impl OpticsError {
    /// Creates a [`NotFinite`](Self::NotFinite) error.
    pub fn not_finite(parameter: &'static str, value: f64) -> Self {
        Self::NotFinite { parameter, value }
    }

    /// Creates a [`SubRestEnergy`](Self::SubRestEnergy) error.
    pub fn sub_rest_energy(energy: f64, rest_energy: f64) -> Self {
        Self::SubRestEnergy {
            energy,
            rest_energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_finite_display() {
        let err = OpticsError::not_finite("energy", f64::NAN);
        assert!(err.to_string().contains("energy is not finite"));
    }

    #[test]
    fn sub_rest_energy_display() {
        let err = OpticsError::sub_rest_energy(1e-4, 5.11e-4);
        assert!(err.to_string().contains("does not exceed"));
        assert!(err.to_string().contains("0.0001"));
    }

    #[test]
    fn send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<OpticsError>();
        _assert_sync::<OpticsError>();
    }
}
