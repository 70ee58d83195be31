//! Core constants and shared numeric helpers for the Rocket Design Calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Tolerance when comparing achieved against required delta-v (m/s).
    pub const DV_EPSILON: f64 = 1e-6;
    /// Tolerance when comparing available against required acceleration (m/s²).
    pub const ACCEL_EPSILON: f64 = 1e-9;
}

/// Conversions between thrust, mass, and acceleration.
pub mod accel {
    use super::constants::G0;

    /// Dimensionless thrust-to-weight ratio for a thrust (N) acting on a mass (kg).
    #[inline]
    pub fn thrust_to_weight(thrust_n: f64, mass_kg: f64) -> f64 {
        thrust_n / (mass_kg * G0)
    }

    /// Acceleration (m/s²) a thrust (N) imparts on a mass (kg).
    #[inline]
    pub fn acceleration(thrust_n: f64, mass_kg: f64) -> f64 {
        thrust_n / mass_kg
    }
}
