//! Physical constants shared across the crate.

/// The speed of light, in kilometers per nanosecond.
pub const C_KM_NS: f64 = 2.998e-4;

/// Avogadro's constant, in mol^-1.
pub const N_A: f64 = 6.022_141_5e23;
