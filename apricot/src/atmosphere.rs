//! Pluggable altitude-dependent atmospheric density models.

/// An atmospheric density model.
///
/// `density` returns the density in g/cm^3 at a given altitude above the
/// Earth's surface, in kilometers. Implementations must return a
/// non-negative density and `0` above the model's effective top.
pub trait Atmosphere {
    /// The density of the atmosphere at a given altitude, in g/cm^3.
    fn density(&self, altitude_km: f64) -> f64;
}

/// An exponential atmosphere, `rho = rho0 * exp(-g*M*h / (R*T))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialAtmosphere {
    /// Sea-level density, in g/cm^3.
    pub rho0: f64,
    /// Reference temperature, in Kelvin.
    pub temperature: f64,
}

impl ExponentialAtmosphere {
    /// The molar mass of dry air, in kg/mol (the spec's 28.966 g/mol).
    const MOLAR_MASS: f64 = 28.966e-3;
    /// The ideal gas constant, in J mol^-1 K^-1.
    const GAS_CONSTANT: f64 = 8.3145;
    /// Standard gravitational acceleration, in m/s^2.
    const GRAVITY: f64 = 9.81;

    /// Construct an exponential atmosphere from its sea-level density
    /// (g/cm^3) and reference temperature (K).
    #[must_use]
    pub fn new(rho0: f64, temperature: f64) -> Self {
        Self { rho0, temperature }
    }
}

impl Default for ExponentialAtmosphere {
    /// The default model is a little cooler (273 K) than the standard
    /// atmosphere (288 K), which better approximates polar conditions.
    fn default() -> Self {
        Self::new(1.225e-3, 273.)
    }
}

impl Atmosphere for ExponentialAtmosphere {
    fn density(&self, altitude_km: f64) -> f64 {
        let h_m = altitude_km * 1000.;
        self.rho0
            * (-Self::GRAVITY * Self::MOLAR_MASS * h_m / (Self::GAS_CONSTANT * self.temperature))
                .exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn density_decreases_with_altitude() {
        let atmosphere = ExponentialAtmosphere::default();
        assert!(atmosphere.density(10.) < atmosphere.density(0.));
        assert_approx_eq!(f64, atmosphere.density(0.), 1.225e-3, epsilon = 1e-9);
    }

    #[test]
    fn density_is_never_negative() {
        let atmosphere = ExponentialAtmosphere::default();
        for altitude in [0., 1., 10., 100., 1000.] {
            assert!(atmosphere.density(altitude) >= 0.);
        }
    }
}
