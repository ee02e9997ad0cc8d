//! Origin and direction sampling for a trial.

use crate::geometry::{random_cap_point, random_spherical_point, Cartesian};
use crate::random::Rng;

/// Samples a trial's origin location and initial direction.
pub trait Source {
    /// Draw `(origin, direction)`.
    fn get_origin(&self, rng: &mut Rng) -> (Cartesian, Cartesian);
}

/// Samples an origin on a spherical cap and an isotropic direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCapSource {
    radius_km: f64,
    half_opening_theta: f64,
    center_theta: f64,
}

impl SphericalCapSource {
    /// Construct a new cap source: a sphere of `radius_km`, with origins
    /// drawn from the polar band centered on `center_theta` with
    /// half-opening angle `half_opening_theta` (both in radians), clamped
    /// to `[0, pi]`.
    #[must_use]
    pub fn new(radius_km: f64, half_opening_theta: f64, center_theta: f64) -> Self {
        Self { radius_km, half_opening_theta, center_theta }
    }
}

impl Source for SphericalCapSource {
    fn get_origin(&self, rng: &mut Rng) -> (Cartesian, Cartesian) {
        let theta_min = (self.center_theta - self.half_opening_theta).max(0.);
        let theta_max = (self.center_theta + self.half_opening_theta).min(std::f64::consts::PI);
        let origin = self.radius_km * random_cap_point(theta_min, theta_max, rng);
        let direction = random_spherical_point(rng);
        (origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn origin_lies_on_the_configured_sphere() {
        let source = SphericalCapSource::new(6371., 0.5, 0.2);
        let mut rng = Rng::default();
        for _ in 0..1000 {
            let (origin, direction) = source.get_origin(&mut rng);
            assert_approx_eq!(f64, origin.norm(), 6371., epsilon = 1e-6);
            assert_approx_eq!(f64, direction.norm(), 1., epsilon = 1e-9);
        }
    }

    #[test]
    fn origin_polar_angle_stays_within_the_cap() {
        let source = SphericalCapSource::new(6371., 0.1, 0.5);
        let mut rng = Rng::default();
        for _ in 0..1000 {
            let (origin, _) = source.get_origin(&mut rng);
            let theta = (origin.z / origin.norm()).acos();
            assert!(theta >= 0.4 - 1e-9 && theta <= 0.6 + 1e-9);
        }
    }
}
