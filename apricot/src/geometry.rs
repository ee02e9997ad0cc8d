//! Spherical/cartesian conversions, random point sampling, and ray-sphere
//! intersection geometry.
//!
//! All direction vectors that enter these functions are assumed unit
//! length to within `1e-9`; callers are responsible for normalizing before
//! the call, since re-normalizing on every invocation would be wasted work
//! in the propagator's inner loop.

use crate::random::Rng;
use nalgebra::Vector3;
use std::f64::consts::PI;

/// A geocentric cartesian coordinate, in kilometers.
pub type Cartesian = Vector3<f64>;

/// A spherical triple `(r, theta, phi)`, with `theta` measured from `+z`
/// and `phi` from `+x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Radial distance.
    pub r: f64,
    /// Polar angle, measured from `+z`.
    pub theta: f64,
    /// Azimuthal angle, measured from `+x`.
    pub phi: f64,
}

impl Spherical {
    /// Construct a new spherical coordinate.
    #[must_use]
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }
}

/// Convert an angle in degrees to radians.
#[must_use]
pub fn deg_to_rad(degree: f64) -> f64 {
    degree.to_radians()
}

/// Convert an angle in radians to degrees.
#[must_use]
pub fn rad_to_deg(radian: f64) -> f64 {
    radian.to_degrees()
}

/// Convert a cartesian coordinate to its spherical representation.
///
/// `phi` is defined as `0` when both `x` and `y` are exactly zero, since
/// the azimuth is otherwise undefined.
#[must_use]
pub fn to_spherical(location: Cartesian) -> Spherical {
    let r = location.norm();
    let theta = (location.z / r).acos();
    let phi = if location.x == 0.0 && location.y == 0.0 {
        0.0
    } else {
        location.y.atan2(location.x)
    };
    Spherical::new(r, theta, phi)
}

/// Convert a spherical coordinate to its cartesian representation.
#[must_use]
pub fn to_cartesian(location: Spherical) -> Cartesian {
    let Spherical { r, theta, phi } = location;
    Cartesian::new(
        r * theta.sin() * phi.cos(),
        r * theta.sin() * phi.sin(),
        r * theta.cos(),
    )
}

/// Draw a uniformly distributed point on the unit sphere ("true" spherical
/// point picking).
pub fn random_spherical_point(rng: &mut Rng) -> Cartesian {
    let theta = rng.uniform(-1., 1.).acos();
    let phi = PI * (2. * rng.uniform(0., 1.) - 1.);
    to_cartesian(Spherical::new(1., theta, phi))
}

/// The area of a spherical cap with half-opening angle `theta` on a sphere
/// of radius `r`.
#[must_use]
pub fn spherical_cap_area(theta: f64, r: f64) -> f64 {
    2. * PI * r * r * (1. - theta.cos())
}

/// Draw a point on the unit sphere within the polar band `[theta_min,
/// theta_max]`, with azimuth sampled uniformly from `[0, 2*pi)`.
pub fn random_cap_point(theta_min: f64, theta_max: f64, rng: &mut Rng) -> Cartesian {
    let theta = rng.uniform(theta_max.cos(), theta_min.cos()).acos();
    let phi = rng.uniform(0., 2. * PI);
    to_cartesian(Spherical::new(1., theta, phi))
}

/// Intersect a ray `start + t * dir` with a sphere of radius `r` centered
/// at the origin.
///
/// Returns `None` if the ray misses the sphere entirely. When `start` is
/// inside the sphere, the forward exit point is returned; when `start` is
/// outside, the near-side entry point is returned.
#[must_use]
pub fn propagate_to_sphere(start: Cartesian, dir: Cartesian, r: f64) -> Option<Cartesian> {
    let ld = start.dot(&dir);
    let d_squared = start.norm_squared() - ld * ld;
    if d_squared > r * r {
        return None;
    }
    let thc = (r * r - d_squared).sqrt();
    let sign = if start.norm() < r { -1. } else { 1. };
    Some(start + (-ld - sign * thc) * dir)
}

/// Reflect `v` across the tangent plane at the unit normal `n`.
#[must_use]
pub fn reflect_below(v: Cartesian, n: Cartesian) -> Cartesian {
    v - 2. * v.dot(&n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn ray_sphere_outside_hits_near_side() {
        let start = Cartesian::new(10000., 0., 0.);
        let dir = Cartesian::new(-1., 0., 0.);
        let hit = propagate_to_sphere(start, dir, 6371.).unwrap();
        assert_approx_eq!(f64, hit.x, 6371., epsilon = 1e-6);
        assert_approx_eq!(f64, hit.y, 0., epsilon = 1e-6);
        assert_approx_eq!(f64, hit.z, 0., epsilon = 1e-6);
    }

    #[test]
    fn ray_sphere_inside_hits_forward_exit() {
        let start = Cartesian::new(0., 0., 0.);
        let dir = Cartesian::new(0., 0., 1.);
        let hit = propagate_to_sphere(start, dir, 6371.).unwrap();
        assert_approx_eq!(f64, hit.x, 0., epsilon = 1e-9);
        assert_approx_eq!(f64, hit.y, 0., epsilon = 1e-9);
        assert_approx_eq!(f64, hit.z, 6371., epsilon = 1e-9);
    }

    #[test]
    fn ray_sphere_miss_returns_none() {
        let start = Cartesian::new(10000., 0., 0.);
        let dir = Cartesian::new(0., 1., 0.);
        assert!(propagate_to_sphere(start, dir, 6371.).is_none());
    }

    #[test]
    fn ray_sphere_hit_lies_on_the_sphere() {
        let mut rng = Rng::default();
        for _ in 0..1000 {
            let start = random_spherical_point(&mut rng) * rng.uniform(0.1, 20000.);
            let dir = random_spherical_point(&mut rng);
            if let Some(hit) = propagate_to_sphere(start, dir, 6371.) {
                assert_approx_eq!(f64, hit.norm(), 6371., epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn cartesian_spherical_round_trip() {
        let mut rng = Rng::default();
        for _ in 0..1000 {
            let v = random_spherical_point(&mut rng) * rng.uniform(0.1, 100.);
            let round_tripped = to_cartesian(to_spherical(v));
            assert_approx_eq!(f64, round_tripped.x, v.x, epsilon = 1e-9);
            assert_approx_eq!(f64, round_tripped.y, v.y, epsilon = 1e-9);
            assert_approx_eq!(f64, round_tripped.z, v.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn spherical_cap_area_matches_known_values() {
        let r = 6371.;
        assert_approx_eq!(f64, spherical_cap_area(PI, r), 4. * PI * r * r, epsilon = 1e-6);
        assert_approx_eq!(f64, spherical_cap_area(0., r), 0., epsilon = 1e-9);
        assert_approx_eq!(
            f64,
            spherical_cap_area(PI / 2., r),
            2. * PI * r * r,
            epsilon = 1e-6
        );
    }

    #[test]
    fn reflect_below_is_an_involution() {
        let v = Cartesian::new(1., 2., 3.);
        let n = Cartesian::new(0., 0., 1.);
        let reflected_twice = reflect_below(reflect_below(v, n), n);
        assert_approx_eq!(f64, reflected_twice.x, v.x, epsilon = 1e-12);
        assert_approx_eq!(f64, reflected_twice.y, v.y, epsilon = 1e-12);
        assert_approx_eq!(f64, reflected_twice.z, v.z, epsilon = 1e-12);
    }

    #[test]
    fn random_spherical_point_mean_shrinks_with_sample_size() {
        let mut rng = Rng::default();
        let k = 50_000;
        let sum = (0..k).fold(Cartesian::zeros(), |acc, _| acc + random_spherical_point(&mut rng));
        let mean = sum / f64::from(k as u32);
        let bound = 3. / (k as f64).sqrt();
        assert!(mean.norm() < bound, "mean magnitude {} exceeds bound {}", mean.norm(), bound);
    }
}
