//! The Preliminary Reference Earth Model: a piecewise radial density
//! profile of the Earth's interior.

/// Evaluate the PREM density (g/cm^3) at a given radius, for an Earth of
/// radius `r_earth` (both in kilometers).
///
/// Returns `0` outside the model's domain (i.e. above the surface), rather
/// than failing — PREM and the atmosphere it hands off to are defined
/// everywhere.
#[must_use]
pub fn density(radius_km: f64, r_earth_km: f64) -> f64 {
    let x = radius_km / r_earth_km;

    if x < 0.192_16 {
        13.0885 - 8.8381 * x * x
    } else if x < 0.547_45 {
        12.5815 - 1.2638 * x - 3.6426 * x * x - 5.5281 * x * x * x
    } else if x < 0.896_84 {
        7.9565 - 6.4761 * x + 5.5283 * x * x - 3.0807 * x * x * x
    } else if x < 0.906_28 {
        5.3197 - 1.4836 * x
    } else if x < 0.937_59 {
        11.2494 - 8.0298 * x
    } else if x < 0.965_90 {
        7.1089 - 3.8045 * x
    } else if x < 0.996_58 {
        2.691 + 0.6924 * x
    } else if x < 0.997_52 {
        2.9
    } else if x < 0.999_41 {
        2.6
    } else if x < 0.999_984 {
        1.02
    } else {
        0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn center_density() {
        assert_approx_eq!(f64, density(0., 6356.755), 13.0885, epsilon = 1e-9);
    }

    #[test]
    fn outer_core_density() {
        assert_approx_eq!(f64, density(3000., 6356.755), 10.5927, epsilon = 0.001);
    }

    #[test]
    fn above_surface_is_zero() {
        assert_eq!(density(6400., 6356.755), 0.);
    }

    #[test]
    fn density_is_non_negative_everywhere() {
        for i in 0..=2000 {
            let radius = f64::from(i) * 5.;
            assert!(density(radius, 6356.755) >= 0.);
        }
    }
}
