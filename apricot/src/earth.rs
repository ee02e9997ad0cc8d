//! The composite Earth model: a spherical surface, PREM interior density,
//! and an optional atmosphere exterior to it.

use crate::atmosphere::Atmosphere;
use crate::geometry::{propagate_to_sphere, spherical_cap_area, Cartesian};
use crate::prem;

/// Which fixed Earth radius a [`SphericalEarth`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusModel {
    /// The polar radius, 6356.752 km.
    Polar,
    /// The polar radius of curvature, 6399.594 km.
    PolarCurvature,
    /// The equatorial radius, 6378.137 km.
    Equatorial,
    /// The volumetric mean radius, 6371.000 km.
    Volumetric,
}

impl RadiusModel {
    /// The radius, in kilometers, of this model.
    #[must_use]
    pub fn km(self) -> f64 {
        match self {
            Self::Polar => 6356.752,
            Self::PolarCurvature => 6399.594,
            Self::Equatorial => 6378.137,
            Self::Volumetric => 6371.000,
        }
    }
}

/// A spherical Earth: a constant radius, PREM density inside it, and an
/// optional atmosphere outside it.
#[derive(Debug, Clone)]
pub struct SphericalEarth<A: Atmosphere> {
    radius_model: RadiusModel,
    atmosphere: Option<A>,
}

impl<A: Atmosphere> SphericalEarth<A> {
    /// Construct a bare Earth with no atmosphere.
    #[must_use]
    pub fn new(radius_model: RadiusModel) -> Self {
        Self {
            radius_model,
            atmosphere: None,
        }
    }

    /// Attach an atmosphere, replacing any previously attached one.
    #[must_use]
    pub fn with_atmosphere(mut self, atmosphere: A) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }

    /// The configured radius, in kilometers. Constant across all locations
    /// for the spherical model.
    #[must_use]
    pub fn radius(&self, _location: Cartesian) -> f64 {
        self.radius_model.km()
    }

    /// The density at `location`, in g/cm^3: PREM inside the surface,
    /// the attached atmosphere (or zero) outside it.
    #[must_use]
    pub fn density(&self, location: Cartesian) -> f64 {
        let r = location.norm();
        let r_earth = self.radius(location);
        if r < r_earth {
            prem::density(r, r_earth)
        } else {
            self.atmosphere
                .as_ref()
                .map_or(0., |atmosphere| atmosphere.density(r - r_earth))
        }
    }

    /// The point where a ray from `location` along `direction` exits the
    /// Earth's surface, or `None` if it never crosses it.
    #[must_use]
    pub fn find_surface(&self, location: Cartesian, direction: Cartesian) -> Option<Cartesian> {
        propagate_to_sphere(location, direction, self.radius(location))
    }

    /// The surface area of a spherical cap of half-angle `theta` on this
    /// Earth's surface.
    #[must_use]
    pub fn cap_area(&self, theta: f64) -> f64 {
        spherical_cap_area(theta, self.radius_model.km())
    }
}
