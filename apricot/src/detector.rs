//! Detector acceptance predicates: pre-trial validity, per-step cut, and
//! triggered-interaction detectability.

use crate::atmosphere::Atmosphere;
use crate::earth::SphericalEarth;
use crate::geometry::Cartesian;
use crate::interaction::InteractionInfo;
use crate::particle::ParticleLike;

/// A detector's three acceptance predicates.
pub trait Detector<P: ParticleLike> {
    /// Invoked once at the sampled source point, before any stepping.
    fn is_good(&self, particle: &P, loc: Cartesian, dir: Cartesian) -> bool {
        let _ = (particle, loc, dir);
        true
    }

    /// Invoked each step; `true` ends the trial with no emission.
    fn cut(&self, particle: &P, loc: Cartesian, dir: Cartesian) -> bool;

    /// Invoked at each triggered interaction; `true` emits the record.
    fn detectable(&self, info: &InteractionInfo, particle: &P, loc: Cartesian, dir: Cartesian)
        -> bool;
}

/// The volumetric mean Earth radius, used by [`PerfectDetector`]'s cut
/// independent of any particular Earth instance.
const R_VOLUMETRIC: f64 = 6371.000;

/// Accepts every triggered interaction; only cuts trials that have
/// traveled far past the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerfectDetector;

impl<P: ParticleLike> Detector<P> for PerfectDetector {
    fn cut(&self, _particle: &P, loc: Cartesian, _dir: Cartesian) -> bool {
        loc.norm() > R_VOLUMETRIC + 100.
    }

    fn detectable(
        &self,
        _info: &InteractionInfo,
        _particle: &P,
        _loc: Cartesian,
        _dir: Cartesian,
    ) -> bool {
        true
    }
}

/// Accepts interactions whose particle energy falls in `(e_min, e_max)`;
/// cuts trials once the energy drops below `e_min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyCutDetector {
    /// Lower log10 energy bound (exclusive).
    pub e_min: f64,
    /// Upper log10 energy bound (exclusive).
    pub e_max: f64,
}

impl EnergyCutDetector {
    /// Construct a new energy-window detector.
    #[must_use]
    pub fn new(e_min: f64, e_max: f64) -> Self {
        Self { e_min, e_max }
    }
}

impl<P: ParticleLike> Detector<P> for EnergyCutDetector {
    fn cut(&self, particle: &P, _loc: Cartesian, _dir: Cartesian) -> bool {
        particle.energy() < self.e_min
    }

    fn detectable(
        &self,
        _info: &InteractionInfo,
        particle: &P,
        _loc: Cartesian,
        _dir: Cartesian,
    ) -> bool {
        particle.energy() > self.e_min && particle.energy() < self.e_max
    }
}

/// Which visibility geometry an [`OrbitalDetector`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    /// Only the direct line of sight from the interaction to the payload.
    Direct,
    /// Only the Earth-reflected line of sight.
    Reflected,
    /// Either direct or reflected.
    Both,
}

/// An orbital or balloon-borne detector: accepts interactions visible to a
/// payload at a fixed geocentric location, either directly or via
/// reflection off the Earth's surface.
#[derive(Debug, Clone)]
pub struct OrbitalDetector<A: Atmosphere> {
    earth: SphericalEarth<A>,
    payload: Cartesian,
    maxview_rad: f64,
    maxalt_km: f64,
    mode: DetectionMode,
}

impl<A: Atmosphere> OrbitalDetector<A> {
    /// Construct a new orbital detector. `max_view_deg` is the half-angle
    /// acceptance cone, in degrees. `maxalt_km` bounds the altitude above
    /// which a trial is cut (defaults to `100 + epsilon` km if not
    /// overridden via [`Self::with_max_altitude`]).
    #[must_use]
    pub fn new(
        earth: SphericalEarth<A>,
        payload: Cartesian,
        max_view_deg: f64,
        mode: DetectionMode,
    ) -> Self {
        Self {
            earth,
            payload,
            maxview_rad: max_view_deg.to_radians(),
            maxalt_km: 100. + 1e-6,
            mode,
        }
    }

    /// Override the default maximum altitude cut.
    #[must_use]
    pub fn with_max_altitude(mut self, maxalt_km: f64) -> Self {
        self.maxalt_km = maxalt_km;
        self
    }

    /// The angle between `dir` and the direction from `loc` to the
    /// payload.
    #[must_use]
    pub fn view_angle(&self, loc: Cartesian, dir: Cartesian) -> f64 {
        let to_payload = (self.payload - loc).normalize();
        dir.dot(&to_payload).clamp(-1., 1.).acos()
    }

    /// The payload's elevation above the local horizontal at `loc`.
    #[must_use]
    pub fn payload_angle(&self, loc: Cartesian) -> f64 {
        std::f64::consts::FRAC_PI_2
            - self
                .payload
                .normalize()
                .dot(&(loc - self.payload).normalize())
                .clamp(-1., 1.)
                .acos()
    }

    fn visible_direct(&self, loc: Cartesian, dir: Cartesian) -> bool {
        if self.view_angle(loc, -dir) < self.maxview_rad {
            return true;
        }
        if self.view_angle(loc, dir) >= self.maxview_rad {
            return false;
        }
        let to_payload = (self.payload - loc).normalize();
        match self.earth.find_surface(loc, to_payload) {
            None => true,
            Some(surface) => (surface - loc).norm() > (self.payload - loc).norm(),
        }
    }

    fn visible_reflected(&self, loc: Cartesian, dir: Cartesian) -> bool {
        let Some(surface) = self.earth.find_surface(loc, dir) else {
            return false;
        };
        let normal = surface.normalize();
        let reflected_payload = crate::geometry::reflect_below(self.payload - surface, normal);
        let view = (reflected_payload - loc).normalize();
        view.dot(&dir).clamp(-1., 1.).acos() < self.maxview_rad
    }
}

impl<A: Atmosphere, P: ParticleLike> Detector<P> for OrbitalDetector<A> {
    fn cut(&self, _particle: &P, loc: Cartesian, _dir: Cartesian) -> bool {
        let r = loc.norm();
        let r_earth = self.earth.radius(loc);
        r > r_earth + self.maxalt_km || r < r_earth - 0.01
    }

    fn detectable(
        &self,
        _info: &InteractionInfo,
        _particle: &P,
        loc: Cartesian,
        dir: Cartesian,
    ) -> bool {
        match self.mode {
            DetectionMode::Direct => self.visible_direct(loc, dir),
            DetectionMode::Reflected => self.visible_reflected(loc, dir),
            DetectionMode::Both => self.visible_direct(loc, dir) || self.visible_reflected(loc, dir),
        }
    }
}
