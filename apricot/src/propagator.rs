//! The stepping propagator: the central state machine driving a particle
//! from its sampled origin to either detection, a cut, or exhaustion.

use crate::atmosphere::Atmosphere;
use crate::config::ModelConfig;
use crate::constants::C_KM_NS;
use crate::detector::Detector;
use crate::earth::SphericalEarth;
use crate::error::{Error, Result};
use crate::flux::Flux;
use crate::interaction::{EventTree, Events, Interaction};
use crate::particle::ParticleLike;
use crate::random::Rng;
use crate::source::Source;

/// The default guard on the number of trials a retrying propagator will
/// attempt before giving up.
pub const DEFAULT_MAX_TRIALS: u32 = 1_000_000;

/// The inner-loop step length, in kilometers, for a location at
/// normalized radius `x = |loc| / R_earth(loc)`.
#[must_use]
pub fn step_size(x: f64) -> f64 {
    if x < 0.85 {
        10.
    } else if x < 0.9 {
        5.
    } else if x < 0.99 {
        1.
    } else if x < 0.999 {
        0.05
    } else {
        0.01
    }
}

/// Drives a single trial (or a batch of trials) through the Earth,
/// accumulating grammage and path length until the particle's sampled
/// interaction triggers, the detector cuts the trial, or it exhausts a
/// retry budget.
#[derive(Debug, Clone)]
pub struct Propagator<A: Atmosphere> {
    earth: SphericalEarth<A>,
    config: ModelConfig,
    max_trials: u32,
}

impl<A: Atmosphere> Propagator<A> {
    /// Construct a new propagator over the given Earth and model
    /// configuration, with the default trial guard.
    #[must_use]
    pub fn new(earth: SphericalEarth<A>, config: ModelConfig) -> Self {
        Self { earth, config, max_trials: DEFAULT_MAX_TRIALS }
    }

    /// Override the default maximum-trials guard used by
    /// [`Self::propagate_until_detected`].
    #[must_use]
    pub fn with_max_trials(mut self, max_trials: u32) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Run a single trial: sample a particle and origin, step it through
    /// the Earth, and return the resulting event tree (empty on cut or
    /// undetectable interaction).
    pub fn propagate<P, F, S, D>(
        &self,
        source: &S,
        flux: &F,
        detector: &D,
        rng: &mut Rng,
    ) -> EventTree
    where
        P: ParticleLike + Clone,
        F: Flux<P>,
        S: Source,
        D: Detector<P>,
    {
        let particle = flux.get_particle(rng);
        let (mut loc, dir) = source.get_origin(rng);
        let info = particle.get_interaction(rng, &self.config);

        if !detector.is_good(&particle, loc, dir) {
            log::debug!("trial rejected by is_good at origin {loc:?}");
            return EventTree::new();
        }

        let weight = loc.normalize().dot(&dir);
        let mut grammage = 0.;
        let mut path_km = 0.;
        let lifetime_threshold_km = if info.lifetime >= 0. {
            Some(C_KM_NS * info.lifetime)
        } else {
            None
        };

        while !detector.cut(&particle, loc, dir) {
            let x = loc.norm() / self.earth.radius(loc);
            let step = step_size(x);

            loc += 0.5 * step * dir;
            let rho = self.earth.density(loc);
            loc += 0.5 * step * dir;

            grammage += rho * step * 1e5;
            path_km += step;

            let grammage_triggered = info.grammage > 0. && grammage >= info.grammage;
            let lifetime_triggered =
                lifetime_threshold_km.is_some_and(|threshold| path_km >= threshold);

            if grammage_triggered || lifetime_triggered {
                if detector.detectable(&info, &particle, loc, dir) {
                    let altitude = loc.norm() - self.earth.radius(loc);
                    let interaction = Interaction {
                        pdgid: particle.id(),
                        energy: particle.energy(),
                        interaction_type: info.interaction_type,
                        location: loc,
                        direction: dir,
                        weight,
                        altitude,
                    };
                    return vec![interaction];
                }
                log::debug!("triggered interaction was not detectable");
                return EventTree::new();
            }
        }

        EventTree::new()
    }

    /// Run `n` independent trials, returning one event tree per trial
    /// (possibly empty).
    pub fn propagate_n<P, F, S, D>(
        &self,
        source: &S,
        flux: &F,
        detector: &D,
        rng: &mut Rng,
        n: u32,
    ) -> Events
    where
        P: ParticleLike + Clone,
        F: Flux<P>,
        S: Source,
        D: Detector<P>,
    {
        (0..n)
            .map(|_| self.propagate(source, flux, detector, rng))
            .collect()
    }

    /// Retry trials until one produces a non-empty event tree, or the
    /// configured `max_trials` guard is exceeded.
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if `max_trials` trials all fail to
    /// produce a detection.
    pub fn propagate_until_detected<P, F, S, D>(
        &self,
        source: &S,
        flux: &F,
        detector: &D,
        rng: &mut Rng,
    ) -> Result<EventTree>
    where
        P: ParticleLike + Clone,
        F: Flux<P>,
        S: Source,
        D: Detector<P>,
    {
        for _ in 0..self.max_trials {
            let tree = self.propagate(source, flux, detector, rng);
            if !tree.is_empty() {
                return Ok(tree);
            }
        }
        log::warn!("propagator exhausted {} trials without detection", self.max_trials);
        Err(Error::Overflow { maxtrials: self.max_trials })
    }
}
