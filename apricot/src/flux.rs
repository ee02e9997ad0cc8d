//! Particle flux models: samples a fresh particle instance per trial.

use crate::random::Rng;

/// Samples the next particle instance for a trial.
pub trait Flux<P> {
    /// Draw the next particle.
    fn get_particle(&self, rng: &mut Rng) -> P;
}

/// Every draw returns a new particle of the same species, at a fixed
/// log10 energy.
#[derive(Debug, Clone, Copy)]
pub struct FixedParticleFlux<P> {
    energy: f64,
    constructor: fn(f64) -> P,
}

impl<P> FixedParticleFlux<P> {
    /// Construct a flux that always draws `constructor(energy)`.
    #[must_use]
    pub fn new(energy: f64, constructor: fn(f64) -> P) -> Self {
        Self { energy, constructor }
    }
}

impl<P> Flux<P> for FixedParticleFlux<P> {
    fn get_particle(&self, _rng: &mut Rng) -> P {
        (self.constructor)(self.energy)
    }
}

/// Every draw returns a new particle of the same species, at a log10
/// energy uniform in `[energy_min, energy_max)`.
#[derive(Debug, Clone, Copy)]
pub struct UniformParticleFlux<P> {
    energy_min: f64,
    energy_max: f64,
    constructor: fn(f64) -> P,
}

impl<P> UniformParticleFlux<P> {
    /// Construct a flux that draws `constructor(energy)` with energy
    /// uniform in `[energy_min, energy_max)`.
    #[must_use]
    pub fn new(energy_min: f64, energy_max: f64, constructor: fn(f64) -> P) -> Self {
        Self { energy_min, energy_max, constructor }
    }
}

impl<P> Flux<P> for UniformParticleFlux<P> {
    fn get_particle(&self, rng: &mut Rng) -> P {
        (self.constructor)(rng.uniform(self.energy_min, self.energy_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neutrino::{NeutrinoFlavor, NeutrinoParticle};
    use crate::particle::ParticleLike;

    #[test]
    fn fixed_flux_always_returns_the_same_energy() {
        let flux = FixedParticleFlux::new(19.0, |e| {
            NeutrinoParticle::new(NeutrinoFlavor::Tau, e)
        });
        let mut rng = Rng::default();
        for _ in 0..100 {
            assert_eq!(flux.get_particle(&mut rng).energy(), 19.0);
        }
    }

    #[test]
    fn uniform_flux_stays_within_bounds() {
        let flux = UniformParticleFlux::new(18.0, 20.0, |e| {
            NeutrinoParticle::new(NeutrinoFlavor::Tau, e)
        });
        let mut rng = Rng::default();
        for _ in 0..1000 {
            let energy = flux.get_particle(&mut rng).energy();
            assert!((18.0..20.0).contains(&energy));
        }
    }
}
