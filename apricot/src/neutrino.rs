//! Neutrino flavors: charged- and neutral-current interaction sampling.

use crate::config::ModelConfig;
use crate::constants::N_A;
use crate::cross_section::{log_cc_cross_section, log_nc_cross_section};
use crate::interaction::{InteractionInfo, InteractionType};
use crate::pdg::{self, ParticleId};
use crate::random::Rng;

/// The three neutrino flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeutrinoFlavor {
    /// Electron neutrino.
    Electron,
    /// Muon neutrino.
    Muon,
    /// Tau neutrino.
    Tau,
}

impl NeutrinoFlavor {
    fn pdgid(self) -> ParticleId {
        match self {
            Self::Electron => pdg::ELECTRON_NEUTRINO,
            Self::Muon => pdg::MUON_NEUTRINO,
            Self::Tau => pdg::TAU_NEUTRINO,
        }
    }
}

/// A single neutrino particle instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutrinoParticle {
    flavor: NeutrinoFlavor,
    energy: f64,
}

impl NeutrinoParticle {
    /// Construct a new neutrino of the given flavor at `log10(E/eV)`.
    #[must_use]
    pub fn new(flavor: NeutrinoFlavor, energy: f64) -> Self {
        Self { flavor, energy }
    }
}

impl crate::particle::ParticleLike for NeutrinoParticle {
    fn id(&self) -> ParticleId {
        self.flavor.pdgid()
    }

    fn energy(&self) -> f64 {
        self.energy
    }

    fn get_interaction(&self, rng: &mut Rng, config: &ModelConfig) -> InteractionInfo {
        let cc_sigma = log_cc_cross_section(config.cross_section_model, self.energy);
        let nc_sigma = log_nc_cross_section(config.cross_section_model, self.energy);

        let cc_grammage = rng.exponential(N_A * 10f64.powf(cc_sigma));
        let nc_grammage = rng.exponential(N_A * 10f64.powf(nc_sigma));

        if cc_grammage <= nc_grammage {
            InteractionInfo::grammage(InteractionType::ChargedCurrent, cc_grammage)
        } else {
            InteractionInfo::grammage(InteractionType::NeutralCurrent, nc_grammage)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrossSectionModel;
    use crate::particle::ParticleLike;
    use float_cmp::assert_approx_eq;

    #[test]
    fn grammage_is_always_positive() {
        let neutrino = NeutrinoParticle::new(NeutrinoFlavor::Muon, 19.0);
        let mut rng = Rng::default();
        let config = ModelConfig::default();
        for _ in 0..1000 {
            let info = neutrino.get_interaction(&mut rng, &config);
            assert!(info.grammage > 0.);
            assert!(info.lifetime < 0.);
        }
    }

    #[test]
    fn exponential_grammage_expectation_matches_the_combined_rate() {
        // the minimum of two independent exponentials with rates lambda_cc,
        // lambda_nc is itself exponential with rate lambda_cc + lambda_nc.
        let neutrino = NeutrinoParticle::new(NeutrinoFlavor::Muon, 19.0);
        let mut rng = Rng::default();
        let config = ModelConfig {
            cross_section_model: CrossSectionModel::ConnollyMiddle,
            ..ModelConfig::default()
        };
        let cc_sigma = log_cc_cross_section(config.cross_section_model, 19.0);
        let nc_sigma = log_nc_cross_section(config.cross_section_model, 19.0);
        let combined_rate = N_A * 10f64.powf(cc_sigma) + N_A * 10f64.powf(nc_sigma);
        let expected_mean = 1. / combined_rate;

        let n = 200_000;
        let mean: f64 = (0..n)
            .map(|_| neutrino.get_interaction(&mut rng, &config).grammage)
            .sum::<f64>()
            / f64::from(n);
        assert_approx_eq!(f64, mean, expected_mean, epsilon = expected_mean * 0.05);
    }
}
