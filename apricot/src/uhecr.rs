//! Ultra-high-energy cosmic-ray nuclei: species-specific shower-maximum
//! fits to Telescope Array data.

use crate::interaction::{InteractionInfo, InteractionType};
use crate::pdg::{self, ParticleId};

/// A UHECR nuclear species, with its X_max quadratic fit coefficients
/// `(a, b, c)` in `X_max = a*E^2 + b*E + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UhecrSpecies {
    /// Proton.
    Proton,
    /// Helium-4.
    Helium,
    /// Nitrogen-14.
    Nitrogen,
    /// Iron-56.
    Iron,
    /// A mixed/generic composition with no single nuclear code.
    Mixed,
}

impl UhecrSpecies {
    fn pdgid(self) -> ParticleId {
        match self {
            Self::Proton => pdg::PROTON,
            Self::Helium => pdg::HELIUM,
            Self::Nitrogen => pdg::NITROGEN,
            Self::Iron => pdg::IRON,
            Self::Mixed => pdg::APRICOTINO,
        }
    }

    /// The `(a, b, c)` X_max fit coefficients for this species, fit to
    /// Telescope Array data.
    fn coefficients(self) -> (f64, f64, f64) {
        match self {
            Self::Proton => (-5.21640, 244.91536, -1989.9836),
            Self::Helium => (-4.575_41, 221.485_21, -1834.8714),
            Self::Nitrogen => (-3.628_90, 183.629_70, -1553.6291),
            Self::Iron => (-2.694_21, 146.337_88, -1294.4108),
            Self::Mixed => (-3.960_00, 201.305_00, -1672.400),
        }
    }

    /// The shower-maximum column depth, in g/cm^2, for a cosmic ray of
    /// this species at a given log10 energy (eV).
    #[must_use]
    pub fn x_max(self, log_energy_ev: f64) -> f64 {
        let (a, b, c) = self.coefficients();
        a * log_energy_ev * log_energy_ev + b * log_energy_ev + c
    }
}

/// A single UHECR particle instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UhecrParticle {
    species: UhecrSpecies,
    energy: f64,
}

impl UhecrParticle {
    /// Construct a new UHECR particle of the given species at `log10(E/eV)`.
    #[must_use]
    pub fn new(species: UhecrSpecies, energy: f64) -> Self {
        Self { species, energy }
    }
}

impl crate::particle::ParticleLike for UhecrParticle {
    fn id(&self) -> ParticleId {
        self.species.pdgid()
    }

    fn energy(&self) -> f64 {
        self.energy
    }

    fn get_interaction(
        &self,
        _rng: &mut crate::random::Rng,
        _config: &crate::config::ModelConfig,
    ) -> InteractionInfo {
        InteractionInfo::grammage(InteractionType::ShowerMax, self.species.x_max(self.energy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn proton_x_max_matches_the_spot_check() {
        assert_approx_eq!(f64, UhecrSpecies::Proton.x_max(19.0), 780.288, epsilon = 0.001);
    }
}
