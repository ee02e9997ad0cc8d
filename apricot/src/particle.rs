//! The particle sum type: a single dispatch point over every species this
//! crate propagates, replacing the original's virtual hierarchy
//! (`Particle` -> `Neutrino` -> `ElectronNeutrino`, `Particle` ->
//! `ChargedLepton` -> `Muon` with a CRTP `Decayable` mix-in) with a tagged
//! union.

use crate::charged_lepton::{ChargedLeptonParticle, ElectronParticle};
use crate::config::ModelConfig;
use crate::interaction::InteractionInfo;
use crate::neutrino::NeutrinoParticle;
use crate::pdg::ParticleId;
use crate::random::Rng;
use crate::uhecr::UhecrParticle;
use enum_dispatch::enum_dispatch;

/// Capabilities shared by every particle variant.
#[enum_dispatch]
pub trait ParticleLike {
    /// The particle's PDG id.
    fn id(&self) -> ParticleId;
    /// The particle's current log10 energy, in eV.
    fn energy(&self) -> f64;
    /// Sample this particle's next interaction.
    fn get_interaction(&self, rng: &mut Rng, config: &ModelConfig) -> InteractionInfo;
}

/// Every particle species this crate can propagate.
#[enum_dispatch(ParticleLike)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Particle {
    /// A neutrino of any flavor.
    Neutrino(NeutrinoParticle),
    /// A muon or tau.
    ChargedLepton(ChargedLeptonParticle),
    /// An electron, which terminates propagation.
    Electron(ElectronParticle),
    /// A UHECR nucleus.
    Uhecr(UhecrParticle),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charged_lepton::LeptonKind;
    use crate::neutrino::NeutrinoFlavor;
    use crate::uhecr::UhecrSpecies;

    #[test]
    fn every_variant_dispatches_to_its_own_id() {
        let config = ModelConfig::default();
        let mut rng = Rng::default();

        let neutrino: Particle = NeutrinoParticle::new(NeutrinoFlavor::Muon, 19.0).into();
        assert_eq!(neutrino.id(), crate::pdg::MUON_NEUTRINO);
        let _ = neutrino.get_interaction(&mut rng, &config);

        let muon: Particle = ChargedLeptonParticle::new(LeptonKind::Muon, 9.0).into();
        assert_eq!(muon.id(), crate::pdg::MUON);

        let electron: Particle = ElectronParticle::new(9.0).into();
        assert_eq!(electron.id(), crate::pdg::ELECTRON);
        assert_eq!(
            electron.get_interaction(&mut rng, &config),
            InteractionInfo::NONE
        );

        let proton: Particle = UhecrParticle::new(UhecrSpecies::Proton, 19.0).into();
        assert_eq!(proton.id(), crate::pdg::PROTON);
        assert_eq!(proton.energy(), 19.0);
    }
}
