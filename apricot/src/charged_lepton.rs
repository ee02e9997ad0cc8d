//! Charged leptons: electrons terminate propagation, muons and taus decay.

use crate::config::ModelConfig;
use crate::interaction::{InteractionInfo, InteractionType};
use crate::pdg::{self, ParticleId};
use crate::random::Rng;

/// Sample a lab-frame decay time, in nanoseconds, for a particle of rest
/// mass `mass_log10_ev` (log10 eV/c^2), rest-frame lifetime
/// `rest_lifetime_ns`, at log10 energy `energy_log10_ev`.
///
/// This is the free-function replacement for the original's `Decayable`
/// mix-in: `gamma = 10^(energy - mass)`, `t_lab = exponential(1/tau) *
/// gamma`.
#[must_use]
pub fn sample_decay_time(
    mass_log10_ev: f64,
    rest_lifetime_ns: f64,
    energy_log10_ev: f64,
    rng: &mut Rng,
) -> f64 {
    let gamma = 10f64.powf(energy_log10_ev - mass_log10_ev);
    rng.exponential(1. / rest_lifetime_ns) * gamma
}

/// The non-electron charged lepton species: muon and tau, each carrying
/// its rest mass and rest-frame lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeptonKind {
    /// Muon, rest lifetime 2196.9811 ns.
    Muon,
    /// Tau, rest lifetime 2.903e-4 ns.
    Tau,
}

impl LeptonKind {
    fn pdgid(self) -> ParticleId {
        match self {
            Self::Muon => pdg::MUON,
            Self::Tau => pdg::TAU,
        }
    }

    fn mass_ev(self) -> f64 {
        match self {
            Self::Muon => pdg::MUON_MASS_EV,
            Self::Tau => pdg::TAU_MASS_EV,
        }
    }

    fn rest_lifetime_ns(self) -> f64 {
        match self {
            Self::Muon => 2196.9811,
            Self::Tau => 2.903e-4,
        }
    }
}

/// A muon or tau particle instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargedLeptonParticle {
    kind: LeptonKind,
    energy: f64,
}

impl ChargedLeptonParticle {
    /// Construct a new charged lepton of the given kind at `log10(E/eV)`.
    #[must_use]
    pub fn new(kind: LeptonKind, energy: f64) -> Self {
        Self { kind, energy }
    }

    /// For a tau, sample a decay row from `table` and return the neutrino
    /// carrying the largest fractional energy as a new particle instance.
    /// Returns `None` for a muon (no decay table applies).
    #[must_use]
    pub fn decay_product(
        &self,
        table: &crate::tau_decay_table::TauDecayTable,
        rng: &mut Rng,
    ) -> Option<crate::particle::Particle> {
        if self.kind != LeptonKind::Tau {
            return None;
        }
        let row = table.sample(rng);
        let (carrier, fraction) = row.leading_neutrino();
        let flavor = if carrier == pdg::TAU_NEUTRINO {
            crate::neutrino::NeutrinoFlavor::Tau
        } else if carrier == pdg::MUON_NEUTRINO {
            crate::neutrino::NeutrinoFlavor::Muon
        } else {
            crate::neutrino::NeutrinoFlavor::Electron
        };
        let product_energy = self.energy + fraction.log10();
        Some(
            crate::neutrino::NeutrinoParticle::new(flavor, product_energy).into(),
        )
    }
}

impl crate::particle::ParticleLike for ChargedLeptonParticle {
    fn id(&self) -> ParticleId {
        self.kind.pdgid()
    }

    fn energy(&self) -> f64 {
        self.energy
    }

    fn get_interaction(&self, rng: &mut Rng, _config: &ModelConfig) -> InteractionInfo {
        let mass_log10 = self.kind.mass_ev().log10();
        let lifetime = sample_decay_time(
            mass_log10,
            self.kind.rest_lifetime_ns(),
            self.energy,
            rng,
        );
        InteractionInfo::lifetime(InteractionType::Decay, lifetime)
    }
}

/// An electron particle instance: treated as terminating propagation, it
/// never interacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronParticle {
    energy: f64,
}

impl ElectronParticle {
    /// Construct a new electron at `log10(E/eV)`.
    #[must_use]
    pub fn new(energy: f64) -> Self {
        Self { energy }
    }
}

impl crate::particle::ParticleLike for ElectronParticle {
    fn id(&self) -> ParticleId {
        pdg::ELECTRON
    }

    fn energy(&self) -> f64 {
        self.energy
    }

    fn get_interaction(&self, _rng: &mut Rng, _config: &ModelConfig) -> InteractionInfo {
        InteractionInfo::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn muon_decay_time_mean_matches_rest_lifetime_scaled_by_gamma() {
        let mut rng = Rng::default();
        let log_e = 9.0;
        let mass_log10 = pdg::MUON_MASS_EV.log10();
        let gamma = 10f64.powf(log_e - mass_log10);
        let n = 100_000;
        let mean: f64 = (0..n)
            .map(|_| sample_decay_time(mass_log10, 2196.9811, log_e, &mut rng))
            .sum::<f64>()
            / f64::from(n);
        assert_approx_eq!(f64, mean / gamma, 2196.9811, epsilon = 2196.9811 * 0.01);
    }

    #[test]
    fn electron_never_interacts() {
        use crate::particle::ParticleLike;
        let electron = ElectronParticle::new(9.0);
        let mut rng = Rng::default();
        let config = ModelConfig::default();
        let info = electron.get_interaction(&mut rng, &config);
        assert_eq!(info, InteractionInfo::NONE);
    }

    #[test]
    fn muon_has_no_decay_product() {
        use crate::tau_decay_table::{DecayRow, TauDecayTable};
        let muon = ChargedLeptonParticle::new(LeptonKind::Muon, 9.0);
        let table = TauDecayTable::from_rows(vec![DecayRow {
            nu_tau: 0.1,
            nu_mu: 0.6,
            nu_e: 0.1,
            hadronic: 0.1,
            muon: 0.05,
            electron: 0.05,
        }])
        .unwrap();
        let mut rng = Rng::default();
        assert!(muon.decay_product(&table, &mut rng).is_none());
    }

    #[test]
    fn tau_decay_product_is_the_leading_neutrino() {
        use crate::particle::ParticleLike;
        use crate::tau_decay_table::{DecayRow, TauDecayTable};
        let tau = ChargedLeptonParticle::new(LeptonKind::Tau, 10.0);
        let table = TauDecayTable::from_rows(vec![DecayRow {
            nu_tau: 0.1,
            nu_mu: 0.6,
            nu_e: 0.1,
            hadronic: 0.1,
            muon: 0.05,
            electron: 0.05,
        }])
        .unwrap();
        let mut rng = Rng::default();
        let product = tau.decay_product(&table, &mut rng).unwrap();
        assert_eq!(product.id(), pdg::MUON_NEUTRINO);
        assert_approx_eq!(f64, product.energy(), 10.0 + 0.6f64.log10(), epsilon = 1e-9);
    }
}
