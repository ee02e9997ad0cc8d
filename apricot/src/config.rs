//! Process-wide model selections, bundled into an explicit config value
//! rather than read from module-level globals (see the propagator design
//! notes on reproducibility).

/// Which parametric neutrino cross-section family to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossSectionModel {
    /// The Connolly et al. lower-bound fit.
    ConnollyLower,
    /// The Connolly et al. middle fit.
    #[default]
    ConnollyMiddle,
    /// The Connolly et al. upper-bound fit.
    ConnollyUpper,
    /// The Gorham fit.
    Gorham,
}

/// Which parametric neutrino inelasticity (y-factor) family to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YFactorModel {
    /// Bjorken/Dworkin-Hughes-McKay model.
    #[default]
    Bdhm,
    /// Soyez model.
    Soyez,
    /// ALLM model.
    Allm,
}

/// Bundles every process-wide stochastic choice: the PRNG seed and the two
/// neutrino model selections. Passed explicitly to propagator construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// The seed handed to a freshly constructed [`crate::random::Rng`].
    pub seed: u64,
    /// The neutrino cross-section model in effect.
    pub cross_section_model: CrossSectionModel,
    /// The neutrino y-factor model in effect.
    pub y_factor_model: YFactorModel,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            seed: crate::random::DEFAULT_SEED,
            cross_section_model: CrossSectionModel::default(),
            y_factor_model: YFactorModel::default(),
        }
    }
}
