//! Interaction records and the event tree they're collected into.

use crate::geometry::Cartesian;
use crate::pdg::ParticleId;

/// The kind of interaction an [`InteractionInfo`] or [`Interaction`]
/// describes. An open integer tag, per the original model, with reserved
/// values below and room for downstream extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionType {
    /// No interaction occurs; the sentinel value.
    No,
    /// Charged-current neutrino interaction.
    ChargedCurrent,
    /// Neutral-current neutrino interaction.
    NeutralCurrent,
    /// Charged-lepton decay.
    Decay,
    /// UHECR shower maximum.
    ShowerMax,
    /// An interaction type outside the reserved set.
    Other(i32),
}

impl InteractionType {
    /// The open integer tag of this interaction type.
    #[must_use]
    pub fn tag(self) -> i32 {
        match self {
            Self::No => 0,
            Self::ChargedCurrent => 1,
            Self::NeutralCurrent => 2,
            Self::Decay => 3,
            Self::ShowerMax => 100,
            Self::Other(tag) => tag,
        }
    }
}

/// The next-interaction sample produced by a particle: either a grammage
/// (column density) threshold or a lab-frame lifetime/path threshold.
///
/// The "no interaction" sentinel has `grammage = -1` and `lifetime = -1`,
/// so it never triggers in the propagator's compare-and-emit loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionInfo {
    /// The kind of interaction this sample describes.
    pub interaction_type: InteractionType,
    /// Column density threshold, in g/cm^2. Negative means "never
    /// triggers on grammage".
    pub grammage: f64,
    /// Lab-frame lifetime, in nanoseconds. Negative means "never triggers
    /// on lifetime".
    pub lifetime: f64,
}

impl InteractionInfo {
    /// The sentinel "no interaction" sample: never triggers.
    pub const NONE: Self = Self {
        interaction_type: InteractionType::No,
        grammage: -1.,
        lifetime: -1.,
    };

    /// Construct a grammage-triggered sample.
    #[must_use]
    pub fn grammage(interaction_type: InteractionType, grammage: f64) -> Self {
        Self { interaction_type, grammage, lifetime: -1. }
    }

    /// Construct a lifetime-triggered sample.
    #[must_use]
    pub fn lifetime(interaction_type: InteractionType, lifetime: f64) -> Self {
        Self { interaction_type, grammage: -1., lifetime }
    }
}

/// A single emitted interaction: the state of the propagated particle at
/// the point it was detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    /// The PDG id of the particle at the time of interaction.
    pub pdgid: ParticleId,
    /// The particle's log10 energy (eV) at the time of interaction.
    pub energy: f64,
    /// The kind of interaction that triggered emission.
    pub interaction_type: InteractionType,
    /// The location of the interaction, in geocentric cartesian kilometers.
    pub location: Cartesian,
    /// The particle's direction of travel at the time of interaction.
    pub direction: Cartesian,
    /// Geometric acceptance weight: the dot product of the unit outward
    /// surface normal at the trial's origin with its sampled direction.
    pub weight: f64,
    /// Altitude above the Earth's surface at the interaction location, in
    /// kilometers.
    pub altitude: f64,
}

/// An ordered sequence of interactions emitted from a single trial. The
/// simple propagator emits at most one.
pub type EventTree = Vec<Interaction>;

/// A batch of event trees, one per trial.
pub type Events = Vec<EventTree>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_sentinel_never_triggers() {
        let info = InteractionInfo::NONE;
        assert!(info.grammage < 0.);
        assert!(info.lifetime < 0.);
    }

    #[test]
    fn interaction_type_tags_match_the_reserved_values() {
        assert_eq!(InteractionType::No.tag(), 0);
        assert_eq!(InteractionType::ChargedCurrent.tag(), 1);
        assert_eq!(InteractionType::NeutralCurrent.tag(), 2);
        assert_eq!(InteractionType::Decay.tag(), 3);
        assert_eq!(InteractionType::ShowerMax.tag(), 100);
        assert_eq!(InteractionType::Other(-1).tag(), -1);
    }
}
