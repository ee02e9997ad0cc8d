//! PDG particle numbering scheme constants.

/// A signed PDG particle ID.
pub type ParticleId = i64;

/// Electron neutrino.
pub const ELECTRON_NEUTRINO: ParticleId = 12;
/// Muon neutrino.
pub const MUON_NEUTRINO: ParticleId = 14;
/// Tau neutrino.
pub const TAU_NEUTRINO: ParticleId = 16;
/// Electron.
pub const ELECTRON: ParticleId = 11;
/// Muon.
pub const MUON: ParticleId = 13;
/// Tau.
pub const TAU: ParticleId = 15;
/// Proton.
pub const PROTON: ParticleId = 2212;
/// Helium-4 nucleus, in `100ZZZAAA0` nuclear-code form.
pub const HELIUM: ParticleId = 1_000_020_040;
/// Nitrogen-14 nucleus.
pub const NITROGEN: ParticleId = 1_000_070_140;
/// Iron-56 nucleus.
pub const IRON: ParticleId = 1_000_260_560;
/// Sentinel ID for a mixed/generic UHECR species with no single nuclear code.
pub const APRICOTINO: ParticleId = 0;

/// Rest mass of the electron, as log10(eV/c^2).
pub const ELECTRON_MASS_EV: f64 = 0.510998e6;
/// Rest mass of the muon, as log10(eV/c^2).
pub const MUON_MASS_EV: f64 = 105.66e6;
/// Rest mass of the tau, as log10(eV/c^2).
pub const TAU_MASS_EV: f64 = 1776.86e6;
