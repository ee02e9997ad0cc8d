//! The tau decay product table: an external data file of sampled decay
//! branching fractions, loaded once and retained for the process lifetime.

use crate::error::{Error, Result};
use crate::random::Rng;
use std::path::Path;
use std::sync::OnceLock;

/// One row of the tau decay table: fractional energies carried by each
/// decay product, in the order `(nu_tau, nu_mu, nu_e, hadronic, muon,
/// electron)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayRow {
    /// Fraction carried by the tau neutrino.
    pub nu_tau: f64,
    /// Fraction carried by the muon neutrino.
    pub nu_mu: f64,
    /// Fraction carried by the electron neutrino.
    pub nu_e: f64,
    /// Fraction carried by the hadronic system.
    pub hadronic: f64,
    /// Fraction carried by the muon.
    pub muon: f64,
    /// Fraction carried by the electron.
    pub electron: f64,
}

impl DecayRow {
    fn from_fields(fields: &[f64]) -> Option<Self> {
        if let [nu_tau, nu_mu, nu_e, hadronic, muon, electron] = *fields {
            Some(Self { nu_tau, nu_mu, nu_e, hadronic, muon, electron })
        } else {
            None
        }
    }

    /// The largest of the three neutrino fractions in this row, returned as
    /// `(pdg id of the carrier, fraction)` among `{nu_tau, nu_mu, nu_e}`.
    #[must_use]
    pub fn leading_neutrino(&self) -> (crate::pdg::ParticleId, f64) {
        let candidates = [
            (crate::pdg::TAU_NEUTRINO, self.nu_tau),
            (crate::pdg::MUON_NEUTRINO, self.nu_mu),
            (crate::pdg::ELECTRON_NEUTRINO, self.nu_e),
        ];
        candidates
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .expect("candidates is non-empty")
    }
}

/// A loaded table of tau decay rows, sampled uniformly at random.
#[derive(Debug, Clone)]
pub struct TauDecayTable {
    rows: Vec<DecayRow>,
}

impl TauDecayTable {
    /// Build a table directly from in-memory rows, bypassing the file
    /// loader. Useful for tests and for embedding a table at compile time.
    ///
    /// # Errors
    /// Returns [`Error::Malformed`] if `rows` is empty.
    pub fn from_rows(rows: Vec<DecayRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::Malformed("tau decay table has no rows".into()));
        }
        Ok(Self { rows })
    }

    /// Load a table from a whitespace-separated text file of 6 columns per
    /// row.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Malformed`] if any row does not parse as 6 floats.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut rows = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<f64> = line
                .split_whitespace()
                .map(str::parse)
                .collect::<std::result::Result<_, _>>()
                .map_err(|_| Error::Malformed(format!("non-numeric row: {line}")))?;
            let row = DecayRow::from_fields(&fields)
                .ok_or_else(|| Error::Malformed(format!("expected 6 columns, got: {line}")))?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Draw a uniformly random row from the table.
    pub fn sample(&self, rng: &mut Rng) -> DecayRow {
        let index = rng.uniform_int(0, self.rows.len() as i64 - 1) as usize;
        self.rows[index]
    }

    /// The number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows. Always `false` for a successfully
    /// constructed table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

static TABLE: OnceLock<TauDecayTable> = OnceLock::new();

/// Load the process-wide tau decay table from `path` on first use, and
/// retain it for the remainder of the process lifetime. Subsequent calls
/// with a different path are ignored once the table is loaded.
///
/// # Errors
/// Returns [`Error::Io`] or [`Error::Malformed`] if the table has not yet
/// been loaded and `path` cannot be read or parsed.
pub fn get_or_load(path: impl AsRef<Path>) -> Result<&'static TauDecayTable> {
    if let Some(table) = TABLE.get() {
        return Ok(table);
    }
    let table = TauDecayTable::load(path)?;
    Ok(TABLE.get_or_init(|| table))
}
