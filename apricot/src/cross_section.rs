//! Parametric neutrino cross-section and inelasticity (y-factor) models.

use crate::config::{CrossSectionModel, YFactorModel};

/// Evaluate a cubic polynomial `a0 + a1*e + a2*e^2 + a3*e^3`.
fn cubic(coeffs: [f64; 4], e: f64) -> f64 {
    let [a0, a1, a2, a3] = coeffs;
    a0 + e * (a1 + e * (a2 + e * a3))
}

const CC_LOWER: [f64; 4] = [-42.635_501_4, 0.489_151_126, 0.029_497_502_5, -0.001_329_698_32];
const CC_MIDDLE: [f64; 4] = [-53.540_018_0, 2.659_015_51, -0.114_017_685, 0.001_824_954_42];
const CC_UPPER: [f64; 4] = [-53.107_836_3, 2.729_957_42, -0.128_808_188, 0.002_368_002_61];

const NC_LOWER: [f64; 4] = [-44.237_702_8, 0.707_758_518, 0.015_592_514_6, -0.001_024_847_63];
const NC_MIDDLE: [f64; 4] = [-54.146_339_9, 2.654_651_69, -0.111_848_922, 0.001_754_696_43];
const NC_UPPER: [f64; 4] = [-53.671_330_2, 2.725_288_13, -0.127_067_769, 0.002_312_352_93];

/// `log10(sigma * N_target)` for the charged-current channel, in g/cm^2 per
/// g/mol units. `log_energy_ev` is `log10(E/eV)`.
#[must_use]
pub fn log_cc_cross_section(model: CrossSectionModel, log_energy_ev: f64) -> f64 {
    match model {
        CrossSectionModel::ConnollyLower => cubic(CC_LOWER, log_energy_ev),
        CrossSectionModel::ConnollyMiddle => cubic(CC_MIDDLE, log_energy_ev),
        CrossSectionModel::ConnollyUpper => cubic(CC_UPPER, log_energy_ev),
        CrossSectionModel::Gorham => gorham_cc(log_energy_ev),
    }
}

/// `log10(sigma * N_target)` for the neutral-current channel.
#[must_use]
pub fn log_nc_cross_section(model: CrossSectionModel, log_energy_ev: f64) -> f64 {
    match model {
        CrossSectionModel::ConnollyLower => cubic(NC_LOWER, log_energy_ev),
        CrossSectionModel::ConnollyMiddle => cubic(NC_MIDDLE, log_energy_ev),
        CrossSectionModel::ConnollyUpper => cubic(NC_UPPER, log_energy_ev),
        CrossSectionModel::Gorham => gorham_cc(log_energy_ev) - 2.39_f64.log10(),
    }
}

fn gorham_cc(log_energy_ev: f64) -> f64 {
    let u = (log_energy_ev - 9.) / std::f64::consts::LN_10;
    (1e-36 * (82.893 - 98.8 * u.powf(-0.0964)).exp()).log10()
}

/// The mean inelasticity (y-factor) at a given log energy, for the domain
/// `E in [6, 21]`.
#[must_use]
pub fn y_factor(model: YFactorModel, log_energy_ev: f64) -> f64 {
    let u = std::f64::consts::LN_10 * (log_energy_ev - 9.);
    let (y0, y1, y2) = match (model, log_energy_ev <= 17.) {
        (YFactorModel::Bdhm, true) => (0.909, -0.0595, 1.17e-3),
        (YFactorModel::Bdhm, false) => (0.654, -0.0335, 5.01e-4),
        (YFactorModel::Soyez, true) => (1.08, -0.0855, 2.07e-3),
        (YFactorModel::Soyez, false) => (0.478, -0.0205, 2.98e-4),
        (YFactorModel::Allm, true) => (1.17, -0.0999, 2.59e-3),
        (YFactorModel::Allm, false) => (0.356, -0.0125, 2.27e-4),
    };
    y0 + y1 * u + y2 * u * u
}
