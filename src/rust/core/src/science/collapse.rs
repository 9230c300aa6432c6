// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keeps 1/growth finite right at the instability boundary.
const GROWTH_EPSILON: f64 = 1e-6;

/// Time until collapse. `Infinite` when the throat is stable.
///
/// On the wire this is a bare number of seconds or the string `"infinite"`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CollapseTimeRepr", into = "CollapseTimeRepr")]
pub enum CollapseTime {
    Infinite,
    Seconds(f64),
}

const INFINITE_LABEL: &str = "infinite";

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CollapseTimeRepr {
    Seconds(f64),
    Label(String),
}

impl From<CollapseTime> for CollapseTimeRepr {
    fn from(time: CollapseTime) -> Self {
        match time {
            CollapseTime::Infinite => CollapseTimeRepr::Label(INFINITE_LABEL.to_string()),
            CollapseTime::Seconds(s) => CollapseTimeRepr::Seconds(s),
        }
    }
}

impl TryFrom<CollapseTimeRepr> for CollapseTime {
    type Error = String;

    fn try_from(repr: CollapseTimeRepr) -> Result<Self, Self::Error> {
        match repr {
            CollapseTimeRepr::Seconds(s) => Ok(CollapseTime::Seconds(s)),
            CollapseTimeRepr::Label(label) if label == INFINITE_LABEL => Ok(CollapseTime::Infinite),
            CollapseTimeRepr::Label(label) => Err(format!(
                "unknown collapse time {:?}, expected seconds or \"{}\"",
                label, INFINITE_LABEL
            )),
        }
    }
}

impl CollapseTime {
    pub fn is_infinite(&self) -> bool {
        matches!(self, CollapseTime::Infinite)
    }

    /// Seconds as a float, `f64::INFINITY` for a stable throat.
    pub fn as_secs_f64(&self) -> f64 {
        match self {
            CollapseTime::Infinite => f64::INFINITY,
            CollapseTime::Seconds(s) => *s,
        }
    }
}

impl fmt::Display for CollapseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapseTime::Infinite => write!(f, "∞"),
            CollapseTime::Seconds(s) => write!(f, "{:.2}s", s),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollapseRisk {
    pub probability: f64,
    pub time_to_collapse: CollapseTime,
    pub critical_amplitude: f64,
}

pub struct CollapseEngine;

impl CollapseEngine {
    /// Linear perturbation estimate of throat collapse.
    ///
    /// A perturbation above 0.1·stability grows; probability is the squared
    /// excess, capped at 1.
    ///
    /// `energy_density` is part of the signature but does not enter the
    /// estimate.
    pub fn calculate_collapse_risk(
        stability_factor: f64,
        _energy_density: f64,
        perturbation_amplitude: f64,
    ) -> CollapseRisk {
        let critical_amplitude = 0.1 * stability_factor;
        let perturbation_growth = perturbation_amplitude / critical_amplitude;

        // f64::max drops NaN, so 0/0 (zero stability, zero perturbation) reads as stable
        let growth_rate = (perturbation_growth - 1.0).max(0.0);
        let probability = (growth_rate * growth_rate).min(1.0);

        let time_to_collapse = if probability > 0.0 {
            CollapseTime::Seconds(1.0 / (growth_rate + GROWTH_EPSILON))
        } else {
            CollapseTime::Infinite
        };

        CollapseRisk {
            probability,
            time_to_collapse,
            critical_amplitude,
        }
    }
}
