// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::constants::{PhysicalConstants, REFERENCE_MASS_KG};
use crate::formulas::schwarzschild_radius;
use serde::{Deserialize, Serialize};

pub const MIN_FREQUENCY_HZ: f64 = 0.01;
pub const MAX_FREQUENCY_HZ: f64 = 1000.0;
pub const MAX_STRAIN: f64 = 1e-18;
/// Upper end of the throat-radius gauge (m), raised to r_s when the
/// Schwarzschild limit lies above it.
pub const MAX_THROAT_RADIUS_M: f64 = 1e6;

pub const WARN_FREQUENCY: &str = "Frequency outside detectable range (10mHz - 1kHz)";
pub const WARN_AMPLITUDE: &str = "Amplitude exceeds LIGO sensitivity threshold";
pub const WARN_THROAT_RADIUS: &str = "Throat radius below Schwarzschild limit";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRange {
    pub min: f64,
    pub max: f64,
    pub current: f64,
    pub unit: String,
}

impl ConstraintRange {
    fn new(min: f64, max: f64, current: f64, unit: &str) -> Self {
        ConstraintRange {
            min,
            max,
            current,
            unit: unit.to_string(),
        }
    }

    pub fn contains_current(&self) -> bool {
        self.current >= self.min && self.current <= self.max
    }
}

/// Gauges for every checked parameter, always populated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    pub frequency: ConstraintRange,
    pub amplitude: ConstraintRange,
    pub throat_radius: ConstraintRange,
}

impl Constraints {
    /// (name, range) in check order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ConstraintRange)> {
        [
            ("frequency", &self.frequency),
            ("amplitude", &self.amplitude),
            ("throatRadius", &self.throat_radius),
        ]
        .into_iter()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub constraints: Constraints,
}

pub struct ValidationEngine;

impl ValidationEngine {
    /// Checks frequency, amplitude and throat radius, in that order.
    ///
    /// An out-of-band frequency or a sub-Schwarzschild throat invalidates the
    /// parameters. An amplitude above the strain threshold only warns.
    pub fn validate_parameters(
        constants: &PhysicalConstants,
        frequency: f64,
        amplitude: f64,
        throat_radius: f64,
    ) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut is_valid = true;

        if !(MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&frequency) {
            warnings.push(WARN_FREQUENCY.to_string());
            is_valid = false;
        }

        if amplitude > MAX_STRAIN {
            warnings.push(WARN_AMPLITUDE.to_string());
        }

        let r_s = schwarzschild_radius(constants.g, constants.c, REFERENCE_MASS_KG);
        if throat_radius < r_s {
            warnings.push(WARN_THROAT_RADIUS.to_string());
            is_valid = false;
        }

        ValidationResult {
            is_valid,
            warnings,
            constraints: Constraints {
                frequency: ConstraintRange::new(
                    MIN_FREQUENCY_HZ,
                    MAX_FREQUENCY_HZ,
                    frequency,
                    "Hz",
                ),
                amplitude: ConstraintRange::new(0.0, MAX_STRAIN, amplitude, "strain"),
                throat_radius: ConstraintRange::new(
                    r_s,
                    r_s.max(MAX_THROAT_RADIUS_M),
                    throat_radius,
                    "m",
                ),
            },
        }
    }
}
