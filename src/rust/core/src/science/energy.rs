// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::constants::{ExoticMatterParameters, PhysicalConstants, OPERATION_WINDOW_S};
use crate::formulas::tidal_force;
use serde::{Deserialize, Serialize};

/// Empirical scale on the wave energy term (not derived).
const GW_ENERGY_SCALE: f64 = 1e12;

/// Fraction of exotic energy spent on stabilization at zero stability.
const STABILIZATION_FRACTION: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRequirements {
    pub total_energy: f64,        // J
    pub power_consumption: f64,   // W
    pub exotic_matter_mass: f64,  // kg
    pub casimir_contribution: f64, // J
}

pub struct EnergyEngine;

impl EnergyEngine {
    /// Energy budget for holding the throat open.
    ///
    /// Four terms: exotic-matter rest energy, Casimir energy, wave energy and
    /// stabilization energy. Power is the total spread over a 1000 s window.
    /// Negative source quantities enter as magnitudes, so every field is ≥ 0
    /// for stability in [0, 1].
    pub fn calculate_energy_requirements(
        constants: &PhysicalConstants,
        exotic: &ExoticMatterParameters,
        throat_radius: f64,
        stability_factor: f64,
        wave_amplitude: f64,
    ) -> EnergyRequirements {
        let pi = std::f64::consts::PI;
        let volume = (4.0 / 3.0) * pi * throat_radius.powi(3);
        let surface_area = 4.0 * pi * throat_radius * throat_radius;

        let exotic_matter_mass = (exotic.density * volume).abs();
        let exotic_energy = exotic_matter_mass * constants.c2();

        let casimir_energy = (exotic.casimir_pressure * surface_area * throat_radius).abs();

        let gw_energy = 0.5 * wave_amplitude * wave_amplitude * volume * GW_ENERGY_SCALE;

        let stabilization_energy =
            (1.0 - stability_factor) * exotic_energy * STABILIZATION_FRACTION;

        let total_energy = exotic_energy + casimir_energy + gw_energy + stabilization_energy;

        EnergyRequirements {
            total_energy,
            power_consumption: total_energy / OPERATION_WINDOW_S,
            exotic_matter_mass,
            casimir_contribution: casimir_energy,
        }
    }

    /// Tidal force on a test object at the throat (N).
    ///
    /// `radius` must be non-zero; the kernel checks this before calling.
    pub fn calculate_tidal_forces(
        constants: &PhysicalConstants,
        radius: f64,
        mass: f64,
        test_object_mass: f64,
    ) -> f64 {
        tidal_force(constants.g, radius, mass, test_object_mass)
    }
}
