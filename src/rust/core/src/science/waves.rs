// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use crate::constants::PhysicalConstants;
use crate::formulas::luminosity_distance;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GravitationalWave {
    #[serde(rename = "h_plus")]
    pub h_plus: f64,
    #[serde(rename = "h_cross")]
    pub h_cross: f64,
    pub strain: f64,
    pub luminosity_distance: f64,
}

pub struct WaveEngine;

impl WaveEngine {
    /// Plane wave observed at `distance` (m), evaluated at retarded time t - d/c.
    pub fn simulate_gravitational_wave(
        constants: &PhysicalConstants,
        time: f64,
        frequency: f64,
        amplitude: f64,
        phase: f64,
        distance: f64,
    ) -> GravitationalWave {
        let omega = 2.0 * std::f64::consts::PI * frequency;
        let retarded_time = time - distance / constants.c;
        let argument = omega * retarded_time + phase;

        let h_plus = amplitude * argument.cos();
        let h_cross = amplitude * argument.sin();

        GravitationalWave {
            h_plus,
            h_cross,
            strain: (h_plus * h_plus + h_cross * h_cross).sqrt(),
            luminosity_distance: luminosity_distance(distance),
        }
    }
}
