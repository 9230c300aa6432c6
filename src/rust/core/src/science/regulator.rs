// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Resonance regulator
//!
//! Caller-side stabilisation loop around the kernel. It turns the wave
//! controls into percent gauges (stability, energy use, collapse risk) and,
//! while engaged, steers frequency and amplitude back toward resonance.
//! All percentages are clamped to [0, 100] here; the kernel itself returns
//! raw physical units.

use serde::{Deserialize, Serialize};

pub const OPTIMAL_FREQUENCY: f64 = 1.5;
pub const OPTIMAL_AMPLITUDE: f64 = 1.0;

/// Engage automatically below this stability (%).
const AUTO_ENGAGE_BELOW: f64 = 40.0;
/// Keep correcting while stability is below this (%).
const CORRECT_BELOW: f64 = 60.0;
/// Fraction of the distance to optimum closed per tick.
const CORRECTION_RATE: f64 = 0.02;

fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatorState {
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
    pub drr_active: bool,
    /// Ticks since start (one tick per UI poll).
    pub system_time: f64,
}

impl Default for RegulatorState {
    fn default() -> Self {
        Self {
            frequency: OPTIMAL_FREQUENCY,
            amplitude: OPTIMAL_AMPLITUDE,
            phase: 0.0,
            drr_active: false,
            system_time: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatorMetrics {
    pub stability: f64,
    pub energy: f64,
    pub collapse_risk: f64,
    pub resonance_depth: f64,
    pub spacetime_curvature: f64,
}

impl RegulatorMetrics {
    pub fn is_stable(&self) -> bool {
        self.stability > 50.0 && self.collapse_risk < 70.0
    }
}

/// Secondary gauges shown next to the regulator metrics.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub energy_efficiency: f64,
    pub harmonic_stability: f64,
    pub system_health: f64,
}

impl DashboardMetrics {
    pub fn from_metrics(state: &RegulatorState, metrics: &RegulatorMetrics) -> Self {
        let stability = metrics.stability;
        let energy_efficiency = if state.drr_active {
            (stability * 1.2).min(100.0)
        } else {
            stability * 0.8
        };
        let harmonic_stability = (100.0
            - ((state.frequency - OPTIMAL_FREQUENCY).abs() * 20.0
                + (state.amplitude - OPTIMAL_AMPLITUDE).abs() * 15.0))
            .max(0.0);

        DashboardMetrics {
            energy_efficiency,
            harmonic_stability,
            system_health: (stability + energy_efficiency + harmonic_stability) / 3.0,
        }
    }
}

pub struct ResonanceRegulator;

impl ResonanceRegulator {
    pub fn compute_metrics(state: &RegulatorState) -> RegulatorMetrics {
        let t = state.system_time;
        let freq_deviation = (state.frequency - OPTIMAL_FREQUENCY).abs();
        let amp_deviation = (state.amplitude - OPTIMAL_AMPLITUDE).abs();

        let mut base_stability = 100.0 - (freq_deviation * 30.0 + amp_deviation * 25.0);
        let resonance_depth = if state.drr_active {
            base_stability = (base_stability * 1.2).min(100.0);
            (60.0 + (t * 0.1).sin() * 20.0).min(100.0)
        } else {
            0.0
        };

        let stability = clamp_percent(base_stability + (t * 0.05).sin() * 5.0);

        let energy_usage = 30.0 + state.amplitude * 25.0 + state.frequency * 15.0;
        let energy = clamp_percent(energy_usage + (t * 0.08).sin() * 10.0);

        let risk_from_instability = (100.0 - stability).max(0.0);
        let risk_from_energy = if energy > 80.0 {
            (energy - 80.0) * 2.0
        } else {
            0.0
        };
        let collapse_risk = clamp_percent(risk_from_instability + risk_from_energy);

        let spacetime_curvature =
            1.0 + state.amplitude * 2.0 + (t * state.frequency + state.phase).sin() * 0.5;

        RegulatorMetrics {
            stability,
            energy,
            collapse_risk,
            resonance_depth,
            spacetime_curvature,
        }
    }

    /// Advances the loop by one tick.
    ///
    /// Engages regulation when stability drops below 40 %, then nudges the
    /// controls toward resonance for as long as stability stays below 60 %.
    pub fn step(state: &mut RegulatorState, metrics: &RegulatorMetrics) {
        if metrics.stability < AUTO_ENGAGE_BELOW && !state.drr_active {
            tracing::debug!(stability = metrics.stability, "auto-engaging resonance regulation");
            state.drr_active = true;
        }

        if state.drr_active && metrics.stability < CORRECT_BELOW {
            state.frequency += (OPTIMAL_FREQUENCY - state.frequency) * CORRECTION_RATE;
            state.amplitude =
                (state.amplitude + (OPTIMAL_AMPLITUDE - state.amplitude) * CORRECTION_RATE).max(0.0);
        }

        state.system_time += 1.0;
    }

    pub fn reset(state: &mut RegulatorState) {
        state.frequency = OPTIMAL_FREQUENCY;
        state.amplitude = OPTIMAL_AMPLITUDE;
        state.phase = 0.0;
        state.drr_active = false;
    }
}
