// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Gravitational-wave data model
//!
//! Inspiral chirp generation, a three-site detector response with synthetic
//! noise, and SNR classification. The module carries its own rounded
//! constants (M☉ = 1.989e30 kg, 1 Mpc = 3.086e22 m) independent of the
//! kernel's constant tables.

use crate::formulas::{chirp_mass, ligo_sensitivity, virgo_sensitivity};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const G: f64 = 6.674_30e-11;
const C: f64 = 299_792_458.0;
const SOLAR_MASS_KG: f64 = 1.989e30;
const MPC_M: f64 = 3.086e22;

/// Reference noise strain for one second of integration.
const NOISE_FLOOR_STRAIN: f64 = 1e-23;

pub const DETECTION_THRESHOLD: f64 = 8.0;
const MARGINAL_THRESHOLD: f64 = 5.0;
const WEAK_THRESHOLD: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChirpSample {
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
    pub strain: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorResponse {
    pub hanford: f64,
    pub livingston: f64,
    pub virgo: f64,
    pub noise: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Significance {
    #[serde(rename = "No detection")]
    NoDetection,
    #[serde(rename = "Weak signal")]
    WeakSignal,
    #[serde(rename = "Marginal detection")]
    MarginalDetection,
    #[serde(rename = "Confident detection")]
    ConfidentDetection,
}

impl Significance {
    /// Tier for an SNR value. Thresholds are exclusive.
    pub fn classify(snr: f64) -> Self {
        if snr > DETECTION_THRESHOLD {
            Significance::ConfidentDetection
        } else if snr > MARGINAL_THRESHOLD {
            Significance::MarginalDetection
        } else if snr > WEAK_THRESHOLD {
            Significance::WeakSignal
        } else {
            Significance::NoDetection
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Significance::NoDetection => "No detection",
            Significance::WeakSignal => "Weak signal",
            Significance::MarginalDetection => "Marginal detection",
            Significance::ConfidentDetection => "Confident detection",
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnrResult {
    pub snr: f64,
    pub detection_threshold: f64,
    pub significance: Significance,
}

/// Catalogued detection used for presets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct KnownEvent {
    pub name: &'static str,
    pub mass1: f64,     // M☉
    pub mass2: f64,     // M☉
    pub distance: f64,  // Mpc
    pub frequency: f64, // Hz at merger
    pub strain: f64,
    pub duration: f64, // s
}

pub const KNOWN_EVENTS: [KnownEvent; 3] = [
    KnownEvent {
        name: "GW150914",
        mass1: 36.0,
        mass2: 29.0,
        distance: 410.0,
        frequency: 250.0,
        strain: 1.0e-21,
        duration: 0.2,
    },
    KnownEvent {
        name: "GW170817",
        mass1: 1.17,
        mass2: 1.60,
        distance: 40.0,
        frequency: 300.0,
        strain: 3.0e-22,
        duration: 100.0,
    },
    KnownEvent {
        name: "GW191204_171526",
        mass1: 30.1,
        mass2: 9.1,
        distance: 1500.0,
        frequency: 200.0,
        strain: 5.0e-22,
        duration: 0.1,
    },
];

pub struct GravitationalWaveData;

impl GravitationalWaveData {
    pub fn known_event(name: &str) -> Option<&'static KnownEvent> {
        KNOWN_EVENTS.iter().find(|e| e.name == name)
    }

    /// Inspiral sample at `time` for a binary of `mass1`, `mass2` (M☉) at
    /// `distance` (Mpc).
    ///
    /// Requires `initial_freq > 0` and `distance > 0`; other inputs give
    /// non-finite output.
    pub fn generate_chirp(
        time: f64,
        initial_freq: f64,
        mass1: f64,
        mass2: f64,
        distance: f64,
    ) -> ChirpSample {
        let pi = std::f64::consts::PI;
        let m_chirp = chirp_mass(mass1, mass2) * SOLAR_MASS_KG;
        // G·M_c/c³, the chirp mass as a time (s)
        let t_chirp = m_chirp * G / C.powi(3);

        // post-Newtonian frequency evolution
        let tau = time * (pi * initial_freq).powf(8.0 / 3.0) * t_chirp.powf(5.0 / 3.0);
        let frequency = initial_freq * (1.0 + tau).powf(-3.0 / 8.0);

        let distance_m = distance * MPC_M;
        let amplitude = 4.0 * G * m_chirp * (pi * frequency).powf(2.0 / 3.0) / (C * C * distance_m);

        let phase = -2.0 * (pi * frequency * t_chirp).powf(-5.0 / 3.0) / 5.0;

        let strain = amplitude * (2.0 * pi * frequency * time + phase).sin();

        ChirpSample {
            frequency,
            amplitude,
            phase,
            strain,
        }
    }

    /// Response of Hanford, Livingston and Virgo to `strain` at `frequency`.
    ///
    /// Noise is drawn from `rng`: thermal and quantum terms are uniform, the
    /// seismic wall is deterministic. Each channel gets its own jitter of
    /// ±noise/2. `_time` is kept for callers that pass the sample time.
    pub fn simulate_detector_response<R: Rng + ?Sized>(
        strain: f64,
        frequency: f64,
        _time: f64,
        rng: &mut R,
    ) -> DetectorResponse {
        let hanford_sensitivity = ligo_sensitivity(frequency);
        let livingston_sensitivity = ligo_sensitivity(frequency);
        let virgo_sensitivity = virgo_sensitivity(frequency);

        let thermal_noise = 1e-23 * rng.gen::<f64>();
        let quantum_noise = 1e-24 * frequency.sqrt() * rng.gen::<f64>();
        let seismic_noise = if frequency < 10.0 {
            1e-20 / frequency
        } else {
            1e-23
        };
        let total_noise = (thermal_noise * thermal_noise
            + quantum_noise * quantum_noise
            + seismic_noise * seismic_noise)
            .sqrt();

        DetectorResponse {
            hanford: strain * hanford_sensitivity + total_noise * (rng.gen::<f64>() - 0.5),
            livingston: strain * livingston_sensitivity + total_noise * (rng.gen::<f64>() - 0.5),
            virgo: strain * virgo_sensitivity + total_noise * (rng.gen::<f64>() - 0.5),
            noise: total_noise,
        }
    }

    /// SNR against the LIGO curve, with noise falling as 1/√duration.
    pub fn calculate_snr(strain: f64, frequency: f64, duration: f64) -> SnrResult {
        let sensitivity = ligo_sensitivity(frequency);
        let noise_strain = NOISE_FLOOR_STRAIN / duration.sqrt();
        let snr = strain * sensitivity / noise_strain;

        SnrResult {
            snr,
            detection_threshold: DETECTION_THRESHOLD,
            significance: Significance::classify(snr),
        }
    }
}
