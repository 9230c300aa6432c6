// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Wormhole Core
// WormholeKernel: Rust/WASM Physics Orchestrator
//

// ============================================================================
// WormholeKernel: one simulation tick
// ============================================================================
// Runs every engine in order for the current controls:
//   Validator → Energy → Metric → Collapse → Wave → GW data
// The UI loop calls this once per poll and keeps whatever history it needs.
// ============================================================================

use crate::constants::{
    ExoticMatterParameters, PhysicalConstants, DEFAULT_TEST_OBJECT_MASS,
};
use crate::error::{WormholeError, WormholeResult};
use crate::export::{generate_data_export, ExportRecord};
use crate::science::{
    chirp::{ChirpSample, DetectorResponse, GravitationalWaveData, Significance, SnrResult},
    collapse::{CollapseEngine, CollapseRisk, CollapseTime},
    energy::{EnergyEngine, EnergyRequirements},
    metric::{MetricEngine, SpacetimeMetric},
    validation::{ValidationEngine, ValidationResult, WARN_AMPLITUDE},
    waves::{GravitationalWave, WaveEngine},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Reference binary for the chirp panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChirpConfig {
    pub mass1: f64,        // M☉
    pub mass2: f64,        // M☉
    pub distance_mpc: f64, // Mpc
    /// Simulated seconds per tick.
    pub time_scale: f64,
    /// Integration time for the SNR estimate (s).
    pub snr_duration: f64,
}

impl Default for ChirpConfig {
    fn default() -> Self {
        Self {
            mass1: 30.0,
            mass2: 20.0,
            distance_mpc: 400.0,
            time_scale: 0.1,
            snr_duration: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub constants: PhysicalConstants,
    pub exotic_matter: ExoticMatterParameters,
    pub chirp: ChirpConfig,
    /// Metric and curvature are probed at this multiple of the throat radius.
    pub metric_probe_factor: f64,
    /// Converts the energy gauge (%) into an energy density (J/m³).
    pub energy_density_scale: f64,
    /// Observer distance for the wave model (m).
    pub observer_distance: f64,
    pub test_object_mass: f64,
    pub enable_wave: bool,
    /// Chirp, detector response and SNR.
    pub enable_gw_data: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            constants: PhysicalConstants::SI,
            exotic_matter: ExoticMatterParameters::DEFAULT,
            chirp: ChirpConfig::default(),
            metric_probe_factor: 2.0,
            energy_density_scale: 1e12,
            observer_distance: 1.0,
            test_object_mass: DEFAULT_TEST_OBJECT_MASS,
            enable_wave: true,
            enable_gw_data: true,
        }
    }
}

impl EngineConfig {
    /// Partial JSON config; missing fields keep their defaults.
    pub fn from_json(json: &str) -> WormholeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// INPUTS
// ============================================================================

/// Wave controls. Owned by the caller, only read here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub frequency: f64,     // Hz
    pub amplitude: f64,
    pub phase: f64,         // rad
    pub throat_radius: f64, // m
}

impl SimulationParameters {
    /// Named values for the export record.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("frequency".to_string(), self.frequency),
            ("amplitude".to_string(), self.amplitude),
            ("phase".to_string(), self.phase),
            ("throatRadius".to_string(), self.throat_radius),
        ])
    }
}

/// Gauges the caller carries between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickContext {
    pub stability: f64,   // %
    pub energy: f64,      // %
    pub system_time: f64, // ticks
}

impl Default for TickContext {
    fn default() -> Self {
        Self {
            stability: 75.0,
            energy: 45.0,
            system_time: 0.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickRequest {
    pub parameters: SimulationParameters,
    #[serde(default)]
    pub context: TickContext,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

// ============================================================================
// OUTPUTS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationEvent {
    fn new(topic: &str, message: String, severity: Severity) -> Self {
        ValidationEvent {
            topic: topic.to_string(),
            message,
            severity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    pub validation: ValidationResult,
    pub energy: EnergyRequirements,
    pub tidal_force: f64,
    pub metric: SpacetimeMetric,
    pub ricci_scalar: f64,
    pub collapse: CollapseRisk,
    pub wave: Option<GravitationalWave>,
    pub chirp: Option<ChirpSample>,
    pub detector: Option<DetectorResponse>,
    pub snr: Option<SnrResult>,
    pub events: Vec<ValidationEvent>,
    pub compute_time_ms: f64,
}

impl TickReport {
    /// Flat named metrics for export. A stable throat has no collapse time
    /// and the entry is left out.
    pub fn computed_metrics(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::from([
            ("g_tt".to_string(), self.metric.g_tt),
            ("g_rr".to_string(), self.metric.g_rr),
            ("g_theta".to_string(), self.metric.g_theta),
            ("g_phi".to_string(), self.metric.g_phi),
            ("ricciScalar".to_string(), self.ricci_scalar),
            ("totalEnergy".to_string(), self.energy.total_energy),
            ("powerConsumption".to_string(), self.energy.power_consumption),
            ("exoticMatterMass".to_string(), self.energy.exotic_matter_mass),
            ("casimirContribution".to_string(), self.energy.casimir_contribution),
            ("tidalForce".to_string(), self.tidal_force),
            ("collapseProbability".to_string(), self.collapse.probability),
            ("criticalAmplitude".to_string(), self.collapse.critical_amplitude),
        ]);

        if let CollapseTime::Seconds(s) = self.collapse.time_to_collapse {
            metrics.insert("timeToCollapse".to_string(), s);
        }
        if let Some(wave) = &self.wave {
            metrics.insert("h_plus".to_string(), wave.h_plus);
            metrics.insert("h_cross".to_string(), wave.h_cross);
            metrics.insert("strain".to_string(), wave.strain);
        }
        if let Some(chirp) = &self.chirp {
            metrics.insert("chirpFrequency".to_string(), chirp.frequency);
            metrics.insert("chirpStrain".to_string(), chirp.strain);
        }
        if let Some(snr) = &self.snr {
            metrics.insert("snr".to_string(), snr.snr);
        }
        metrics
    }
}

// ============================================================================
// KERNEL
// ============================================================================

#[wasm_bindgen]
pub struct WormholeKernel;

#[wasm_bindgen]
impl WormholeKernel {
    /// Runs one tick from a JSON request.
    ///
    /// Request: `{"parameters": {...}, "context"?: {...}, "config"?: {...}}`.
    /// Returns the serialized `TickReport`, or `{"error": "..."}` when the
    /// request can't be parsed or the parameters or config are outside the
    /// domain.
    #[wasm_bindgen]
    pub fn compute_tick_json(request_json: &str) -> String {
        let result = Self::parse_request(request_json).and_then(|request| {
            let config = request.config.unwrap_or_default();
            let report = Self::compute_tick(
                &config,
                &request.parameters,
                &request.context,
                &mut rand::thread_rng(),
            )?;
            Ok(serde_json::to_string(&report)?)
        });
        result.unwrap_or_else(|e| Self::error_json(&e))
    }

    /// Runs one tick and returns the export document for it.
    ///
    /// `timestamp_ms` comes straight from `Date.now()`. Fractional
    /// milliseconds are truncated; NaN and ±∞ are rejected.
    #[wasm_bindgen]
    pub fn export_json(request_json: &str, timestamp_ms: f64) -> String {
        let result = Self::parse_request(request_json).and_then(|request| {
            let timestamp_ms = Self::timestamp_millis(timestamp_ms)?;
            let config = request.config.unwrap_or_default();
            let report = Self::compute_tick(
                &config,
                &request.parameters,
                &request.context,
                &mut rand::thread_rng(),
            )?;
            let record = Self::export(&config, timestamp_ms, &request.parameters, &report)?;
            record.to_json_pretty()
        });
        result.unwrap_or_else(|e| Self::error_json(&e))
    }
}

/// Pure Rust Implementation (Non-WASM-Bindgen)
impl WormholeKernel {
    pub fn parse_request(request_json: &str) -> WormholeResult<TickRequest> {
        Ok(serde_json::from_str(request_json)?)
    }

    fn error_json(err: &WormholeError) -> String {
        serde_json::json!({ "error": err.to_string() }).to_string()
    }

    /// JS timestamps arrive as f64; a NaN would otherwise cast to the epoch.
    fn timestamp_millis(timestamp_ms: f64) -> WormholeResult<i64> {
        if !timestamp_ms.is_finite() {
            return Err(WormholeError::Serialization(format!(
                "timestamp {} is not a finite number of milliseconds",
                timestamp_ms
            )));
        }
        Ok(timestamp_ms.trunc() as i64)
    }

    /// Rejects inputs the closed forms are undefined for.
    ///
    /// The engines themselves stay unguarded; this is the only place a
    /// zero throat or zero frequency is caught.
    pub fn check_domain(params: &SimulationParameters, context: &TickContext) -> WormholeResult<()> {
        let finite = [
            ("frequency", params.frequency),
            ("amplitude", params.amplitude),
            ("phase", params.phase),
            ("throat_radius", params.throat_radius),
            ("stability", context.stability),
            ("energy", context.energy),
            ("system_time", context.system_time),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(WormholeError::domain(name, value, "must be finite"));
            }
        }
        if params.throat_radius <= 0.0 {
            return Err(WormholeError::domain(
                "throat_radius",
                params.throat_radius,
                "must be positive",
            ));
        }
        if params.frequency <= 0.0 {
            return Err(WormholeError::domain(
                "frequency",
                params.frequency,
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Rejects configurations that would push non-finite values through the
    /// pipeline. Caller JSON can override every field, the constant tables
    /// included.
    pub fn check_config(config: &EngineConfig) -> WormholeResult<()> {
        let k = &config.constants;
        let finite = [
            ("constants.G", k.g),
            ("constants.c", k.c),
            ("constants.h", k.h),
            ("constants.k_B", k.k_b),
            ("exotic_matter.density", config.exotic_matter.density),
            ("exotic_matter.casimir_pressure", config.exotic_matter.casimir_pressure),
            ("chirp.mass1", config.chirp.mass1),
            ("chirp.mass2", config.chirp.mass2),
            ("chirp.distance_mpc", config.chirp.distance_mpc),
            ("chirp.time_scale", config.chirp.time_scale),
            ("chirp.snr_duration", config.chirp.snr_duration),
            ("metric_probe_factor", config.metric_probe_factor),
            ("energy_density_scale", config.energy_density_scale),
            ("observer_distance", config.observer_distance),
            ("test_object_mass", config.test_object_mass),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(WormholeError::domain(name, value, "must be finite"));
            }
        }

        // r_s, c², c⁴ and the retarded time divide by these
        let positive = [
            ("constants.G", k.g),
            ("constants.c", k.c),
            ("chirp.mass1", config.chirp.mass1),
            ("chirp.mass2", config.chirp.mass2),
            ("chirp.distance_mpc", config.chirp.distance_mpc),
            ("chirp.snr_duration", config.chirp.snr_duration),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(WormholeError::domain(name, value, "must be positive"));
            }
        }

        if config.chirp.time_scale < 0.0 {
            return Err(WormholeError::domain(
                "chirp.time_scale",
                config.chirp.time_scale,
                "must not be negative",
            ));
        }
        Ok(())
    }

    /// [CORE] One simulation tick.
    pub fn compute_tick<R: Rng + ?Sized>(
        config: &EngineConfig,
        params: &SimulationParameters,
        context: &TickContext,
        rng: &mut R,
    ) -> WormholeResult<TickReport> {
        let start = instant::Instant::now();
        Self::check_config(config)?;
        Self::check_domain(params, context)?;

        let k = &config.constants;
        let stability_factor = context.stability / 100.0;
        let energy_density = context.energy * config.energy_density_scale;
        let sim_time = context.system_time * config.chirp.time_scale;

        // 1. Validation
        let validation = ValidationEngine::validate_parameters(
            k,
            params.frequency,
            params.amplitude,
            params.throat_radius,
        );
        if !validation.is_valid {
            tracing::warn!(warnings = ?validation.warnings, "parameters outside physical bounds");
        }

        // 2. Energy budget and tidal load at the throat
        let energy = EnergyEngine::calculate_energy_requirements(
            k,
            &config.exotic_matter,
            params.throat_radius,
            stability_factor,
            params.amplitude,
        );
        let tidal_force = EnergyEngine::calculate_tidal_forces(
            k,
            params.throat_radius,
            energy.exotic_matter_mass,
            config.test_object_mass,
        );

        // 3. Geometry
        let probe_radius = params.throat_radius * config.metric_probe_factor;
        let metric = MetricEngine::calculate_metric(k, probe_radius, params.throat_radius);
        let ricci_scalar = MetricEngine::calculate_ricci_scalar(
            k,
            probe_radius,
            params.throat_radius,
            energy_density,
        );

        // 4. Stability
        let collapse =
            CollapseEngine::calculate_collapse_risk(stability_factor, energy_density, params.amplitude);
        if collapse.probability > 0.0 {
            tracing::warn!(
                probability = collapse.probability,
                time_to_collapse = %collapse.time_to_collapse,
                "throat unstable"
            );
        }

        // 5. Propagating wave
        let wave = config.enable_wave.then(|| {
            WaveEngine::simulate_gravitational_wave(
                k,
                sim_time,
                params.frequency,
                params.amplitude,
                params.phase,
                config.observer_distance,
            )
        });

        // 6. Chirp, detectors, SNR
        let (chirp, detector, snr) = if config.enable_gw_data {
            let chirp = GravitationalWaveData::generate_chirp(
                sim_time,
                params.frequency,
                config.chirp.mass1,
                config.chirp.mass2,
                config.chirp.distance_mpc,
            );
            let detector = GravitationalWaveData::simulate_detector_response(
                chirp.strain,
                chirp.frequency,
                sim_time,
                rng,
            );
            let snr = GravitationalWaveData::calculate_snr(
                chirp.strain,
                chirp.frequency,
                config.chirp.snr_duration,
            );
            (Some(chirp), Some(detector), Some(snr))
        } else {
            (None, None, None)
        };

        let events = Self::collect_events(&validation, &collapse, snr.as_ref());

        let compute_time_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(
            system_time = context.system_time,
            events = events.len(),
            compute_time_ms,
            "tick computed"
        );

        Ok(TickReport {
            validation,
            energy,
            tidal_force,
            metric,
            ricci_scalar,
            collapse,
            wave,
            chirp,
            detector,
            snr,
            events,
            compute_time_ms,
        })
    }

    pub(crate) fn collect_events(
        validation: &ValidationResult,
        collapse: &CollapseRisk,
        snr: Option<&SnrResult>,
    ) -> Vec<ValidationEvent> {
        let mut events = Vec::new();

        for warning in &validation.warnings {
            // the amplitude check never invalidates
            let severity = if warning == WARN_AMPLITUDE {
                Severity::Warning
            } else {
                Severity::Critical
            };
            events.push(ValidationEvent::new(
                "PHYSICS.VALIDATION",
                warning.clone(),
                severity,
            ));
        }

        if collapse.probability > 0.5 {
            events.push(ValidationEvent::new(
                "PHYSICS.COLLAPSE",
                format!(
                    "Collapse probability {:.0}% (time to collapse {})",
                    collapse.probability * 100.0,
                    collapse.time_to_collapse
                ),
                Severity::Critical,
            ));
        }

        if let Some(snr) = snr {
            if snr.significance == Significance::ConfidentDetection {
                events.push(ValidationEvent::new(
                    "PHYSICS.DETECTION",
                    format!("{}: SNR {:.1}", snr.significance, snr.snr),
                    Severity::Info,
                ));
            }
        }

        events
    }

    /// Export record for a computed tick.
    pub fn export(
        config: &EngineConfig,
        timestamp_ms: i64,
        params: &SimulationParameters,
        report: &TickReport,
    ) -> WormholeResult<ExportRecord> {
        generate_data_export(
            &config.constants,
            timestamp_ms,
            &params.to_map(),
            &report.computed_metrics(),
        )
    }
}
