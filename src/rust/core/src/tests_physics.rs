// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Wormhole Kernel Tests
//!
//! End-to-end ticks through the kernel, the JSON bridge and the export path.

use crate::error::WormholeError;
use crate::export::ExportRecord;
use crate::constants::PhysicalConstants;
use crate::physics_kernel::{
    ChirpConfig, EngineConfig, Severity, SimulationParameters, TickContext, WormholeKernel,
};
use crate::science::chirp::{Significance, SnrResult, DETECTION_THRESHOLD};
use crate::science::collapse::{CollapseEngine, CollapseTime};
use crate::science::validation::ValidationEngine;
use crate::science::regulator::{RegulatorState, ResonanceRegulator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn nominal_params() -> SimulationParameters {
    SimulationParameters {
        frequency: 100.0,
        amplitude: 1e-21,
        phase: 0.0,
        throat_radius: 5e4,
    }
}

#[test]
fn test_nominal_tick() {
    println!(" Checking nominal tick (100 Hz, r0 = 50 km)");

    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let report = WormholeKernel::compute_tick(
        &config,
        &nominal_params(),
        &TickContext::default(),
        &mut rng,
    )
    .unwrap();

    // 1. Valid; at most a detection notice
    assert!(report.validation.is_valid, "{:?}", report.validation.warnings);
    assert!(
        report.events.iter().all(|e| e.severity == Severity::Info),
        "events: {:?}",
        report.events
    );

    // 2. Metric probed at 2·r0 → g_rr = 2
    assert_eq!(report.metric.g_rr, 2.0);
    assert_eq!(report.metric.g_theta, 1e5 * 1e5);

    // 3. Ricci at 45 % energy → ρ = 4.5e13 / c²
    assert!(report.ricci_scalar > 0.0);

    // 4. Tiny amplitude at 75 % stability is stable
    assert_eq!(report.collapse.probability, 0.0);
    assert_eq!(report.collapse.time_to_collapse, CollapseTime::Infinite);
    assert!((report.collapse.critical_amplitude - 0.075).abs() < 1e-12);

    // 5. Energy budget positive, tidal force finite
    assert!(report.energy.total_energy > 0.0);
    assert!(report.tidal_force.is_finite() && report.tidal_force > 0.0);

    // 6. All optional stages ran
    assert!(report.wave.is_some());
    let chirp = report.chirp.unwrap();
    assert_eq!(chirp.frequency, 100.0); // system_time 0 → no evolution yet
    assert!(report.detector.is_some());
    assert!(report.snr.is_some());

    println!(" Nominal tick passed in {:.3} ms", report.compute_time_ms);
}

#[test]
fn test_tick_reproducible_with_seed() {
    let config = EngineConfig::default();
    let context = TickContext {
        system_time: 12.0,
        ..TickContext::default()
    };
    let a = WormholeKernel::compute_tick(
        &config,
        &nominal_params(),
        &context,
        &mut StdRng::seed_from_u64(99),
    )
    .unwrap();
    let b = WormholeKernel::compute_tick(
        &config,
        &nominal_params(),
        &context,
        &mut StdRng::seed_from_u64(99),
    )
    .unwrap();
    assert_eq!(a.detector, b.detector);
    assert_eq!(a.chirp, b.chirp);
    assert_eq!(a.energy, b.energy);
}

#[test]
fn test_dashboard_default_controls_raise_events() {
    // Defaults of the control panel: 1.5 Hz, amplitude 1, throat 1 m
    let params = SimulationParameters {
        frequency: 1.5,
        amplitude: 1.0,
        phase: 0.0,
        throat_radius: 1.0,
    };
    let report = WormholeKernel::compute_tick(
        &EngineConfig::default(),
        &params,
        &TickContext::default(),
        &mut StdRng::seed_from_u64(2),
    )
    .unwrap();

    assert!(!report.validation.is_valid);
    let validation_events: Vec<_> = report
        .events
        .iter()
        .filter(|e| e.topic == "PHYSICS.VALIDATION")
        .collect();
    assert_eq!(validation_events.len(), 2);
    assert_eq!(validation_events[0].severity, Severity::Warning); // amplitude
    assert_eq!(validation_events[1].severity, Severity::Critical); // throat

    // amplitude 1 vs critical 0.075 → saturated collapse risk
    assert_eq!(report.collapse.probability, 1.0);
    assert!(report
        .events
        .iter()
        .any(|e| e.topic == "PHYSICS.COLLAPSE" && e.severity == Severity::Critical));
}

#[test]
fn test_confident_detection_event() {
    println!(" Checking detection events per SNR tier");

    let validation = ValidationEngine::validate_parameters(&PhysicalConstants::SI, 100.0, 1e-21, 5e4);
    let collapse = CollapseEngine::calculate_collapse_risk(0.75, 0.0, 1e-21);
    let snr_of = |snr: f64| SnrResult {
        snr,
        detection_threshold: DETECTION_THRESHOLD,
        significance: Significance::classify(snr),
    };

    // SNR 12 → confident → one INFO detection event
    let confident = snr_of(12.0);
    let events = WormholeKernel::collect_events(&validation, &collapse, Some(&confident));
    assert_eq!(events.len(), 1, "events: {:?}", events);
    assert_eq!(events[0].topic, "PHYSICS.DETECTION");
    assert_eq!(events[0].severity, Severity::Info);
    assert!(events[0].message.starts_with("Confident detection"));

    // Threshold is exclusive; marginal and no-detection stay silent
    for snr in [8.0, 6.0, -3.0] {
        let events = WormholeKernel::collect_events(&validation, &collapse, Some(&snr_of(snr)));
        assert!(events.is_empty(), "SNR {} raised {:?}", snr, events);
    }
    assert!(WormholeKernel::collect_events(&validation, &collapse, None).is_empty());
}

#[test]
fn test_detection_event_flows_through_tick() {
    // SNR sign follows the chirp strain, so only some ticks detect at 1 Mpc
    let config = EngineConfig {
        chirp: ChirpConfig {
            distance_mpc: 1.0,
            ..Default::default()
        },
        ..EngineConfig::default()
    };
    let params = SimulationParameters {
        amplitude: 0.0,
        ..nominal_params()
    };
    let mut rng = StdRng::seed_from_u64(4);

    let mut detected = 0;
    for tick in 0..200 {
        let context = TickContext {
            system_time: tick as f64,
            ..TickContext::default()
        };
        let report = WormholeKernel::compute_tick(&config, &params, &context, &mut rng).unwrap();
        let snr = report.snr.unwrap();
        let has_event = report.events.iter().any(|e| e.topic == "PHYSICS.DETECTION");
        assert_eq!(
            has_event,
            snr.significance == Significance::ConfidentDetection,
            "tick {}: snr {}",
            tick,
            snr.snr
        );
        if has_event {
            detected += 1;
        }
    }
    assert!(detected > 0, "no confident detection in 200 ticks");
}

#[test]
fn test_disabled_stages_are_skipped() {
    let config = EngineConfig {
        enable_wave: false,
        enable_gw_data: false,
        ..EngineConfig::default()
    };
    let report = WormholeKernel::compute_tick(
        &config,
        &nominal_params(),
        &TickContext::default(),
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap();
    assert!(report.wave.is_none());
    assert!(report.chirp.is_none());
    assert!(report.detector.is_none());
    assert!(report.snr.is_none());
    assert!(!report.computed_metrics().contains_key("snr"));
}

#[test]
fn test_zero_throat_is_domain_error() {
    println!(" Testing domain guard");
    let params = SimulationParameters {
        throat_radius: 0.0,
        ..nominal_params()
    };
    let err = WormholeKernel::compute_tick(
        &EngineConfig::default(),
        &params,
        &TickContext::default(),
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        WormholeError::Domain {
            parameter: "throat_radius",
            ..
        }
    ));
}

#[test]
fn test_zero_frequency_and_nan_rejected() {
    let zero_freq = SimulationParameters {
        frequency: 0.0,
        ..nominal_params()
    };
    assert!(WormholeKernel::check_domain(&zero_freq, &TickContext::default()).is_err());

    let nan_context = TickContext {
        energy: f64::NAN,
        ..TickContext::default()
    };
    assert!(matches!(
        WormholeKernel::check_domain(&nominal_params(), &nan_context),
        Err(WormholeError::Domain {
            parameter: "energy",
            ..
        })
    ));
}

#[test]
fn test_config_outside_domain_rejected() {
    println!(" Testing config guard");

    let cases: Vec<(&str, EngineConfig)> = vec![
        (
            "chirp.distance_mpc",
            EngineConfig {
                chirp: ChirpConfig {
                    distance_mpc: 0.0,
                    ..Default::default()
                },
                ..EngineConfig::default()
            },
        ),
        (
            "chirp.mass1",
            EngineConfig {
                chirp: ChirpConfig {
                    mass1: 0.0,
                    ..Default::default()
                },
                ..EngineConfig::default()
            },
        ),
        (
            "chirp.mass2",
            EngineConfig {
                chirp: ChirpConfig {
                    mass2: -5.0,
                    ..Default::default()
                },
                ..EngineConfig::default()
            },
        ),
        (
            "chirp.snr_duration",
            EngineConfig {
                chirp: ChirpConfig {
                    snr_duration: 0.0,
                    ..Default::default()
                },
                ..EngineConfig::default()
            },
        ),
        (
            "chirp.time_scale",
            EngineConfig {
                chirp: ChirpConfig {
                    time_scale: -0.1,
                    ..Default::default()
                },
                ..EngineConfig::default()
            },
        ),
        (
            "observer_distance",
            EngineConfig {
                observer_distance: f64::INFINITY,
                ..EngineConfig::default()
            },
        ),
        (
            "constants.c",
            EngineConfig {
                constants: PhysicalConstants {
                    c: 0.0,
                    ..PhysicalConstants::SI
                },
                ..EngineConfig::default()
            },
        ),
        (
            "constants.G",
            EngineConfig {
                constants: PhysicalConstants {
                    g: f64::NAN,
                    ..PhysicalConstants::SI
                },
                ..EngineConfig::default()
            },
        ),
    ];

    for (expected, config) in cases {
        let err = WormholeKernel::compute_tick(
            &config,
            &nominal_params(),
            &TickContext::default(),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap_err();
        match err {
            WormholeError::Domain { parameter, .. } => assert_eq!(parameter, expected),
            other => panic!("{}: expected domain error, got {:?}", expected, other),
        }
    }

    assert!(WormholeKernel::check_config(&EngineConfig::default()).is_ok());
}

#[test]
fn test_json_bridge_rejects_zero_distance() {
    let request = json!({
        "parameters": { "frequency": 100.0, "amplitude": 1e-21, "phase": 0.0, "throatRadius": 5e4 },
        "config": { "chirp": { "distanceMpc": 0.0 } }
    });
    let result_json = WormholeKernel::compute_tick_json(&request.to_string());
    let response: serde_json::Value = serde_json::from_str(&result_json).unwrap();
    let message = response["error"].as_str().unwrap();
    assert!(message.contains("chirp.distance_mpc"), "{}", message);
    assert!(response.get("chirp").is_none());
}

#[test]
fn test_json_bridge() {
    let request = json!({
        "parameters": { "frequency": 100.0, "amplitude": 1e-21, "phase": 0.0, "throatRadius": 5e4 },
        "context": { "stability": 90.0, "systemTime": 3.0 }
    });
    let result_json = WormholeKernel::compute_tick_json(&request.to_string());
    let response: serde_json::Value = serde_json::from_str(&result_json).unwrap();

    assert!(response.get("error").is_none(), "{}", result_json);
    assert_eq!(response["validation"]["isValid"], true);
    assert_eq!(response["metric"]["g_rr"], 2.0);
    assert_eq!(response["collapse"]["timeToCollapse"], "infinite");
    assert!(response["detector"]["hanford"].is_number());
    assert_eq!(response["snr"]["detectionThreshold"], 8.0);
}

#[test]
fn test_json_bridge_reports_errors() {
    let bad = WormholeKernel::compute_tick_json("{\"parameters\": 5}");
    let response: serde_json::Value = serde_json::from_str(&bad).unwrap();
    assert!(response["error"].as_str().unwrap().starts_with("Serialization error"));

    let request = json!({
        "parameters": { "frequency": -1.0, "amplitude": 0.0, "phase": 0.0, "throatRadius": 5e4 }
    });
    let response: serde_json::Value =
        serde_json::from_str(&WormholeKernel::compute_tick_json(&request.to_string())).unwrap();
    assert!(response["error"].as_str().unwrap().contains("frequency"));
}

#[test]
fn test_partial_config_json() {
    let config = EngineConfig::from_json(r#"{"chirp": {"mass1": 36.0}, "enableWave": false}"#).unwrap();
    assert_eq!(config.chirp.mass1, 36.0);
    assert_eq!(config.chirp.mass2, 20.0);
    assert!(!config.enable_wave);
    assert!(config.enable_gw_data);
    assert_eq!(config.metric_probe_factor, 2.0);
}

#[test]
fn test_export_from_tick_round_trips() {
    let config = EngineConfig::default();
    let params = nominal_params();
    let report = WormholeKernel::compute_tick(
        &config,
        &params,
        &TickContext::default(),
        &mut StdRng::seed_from_u64(8),
    )
    .unwrap();

    let record = WormholeKernel::export(&config, 1_700_000_000_000, &params, &report).unwrap();
    assert_eq!(record.simulation_parameters["throatRadius"], 5e4);
    assert_eq!(record.computed_metrics["g_rr"], 2.0);
    // stable throat → no collapse time
    assert!(!record.computed_metrics.contains_key("timeToCollapse"));

    let text = record.to_json_pretty().unwrap();
    let restored = ExportRecord::from_json(&text).unwrap();
    assert_eq!(restored.simulation_parameters, record.simulation_parameters);
    assert_eq!(restored.computed_metrics, record.computed_metrics);
    assert_eq!(restored.metadata, record.metadata);
}

#[test]
fn test_export_json_bridge() {
    let request = json!({
        "parameters": { "frequency": 100.0, "amplitude": 1e-21, "phase": 0.0, "throatRadius": 5e4 }
    });
    let text = WormholeKernel::export_json(&request.to_string(), 0.0);
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["timestamp"], "1970-01-01T00:00:00.000Z");
    assert_eq!(doc["metadata"]["coordinate_system"], "Morris-Thorne");
    assert_eq!(doc["physical_constants"]["c"], 299792458.0);
}

#[test]
fn test_export_json_rejects_nan_timestamp() {
    let request = json!({
        "parameters": { "frequency": 100.0, "amplitude": 1e-21, "phase": 0.0, "throatRadius": 5e4 }
    });
    for ts in [f64::NAN, f64::INFINITY] {
        let text = WormholeKernel::export_json(&request.to_string(), ts);
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(doc.get("timestamp").is_none(), "{}", text);
        assert!(doc["error"].as_str().unwrap().starts_with("Serialization error"));
    }

    // fractional milliseconds truncate
    let text = WormholeKernel::export_json(&request.to_string(), 1_700_000_000_123.9);
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["timestamp"], "2023-11-14T22:13:20.123Z");
}

#[test]
fn test_regulator_drives_kernel_loop() {
    println!(" Running 50 regulator ticks through the kernel");

    let config = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(21);
    let mut state = RegulatorState {
        frequency: 3.0,
        amplitude: 2.0,
        ..RegulatorState::default()
    };

    for _ in 0..50 {
        let gauges = ResonanceRegulator::compute_metrics(&state);
        let params = SimulationParameters {
            frequency: state.frequency,
            amplitude: state.amplitude,
            phase: state.phase,
            throat_radius: 1e4,
        };
        let context = TickContext {
            stability: gauges.stability,
            energy: gauges.energy,
            system_time: state.system_time,
        };
        let report = WormholeKernel::compute_tick(&config, &params, &context, &mut rng).unwrap();
        assert!((0.0..=1.0).contains(&report.collapse.probability));
        ResonanceRegulator::step(&mut state, &gauges);
    }

    assert!(state.drr_active);
    assert!(state.frequency < 3.0);
    assert_eq!(state.system_time, 50.0);
}
