// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Scientific data export
//!
//! Assembles parameters, computed metrics and the constant table into one
//! versioned record. Writing the document anywhere is the caller's concern.

use crate::constants::PhysicalConstants;
use crate::error::{WormholeError, WormholeResult};
use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const EXPORT_VERSION: &str = "2.1.0";
pub const COORDINATE_SYSTEM: &str = "Morris-Thorne";
pub const UNITS: &str = "SI";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub version: String,
    pub coordinate_system: String,
    pub units: String,
}

impl Default for ExportMetadata {
    fn default() -> Self {
        ExportMetadata {
            version: EXPORT_VERSION.to_string(),
            coordinate_system: COORDINATE_SYSTEM.to_string(),
            units: UNITS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// ISO-8601, millisecond precision, UTC
    pub timestamp: String,
    pub simulation_parameters: BTreeMap<String, f64>,
    pub computed_metrics: BTreeMap<String, f64>,
    pub physical_constants: PhysicalConstants,
    pub metadata: ExportMetadata,
}

impl ExportRecord {
    /// Two-space indented JSON document.
    pub fn to_json_pretty(&self) -> WormholeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> WormholeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// JSON has no encoding for NaN or ±∞; serde_json would write `null`.
fn ensure_finite(section: &str, values: &BTreeMap<String, f64>) -> WormholeResult<()> {
    match values.iter().find(|(_, v)| !v.is_finite()) {
        Some((name, value)) => {
            tracing::warn!(section, name = name.as_str(), value, "rejecting non-finite export value");
            Err(WormholeError::Serialization(format!(
                "{}.{} is not a finite number ({})",
                section, name, value
            )))
        }
        None => Ok(()),
    }
}

/// Builds the export record for `timestamp_ms` (Unix epoch, milliseconds).
pub fn generate_data_export(
    constants: &PhysicalConstants,
    timestamp_ms: i64,
    parameters: &BTreeMap<String, f64>,
    metrics: &BTreeMap<String, f64>,
) -> WormholeResult<ExportRecord> {
    ensure_finite("simulation_parameters", parameters)?;
    ensure_finite("computed_metrics", metrics)?;

    let timestamp = DateTime::from_timestamp_millis(timestamp_ms)
        .ok_or_else(|| {
            WormholeError::Serialization(format!("timestamp {} ms out of range", timestamp_ms))
        })?
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    Ok(ExportRecord {
        timestamp,
        simulation_parameters: parameters.clone(),
        computed_metrics: metrics.clone(),
        physical_constants: *constants,
        metadata: ExportMetadata::default(),
    })
}
