// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Constant tables for the wormhole kernel.
//!
//! Both tables are plain `Copy` structs with a `const` instance. They are built
//! once, never mutated, and passed by reference into every engine that needs them.

use serde::{Deserialize, Serialize};

// ============================================================================
// PHYSICAL CONSTANTS (SI)
// ============================================================================

/// Fundamental constants in SI units.
///
/// Field names on the wire follow the export contract (`G`, `c`, `h`, `k_B`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Gravitational constant (m³ kg⁻¹ s⁻²)
    #[serde(rename = "G")]
    pub g: f64,
    /// Speed of light (m/s)
    pub c: f64,
    /// Planck constant (J s)
    pub h: f64,
    /// Boltzmann constant (J/K)
    #[serde(rename = "k_B")]
    pub k_b: f64,
}

impl PhysicalConstants {
    pub const SI: PhysicalConstants = PhysicalConstants {
        g: 6.674_30e-11,
        c: 299_792_458.0,
        h: 6.626_070_15e-34,
        k_b: 1.380_649e-23,
    };

    /// c²
    pub fn c2(&self) -> f64 {
        self.c * self.c
    }

    /// c⁴
    pub fn c4(&self) -> f64 {
        let c2 = self.c2();
        c2 * c2
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}

// ============================================================================
// EXOTIC MATTER
// ============================================================================

/// Exotic-matter parameters used by the energy budget.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExoticMatterParameters {
    /// Negative energy density (kg/m³)
    pub density: f64,
    /// Casimir pressure (Pa)
    pub casimir_pressure: f64,
}

impl ExoticMatterParameters {
    pub const DEFAULT: ExoticMatterParameters = ExoticMatterParameters {
        density: -1.5e15,
        casimir_pressure: -1.01e-7,
    };
}

impl Default for ExoticMatterParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Reference values
// ---------------------------------------------------------------------------

/// Reference mass for the traversability limit (≈ 1 M☉, kg).
pub const REFERENCE_MASS_KG: f64 = 1e30;

/// Test object used for tidal force when the caller doesn't supply one (kg).
pub const DEFAULT_TEST_OBJECT_MASS: f64 = 70.0;

/// Reference operation window for power consumption (s).
pub const OPERATION_WINDOW_S: f64 = 1000.0;
