// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Morris-Thorne metric
//!
//! ds² = -c²dt² + dr²/(1 - b(r)/r) + r²(dθ² + sin²θ dφ²)
//!
//! The shape function is held constant, b(r) = r₀.

use crate::constants::PhysicalConstants;
use crate::formulas::radial_factor;
use serde::{Deserialize, Serialize};

/// Floor on the radial factor; caps g_rr at 1000 at the throat.
pub const RADIAL_FACTOR_FLOOR: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacetimeMetric {
    pub g_tt: f64,
    pub g_rr: f64,
    pub g_theta: f64,
    /// sin²θ factor omitted (equatorial slice)
    pub g_phi: f64,
}

pub struct MetricEngine;

impl MetricEngine {
    /// Diagonal metric components at `radius`.
    ///
    /// Total: at or inside the throat the radial factor is 1, and the
    /// floor keeps g_rr finite as r → r₀⁺.
    pub fn calculate_metric(
        constants: &PhysicalConstants,
        radius: f64,
        throat_radius: f64,
    ) -> SpacetimeMetric {
        let factor = radial_factor(radius, throat_radius);
        let r2 = radius * radius;

        SpacetimeMetric {
            g_tt: -constants.c2(),
            g_rr: 1.0 / factor.max(RADIAL_FACTOR_FLOOR),
            g_theta: r2,
            g_phi: r2,
        }
    }

    /// Approximate Ricci scalar R = 8πGρ/c⁴ with ρ = u/c².
    ///
    /// Returns 0 at or inside the throat. The interior is treated as flat;
    /// this is an approximation of the model, not a physical claim.
    pub fn calculate_ricci_scalar(
        constants: &PhysicalConstants,
        radius: f64,
        throat_radius: f64,
        energy_density: f64,
    ) -> f64 {
        if radius <= throat_radius {
            return 0.0;
        }
        let rho = energy_density / constants.c2();
        8.0 * std::f64::consts::PI * constants.g * rho / constants.c4()
    }
}
