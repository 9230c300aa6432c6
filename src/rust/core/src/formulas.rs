// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Scalar Formulas for Wormhole and Gravitational-Wave Physics
//!
//! Pure functions on scalar values. The engines in `science` compose them;
//! they are also exported to the front-end individually.
//!
//! References:
//! - Morris & Thorne (1988): Traversable wormhole metric
//! - Peters & Mathews (1963): Leading-order inspiral amplitude
//! - aLIGO / AdVirgo design sensitivity (piecewise approximation)

use wasm_bindgen::prelude::*;

// ============================================================================
// GRAVITY
// ============================================================================

/// Schwarzschild radius r_s = 2GM/c²
///
/// # Arguments
/// * `g` - Gravitational constant
/// * `c` - Speed of light
/// * `mass` - Mass in kg
///
/// # Returns
/// Horizon radius in meters
#[wasm_bindgen]
pub fn schwarzschild_radius(g: f64, c: f64, mass: f64) -> f64 {
    2.0 * g * mass / (c * c)
}

/// Radial factor of the Morris-Thorne metric with constant shape b(r) = r₀
///
/// 1 - r₀/r outside the throat, 1 at or inside it.
#[wasm_bindgen]
pub fn radial_factor(radius: f64, throat_radius: f64) -> f64 {
    if radius <= throat_radius {
        return 1.0;
    }
    1.0 - throat_radius / radius
}

/// Tidal force F = |G·M·m·2r / r³|
///
/// Not guarded for r = 0; callers validate the radius.
#[wasm_bindgen]
pub fn tidal_force(g: f64, radius: f64, mass: f64, test_object_mass: f64) -> f64 {
    (g * mass * test_object_mass * 2.0 * radius / radius.powi(3)).abs()
}

// ============================================================================
// INSPIRAL
// ============================================================================

/// Chirp mass M_c = μ^(3/5) · M^(2/5)
///
/// Units follow the inputs (solar masses in, solar masses out).
#[wasm_bindgen]
pub fn chirp_mass(mass1: f64, mass2: f64) -> f64 {
    let total = mass1 + mass2;
    let reduced = (mass1 * mass2) / total;
    reduced.powf(3.0 / 5.0) * total.powf(2.0 / 5.0)
}

/// Luminosity distance with a flat 10% redshift correction
#[wasm_bindgen]
pub fn luminosity_distance(distance: f64) -> f64 {
    distance * (1.0 + 0.1)
}

// ============================================================================
// DETECTOR SENSITIVITY
// ============================================================================

/// LIGO design sensitivity (normalized 0-1)
///
/// Zero below 20 Hz, f⁴ rise to 60 Hz, flat to 300 Hz, 1/f² above.
#[wasm_bindgen]
pub fn ligo_sensitivity(frequency: f64) -> f64 {
    if frequency < 20.0 {
        return 0.0;
    }
    if frequency < 60.0 {
        return (frequency / 60.0).powi(4);
    }
    if frequency < 300.0 {
        return 1.0;
    }
    (300.0 / frequency).powi(2)
}

/// Virgo sensitivity (normalized 0-1)
///
/// Zero below 15 Hz, f³ rise to 50 Hz, flat to 200 Hz, f^-1.5 above.
#[wasm_bindgen]
pub fn virgo_sensitivity(frequency: f64) -> f64 {
    if frequency < 15.0 {
        return 0.0;
    }
    if frequency < 50.0 {
        return (frequency / 50.0).powi(3);
    }
    if frequency < 200.0 {
        return 1.0;
    }
    (200.0 / frequency).powf(1.5)
}

// ============================================================================
// TESTS
// ============================================================================
