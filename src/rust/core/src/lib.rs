// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Wormhole Core — closed-form traversable wormhole physics
// Morris-Thorne geometry, energy budget, collapse risk and GW signals
//

pub mod constants;
pub mod error;
pub mod export;
pub mod formulas;
pub mod physics_kernel;
pub mod science;
#[cfg(test)]
pub mod tests_physics;

// Re-export core types
pub use constants::{ExoticMatterParameters, PhysicalConstants};
pub use error::{WormholeError, WormholeResult};
pub use export::{generate_data_export, ExportRecord};
pub use physics_kernel::{
    EngineConfig, SimulationParameters, TickContext, TickReport, WormholeKernel,
};
pub use science::regulator::ResonanceRegulator;
