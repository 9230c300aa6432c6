// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod chirp; // Gravitational-wave data model
pub mod collapse;
pub mod energy;
pub mod metric;
pub mod regulator; // caller-side resonance loop
pub mod validation;
pub mod waves;
