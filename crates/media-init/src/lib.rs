// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration schemas for media-layer startup.
//!
//! Each resource kind gets a config subtree named for it: a `window` table
//! with required scalar fields and documented defaults, a `renderer` table,
//! and a `system` table naming the subsystems to bring up. Each subtree may
//! carry an optional string array of flag names resolved against a
//! resource-specific lookup table.
//!
//! Unrecognized flag names are never fatal: they are appended to the
//! caller-owned diagnostics list (and logged here as warnings), while the
//! recognized names still resolve. The loaders produce plain validated
//! values; creating the actual native resources from them is the caller's
//! business.

pub mod color;
pub mod renderer;
pub mod system;
pub mod window;

pub use color::{load_color, Color};
pub use renderer::{load_renderer, renderer_flag_lookup, RendererConfig};
pub use system::{load_subsystems, subsystem_flag_lookup};
pub use window::{load_window, window_flag_lookup, WindowConfig};

/// Capacity for flag-name arrays, passed explicitly at every call site.
pub const MAX_FLAG_NAMES: usize = 32;
