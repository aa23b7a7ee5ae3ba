// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Subsystem-initialization configuration schema

use std::sync::OnceLock;

use extract_core::{resolve, Document, FlagLookup, Pipeline, Result};

use crate::MAX_FLAG_NAMES;

// Subsystem init flags, SDL2 ABI values.
pub const INIT_TIMER: u32 = 0x0000_0001;
pub const INIT_AUDIO: u32 = 0x0000_0010;
pub const INIT_VIDEO: u32 = 0x0000_0020;
pub const INIT_JOYSTICK: u32 = 0x0000_0200;
pub const INIT_HAPTIC: u32 = 0x0000_1000;
pub const INIT_GAMECONTROLLER: u32 = 0x0000_2000;
pub const INIT_EVENTS: u32 = 0x0000_4000;

/// Union of every subsystem this schema can name.
pub const INIT_EVERYTHING: u32 = INIT_TIMER
    | INIT_AUDIO
    | INIT_VIDEO
    | INIT_JOYSTICK
    | INIT_HAPTIC
    | INIT_GAMECONTROLLER
    | INIT_EVENTS;

/// The subsystem flag-name table.
///
/// Acceptable names: timer, audio, video, joystick, haptic, game-controller,
/// events, everything.
pub fn subsystem_flag_lookup() -> &'static FlagLookup {
    static LOOKUP: OnceLock<FlagLookup> = OnceLock::new();
    LOOKUP.get_or_init(|| {
        FlagLookup::new(&[
            ("timer", INIT_TIMER),
            ("audio", INIT_AUDIO),
            ("video", INIT_VIDEO),
            ("joystick", INIT_JOYSTICK),
            ("haptic", INIT_HAPTIC),
            ("game-controller", INIT_GAMECONTROLLER),
            ("events", INIT_EVENTS),
            ("everything", INIT_EVERYTHING),
        ])
    })
}

/// Load the subsystem bitmask from the `system` subtree.
///
/// Schema: `[system]` with an optional `subsystems` array of names (see
/// [`subsystem_flag_lookup`]). An absent `system` table or `subsystems`
/// array means no subsystems. Unrecognized names are appended to
/// `diagnostics` and logged; they never fail the load.
pub fn load_subsystems(doc: &Document, diagnostics: &mut Vec<String>) -> Result<u32> {
    if resolve(doc, "system").is_none() {
        return Ok(0);
    }

    let mut flags = 0u32;
    let before = diagnostics.len();
    let mut chain = Pipeline::new(doc).subtable("system");
    if resolve(doc, "system.subsystems").is_some() {
        chain = chain.load_flags(
            "subsystems",
            subsystem_flag_lookup(),
            MAX_FLAG_NAMES,
            &mut flags,
            diagnostics,
        );
    }
    chain.finish()?;

    for name in &diagnostics[before..] {
        tracing::warn!(subsystem = %name, "no subsystem with this name, skipping");
    }
    Ok(flags)
}
