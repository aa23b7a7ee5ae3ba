// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Window configuration schema

use std::sync::OnceLock;

use extract_core::{resolve, Document, FlagLookup, Pipeline, Result};
use serde::Serialize;

use crate::MAX_FLAG_NAMES;

/// Sentinel for "let the platform pick" window position.
pub const WINDOWPOS_UNDEFINED: i32 = 0x1FFF_0000;

// Window creation flags, SDL2 ABI values.
pub const WINDOW_FULLSCREEN: u32 = 0x0000_0001;
pub const WINDOW_OPENGL: u32 = 0x0000_0002;
pub const WINDOW_SHOWN: u32 = 0x0000_0004;
pub const WINDOW_HIDDEN: u32 = 0x0000_0008;
pub const WINDOW_BORDERLESS: u32 = 0x0000_0010;
pub const WINDOW_RESIZABLE: u32 = 0x0000_0020;
pub const WINDOW_MINIMIZED: u32 = 0x0000_0040;
pub const WINDOW_MAXIMIZED: u32 = 0x0000_0080;
pub const WINDOW_INPUT_GRABBED: u32 = 0x0000_0100;
pub const WINDOW_FULLSCREEN_DESKTOP: u32 = WINDOW_FULLSCREEN | 0x0000_1000;
pub const WINDOW_ALLOW_HIGHDPI: u32 = 0x0000_2000;
pub const WINDOW_VULKAN: u32 = 0x1000_0000;
pub const WINDOW_METAL: u32 = 0x2000_0000;

/// Validated window parameters, ready to hand to a window-creation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub flags: u32,
}

/// The window flag-name table.
///
/// Acceptable names: fullscreen, fullscreen-desktop, opengl, vulkan, metal,
/// hidden, borderless, resizable, minimized, maximized, input-grabbed,
/// allow-high-dpi, shown.
pub fn window_flag_lookup() -> &'static FlagLookup {
    static LOOKUP: OnceLock<FlagLookup> = OnceLock::new();
    LOOKUP.get_or_init(|| {
        FlagLookup::new(&[
            ("fullscreen", WINDOW_FULLSCREEN),
            ("fullscreen-desktop", WINDOW_FULLSCREEN_DESKTOP),
            ("opengl", WINDOW_OPENGL),
            ("vulkan", WINDOW_VULKAN),
            ("metal", WINDOW_METAL),
            ("hidden", WINDOW_HIDDEN),
            ("borderless", WINDOW_BORDERLESS),
            ("resizable", WINDOW_RESIZABLE),
            ("minimized", WINDOW_MINIMIZED),
            ("maximized", WINDOW_MAXIMIZED),
            ("input-grabbed", WINDOW_INPUT_GRABBED),
            ("allow-high-dpi", WINDOW_ALLOW_HIGHDPI),
            ("shown", WINDOW_SHOWN),
        ])
    })
}

/// Load the `window` subtree of a document.
///
/// Required fields: `title` (string), `width` and `height` (integers).
/// Optional: `x` and `y` (integers, default [`WINDOWPOS_UNDEFINED`]) and
/// `flags` (array of strings, see [`window_flag_lookup`]). Unrecognized flag
/// names are appended to `diagnostics` and logged; they never fail the load.
pub fn load_window(doc: &Document, diagnostics: &mut Vec<String>) -> Result<WindowConfig> {
    let mut title = String::new();
    let mut width = 0u32;
    let mut height = 0u32;
    let mut x = WINDOWPOS_UNDEFINED;
    let mut y = WINDOWPOS_UNDEFINED;
    let mut flags = 0u32;

    let before = diagnostics.len();
    let mut chain = Pipeline::new(doc)
        .subtable("window")
        .load("title", &mut title)
        .load("width", &mut width)
        .load("height", &mut height)
        .load_or("x", &mut x, WINDOWPOS_UNDEFINED)
        .load_or("y", &mut y, WINDOWPOS_UNDEFINED);
    if resolve(doc, "window.flags").is_some() {
        chain = chain.load_flags(
            "flags",
            window_flag_lookup(),
            MAX_FLAG_NAMES,
            &mut flags,
            diagnostics,
        );
    }
    chain.finish()?;

    for name in &diagnostics[before..] {
        tracing::warn!(flag = %name, "no window flag with this name, skipping");
    }

    Ok(WindowConfig {
        title,
        width,
        height,
        x,
        y,
        flags,
    })
}
