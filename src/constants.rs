// SPDX-License-Identifier: GPL-3.0-only

//! Pipeline-wide constants

use std::time::Duration;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Offset added to every channel by the brightness filter
pub const BRIGHTNESS_OFFSET: u8 = 30;

/// Warmth bias added on top of sepia by the vintage filter (R, G)
pub const VINTAGE_WARMTH: (u8, u8) = (10, 5);

/// Sepia matrix in thousandths, one row per output channel
///
/// Integer weights keep the transform exact: `(393r + 769g + 189b) / 1000`.
pub const SEPIA_MATRIX: [[u32; 3]; 3] = [[393, 769, 189], [349, 686, 168], [272, 534, 131]];

/// Rec. 601 luma weights in thousandths (sum to 1000)
pub const LUMA_WEIGHTS: [u32; 3] = [299, 587, 114];

/// Hue rotation applied by the rainbow filter (fraction of a full turn)
pub const RAINBOW_HUE_SHIFT: f32 = 0.3;

/// Saturation multiplier applied by the rainbow filter
pub const RAINBOW_SATURATION_GAIN: f32 = 2.0;

/// Glyph ramp for the ASCII filter, darkest (densest) first
pub const ASCII_RAMP: &str = "@%#*+=-:. ";

/// Default refresh period for the preview loop (~60 Hz)
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_millis(16);

/// Log a cycle counter every N preview cycles
pub const CYCLE_LOG_INTERVAL: u64 = 100;

/// Per-tier defaults
///
/// Preview values trade fidelity for throughput; capture values are exact.
pub mod tier_defaults {
    /// Pixelate block side in capture quality
    pub const CAPTURE_PIXELATE_BLOCK: u32 = 10;
    /// Pixelate block side in preview quality (coarser)
    pub const PREVIEW_PIXELATE_BLOCK: u32 = 20;

    /// ASCII cell side (and glyph font size)
    pub const ASCII_BLOCK: u32 = 10;
    /// Sample every pixel of an ASCII cell in capture quality
    pub const CAPTURE_ASCII_SAMPLE_STEP: u32 = 1;
    /// Sample every third pixel of an ASCII cell in preview quality
    pub const PREVIEW_ASCII_SAMPLE_STEP: u32 = 3;

    /// Fisheye destination stride in capture quality
    pub const CAPTURE_FISHEYE_STRIDE: u32 = 1;
    /// Fisheye destination stride in preview quality
    pub const PREVIEW_FISHEYE_STRIDE: u32 = 2;

    /// Pop-art source sampling stride in capture quality
    pub const CAPTURE_POPART_STRIDE: u32 = 1;
    /// Pop-art source sampling stride in preview quality
    pub const PREVIEW_POPART_STRIDE: u32 = 2;
}
