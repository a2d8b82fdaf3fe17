// SPDX-License-Identifier: MPL-2.0

//! CPU filter implementations for preview and capture frames
//!
//! Every filter identifier maps to one transform over an RGBA
//! [`FrameBuffer`]. The same transform serves both quality tiers; the tier
//! only selects block sizes and sampling strides from [`PipelineConfig`].
//!
//! ```text
//! FilterType ──► requires_pixel_processing()?
//!                    │ no  → left to the display (none, blur)
//!                    ▼ yes
//!              apply_filter(frame, filter, tier, config)
//!                    │
//!      ┌──────┬──────┼────────┬───────────┬────────┐
//!    color  sketch  block  geometric    popart
//! ```

pub mod block;
pub mod color;
pub mod geometric;
mod glyphs;
pub mod popart;
pub mod sketch;

use crate::config::PipelineConfig;
use crate::errors::FrameResult;
use crate::frame::FrameBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{trace, warn};

/// Filter identifiers selectable by the booth UI
///
/// Exactly one filter is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FilterType {
    /// No filter applied
    #[default]
    None,
    /// Sepia tone (warm brownish matrix)
    Sepia,
    /// Rec. 601 luma grayscale
    Grayscale,
    /// Flat brightness lift
    Brightness,
    /// Sepia with an extra warmth bias
    Vintage,
    /// Block-averaged mosaic
    Pixelate,
    /// Radial lens warp
    Fisheye,
    /// Horizontal flip
    Mirror,
    /// Hue rotation with boosted saturation
    Rainbow,
    /// Inverted colors
    Negative,
    /// Glyph raster driven by block brightness
    Ascii,
    /// Sobel edge pencil sketch
    Sketch,
    /// Four tinted quadrants
    PopArt,
    /// Soft blur (applied by the display, not the pipeline)
    Blur,
}

impl FilterType {
    /// All filters in UI order
    pub const ALL: [FilterType; 14] = [
        FilterType::None,
        FilterType::Sepia,
        FilterType::Grayscale,
        FilterType::Brightness,
        FilterType::Vintage,
        FilterType::Pixelate,
        FilterType::Fisheye,
        FilterType::Mirror,
        FilterType::Rainbow,
        FilterType::Negative,
        FilterType::Ascii,
        FilterType::Sketch,
        FilterType::PopArt,
        FilterType::Blur,
    ];

    /// Stable lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            FilterType::None => "none",
            FilterType::Sepia => "sepia",
            FilterType::Grayscale => "grayscale",
            FilterType::Brightness => "brightness",
            FilterType::Vintage => "vintage",
            FilterType::Pixelate => "pixelate",
            FilterType::Fisheye => "fisheye",
            FilterType::Mirror => "mirror",
            FilterType::Rainbow => "rainbow",
            FilterType::Negative => "negative",
            FilterType::Ascii => "ascii",
            FilterType::Sketch => "sketch",
            FilterType::PopArt => "popart",
            FilterType::Blur => "blur",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            FilterType::None => "Original",
            FilterType::Sepia => "Sepia",
            FilterType::Grayscale => "Black & White",
            FilterType::Brightness => "Bright",
            FilterType::Vintage => "Vintage",
            FilterType::Pixelate => "Pixel",
            FilterType::Fisheye => "Fisheye",
            FilterType::Mirror => "Mirror",
            FilterType::Rainbow => "Rainbow",
            FilterType::Negative => "Negative",
            FilterType::Ascii => "ASCII",
            FilterType::Sketch => "Sketch",
            FilterType::PopArt => "Pop Art",
            FilterType::Blur => "Blur",
        }
    }

    /// Whether the filter runs on pixel data
    ///
    /// `None` and `Blur` are handled by the display surface; the pipeline
    /// passes their frames through untouched.
    pub fn requires_pixel_processing(&self) -> bool {
        !matches!(self, FilterType::None | FilterType::Blur)
    }

    /// Resolve an identifier, falling back to `None` for unknown names
    ///
    /// Filter selection comes from the UI, so a bad value degrades to a
    /// pass-through instead of failing the live preview.
    pub fn from_name(name: &str) -> FilterType {
        match name.parse() {
            Ok(filter) => filter,
            Err(UnknownFilter(name)) => {
                warn!(name = %name, "Unknown filter identifier, using pass-through");
                FilterType::None
            }
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier that names no known filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown filter: {}", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for FilterType {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        FilterType::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

impl From<String> for FilterType {
    fn from(name: String) -> Self {
        FilterType::from_name(&name)
    }
}

/// Quality/performance level a transform runs at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// Full resolution, exact sampling (captured stills)
    Capture,
    /// Coarser sampling for the live preview loop
    Preview,
}

/// Apply a filter to a frame in place
///
/// Display-only filters leave the frame untouched.
pub fn apply_filter(
    frame: &mut FrameBuffer,
    filter: FilterType,
    tier: QualityTier,
    config: &PipelineConfig,
) {
    let settings = config.settings(tier);
    trace!(
        %filter,
        ?tier,
        width = frame.width(),
        height = frame.height(),
        "Applying filter"
    );

    match filter {
        FilterType::None | FilterType::Blur => {}
        FilterType::Sepia => color::map_rgb(frame, color::sepia),
        FilterType::Grayscale => color::map_rgb(frame, color::grayscale),
        FilterType::Brightness => color::map_rgb(frame, color::brightness),
        FilterType::Vintage => color::map_rgb(frame, color::vintage),
        FilterType::Negative => color::map_rgb(frame, color::negative),
        FilterType::Rainbow => color::map_rgb(frame, color::rainbow),
        FilterType::Sketch => sketch::apply_sketch(frame),
        FilterType::Pixelate => block::apply_pixelate(frame, settings.pixelate_block),
        FilterType::Ascii => {
            block::apply_ascii(frame, settings.ascii_block, settings.ascii_sample_step)
        }
        FilterType::Fisheye => geometric::apply_fisheye(frame, settings.fisheye_stride),
        FilterType::Mirror => geometric::apply_mirror(frame),
        FilterType::PopArt => popart::apply_popart(frame, settings.popart_stride),
    }
}

/// Apply a filter to raw RGBA data, returning the filtered copy
///
/// The input is validated before any processing, so a malformed buffer
/// produces an error and no partial output.
pub fn apply_filter_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    filter: FilterType,
    tier: QualityTier,
    config: &PipelineConfig,
) -> FrameResult<Vec<u8>> {
    let mut frame = FrameBuffer::new(width, height, data.to_vec())?;
    apply_filter(&mut frame, filter, tier, config);
    Ok(frame.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FrameError;

    #[test]
    fn test_names_round_trip() {
        for filter in FilterType::ALL {
            assert_eq!(filter.name().parse::<FilterType>(), Ok(filter));
        }
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(FilterType::from_name("watercolor"), FilterType::None);
        assert_eq!(FilterType::from_name(" PopArt "), FilterType::PopArt);
    }

    #[test]
    fn test_display_only_filters() {
        let display_only: Vec<_> = FilterType::ALL
            .into_iter()
            .filter(|f| !f.requires_pixel_processing())
            .collect();
        assert_eq!(display_only, vec![FilterType::None, FilterType::Blur]);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FilterType::PopArt).unwrap();
        assert_eq!(json, "\"popart\"");
        let filter: FilterType = serde_json::from_str("\"sketch\"").unwrap();
        assert_eq!(filter, FilterType::Sketch);
        let unknown: FilterType = serde_json::from_str("\"sparkle\"").unwrap();
        assert_eq!(unknown, FilterType::None);
    }

    #[test]
    fn test_blur_is_pass_through() {
        let config = PipelineConfig::default();
        let data: Vec<u8> = (0..64).collect();
        let out =
            apply_filter_rgba(&data, 4, 4, FilterType::Blur, QualityTier::Capture, &config)
                .unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn test_raw_input_validated() {
        let config = PipelineConfig::default();
        let err = apply_filter_rgba(
            &[0u8; 10],
            2,
            2,
            FilterType::Sepia,
            QualityTier::Preview,
            &config,
        )
        .unwrap_err();
        assert_eq!(
            err,
            FrameError::SizeMismatch {
                expected: 16,
                actual: 10
            }
        );
    }
}
