// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::tier_defaults::*;
use crate::errors::{PipelineError, PipelineResult};
use crate::filters::QualityTier;
use serde::{Deserialize, Serialize};

/// Sampling density and block sizes for one quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSettings {
    /// Pixelate block side length in pixels
    pub pixelate_block: u32,
    /// ASCII cell side length in pixels (also the glyph font size)
    pub ascii_block: u32,
    /// Sample every Nth pixel (both axes) when averaging an ASCII cell
    pub ascii_sample_step: u32,
    /// Visit every Nth destination pixel (both axes) in the fisheye warp
    pub fisheye_stride: u32,
    /// Sample every Nth quadrant pixel (both axes) in pop-art
    pub popart_stride: u32,
}

impl TierSettings {
    /// Full-quality defaults used for captured stills
    pub const CAPTURE: TierSettings = TierSettings {
        pixelate_block: CAPTURE_PIXELATE_BLOCK,
        ascii_block: ASCII_BLOCK,
        ascii_sample_step: CAPTURE_ASCII_SAMPLE_STEP,
        fisheye_stride: CAPTURE_FISHEYE_STRIDE,
        popart_stride: CAPTURE_POPART_STRIDE,
    };

    /// Reduced-quality defaults used for live preview
    pub const PREVIEW: TierSettings = TierSettings {
        pixelate_block: PREVIEW_PIXELATE_BLOCK,
        ascii_block: ASCII_BLOCK,
        ascii_sample_step: PREVIEW_ASCII_SAMPLE_STEP,
        fisheye_stride: PREVIEW_FISHEYE_STRIDE,
        popart_stride: PREVIEW_POPART_STRIDE,
    };

    fn validate(&self, tier: &str) -> PipelineResult<()> {
        let fields = [
            ("pixelate_block", self.pixelate_block),
            ("ascii_block", self.ascii_block),
            ("ascii_sample_step", self.ascii_sample_step),
            ("fisheye_stride", self.fisheye_stride),
            ("popart_stride", self.popart_stride),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(PipelineError::Config(format!(
                    "{}.{} must be at least 1",
                    tier, name
                )));
            }
        }
        Ok(())
    }
}

/// Filter pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Settings for one-shot captures
    pub capture: TierSettings,
    /// Settings for the continuous preview loop
    pub preview: TierSettings,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            capture: TierSettings::CAPTURE,
            preview: TierSettings::PREVIEW,
        }
    }
}

impl PipelineConfig {
    /// Settings for the given tier
    pub fn settings(&self, tier: QualityTier) -> &TierSettings {
        match tier {
            QualityTier::Capture => &self.capture,
            QualityTier::Preview => &self.preview,
        }
    }

    /// Reject zero block sizes and strides
    pub fn validate(&self) -> PipelineResult<()> {
        self.capture.validate("capture")?;
        self.preview.validate("preview")
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing tiers fall back to their defaults.
    pub fn from_json(json: &str) -> PipelineResult<Self> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_is_coarser() {
        let config = PipelineConfig::default();
        assert!(config.preview.pixelate_block > config.capture.pixelate_block);
        assert!(config.preview.fisheye_stride > config.capture.fisheye_stride);
    }

    #[test]
    fn test_missing_tier_uses_default() {
        let json = r#"{"preview": {"pixelate_block": 32, "ascii_block": 12,
            "ascii_sample_step": 4, "fisheye_stride": 2, "popart_stride": 2}}"#;
        let config = PipelineConfig::from_json(json).unwrap();
        assert_eq!(config.capture, TierSettings::CAPTURE);
        assert_eq!(config.preview.pixelate_block, 32);
    }

    #[test]
    fn test_zero_stride_rejected() {
        let mut config = PipelineConfig::default();
        config.preview.fisheye_stride = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            PipelineError::Config("preview.fisheye_stride must be at least 1".into())
        );
    }
}
