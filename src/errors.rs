// SPDX-License-Identifier: MPL-2.0

//! Error types for the filter pipeline

use std::fmt;

/// Result type alias for frame construction and validation
pub type FrameResult<T> = Result<T, FrameError>;

/// Result type alias using PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Frame buffer validation errors
///
/// These are raised before any pixel is touched, so a failed call never
/// leaves a partially filtered buffer behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Width or height is zero
    ZeroDimensions { width: u32, height: u32 },
    /// Byte length does not match width * height * 4
    SizeMismatch { expected: usize, actual: usize },
    /// width * height * 4 does not fit in memory addressing
    Overflow { width: u32, height: u32 },
}

/// Main pipeline error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Invalid frame handed to the pipeline
    Frame(FrameError),
    /// Capture requested without an active frame source
    NoSource,
    /// Frame source failed to deliver a frame
    SourceUnavailable(String),
    /// Configuration errors
    Config(String),
    /// Conversion to or from an `image` buffer failed
    Image(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ZeroDimensions { width, height } => {
                write!(f, "Frame has zero dimensions: {}x{}", width, height)
            }
            FrameError::SizeMismatch { expected, actual } => write!(
                f,
                "Frame data size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            FrameError::Overflow { width, height } => {
                write!(f, "Frame dimensions too large: {}x{}", width, height)
            }
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Frame(e) => write!(f, "Frame error: {}", e),
            PipelineError::NoSource => write!(f, "No active frame source"),
            PipelineError::SourceUnavailable(msg) => write!(f, "Frame source error: {}", msg),
            PipelineError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PipelineError::Image(msg) => write!(f, "Image conversion error: {}", msg),
        }
    }
}

impl std::error::Error for FrameError {}
impl std::error::Error for PipelineError {}

impl From<FrameError> for PipelineError {
    fn from(err: FrameError) -> Self {
        PipelineError::Frame(err)
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_error_converts() {
        let err: PipelineError = FrameError::ZeroDimensions {
            width: 0,
            height: 4,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Frame error: Frame has zero dimensions: 0x4"
        );
    }

    #[test]
    fn test_size_mismatch_message() {
        let err = FrameError::SizeMismatch {
            expected: 64,
            actual: 60,
        };
        assert!(err.to_string().contains("expected 64 bytes, got 60"));
    }
}
