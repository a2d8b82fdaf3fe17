// SPDX-License-Identifier: MPL-2.0

//! Photo booth filter pipeline
//!
//! This library provides the image filter pipeline behind a photo booth
//! kiosk: per-pixel, spatial, and geometric transforms over raw RGBA frames,
//! run as a cheap continuously re-evaluated preview over live video and as a
//! one-shot full-quality pass over captured stills.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`frame`]: Validated RGBA frame buffers
//! - [`filters`]: Color, sketch, block, geometric, and pop-art transforms
//! - [`pipeline`]: Driver state machine, collaborator traits, refresh loop
//! - [`config`]: Per-tier block sizes and sampling strides
//! - [`errors`]: Error types
//!
//! # Example
//!
//! ```
//! use photobooth::{FilterType, FrameBuffer, PipelineConfig, QualityTier, apply_filter};
//!
//! let mut frame = FrameBuffer::filled(4, 4, [255, 255, 255, 255]).unwrap();
//! apply_filter(&mut frame, FilterType::Sepia, QualityTier::Capture, &PipelineConfig::default());
//! assert_eq!(frame.pixel(0, 0), Some([255, 255, 238, 255]));
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod filters;
pub mod frame;
pub mod pipeline;

// Re-export commonly used types
pub use config::{PipelineConfig, TierSettings};
pub use errors::{FrameError, PipelineError, PipelineResult};
pub use filters::{FilterType, QualityTier, apply_filter, apply_filter_rgba};
pub use frame::FrameBuffer;
pub use pipeline::{
    CycleHandle, CycleScheduler, DriverState, FrameSink, FrameSource, LoopAction,
    PipelineDriver, RefreshLoop, RefreshScheduler,
};
