// SPDX-License-Identifier: MPL-2.0

//! Preview and capture pipeline
//!
//! ```text
//! FrameSource ──► PipelineDriver ──► FrameSink
//!                   │    ▲               ├─ emit_preview (display)
//!      request /    │    │ on_refresh    └─ emit_capture (framing/print)
//!      cancel       ▼    │
//!               CycleScheduler ◄── RefreshLoop (tokio interval)
//! ```
//!
//! # States
//!
//! - **Idle**: no frame source attached
//! - **Live**: a source is attached; if the active filter needs pixel
//!   processing, one preview cycle is pending at all times
//! - **Capturing**: a one-shot full-quality pass is running; transient, it
//!   lasts only as long as the `run_capture` call
//!
//! Everything runs on one thread. A cycle is fired only after the previous
//! one returned, and captures run inside the caller's turn.

mod driver;
mod refresh;
mod scheduler;

pub use driver::{DriverState, PipelineDriver};
pub use refresh::RefreshLoop;
pub use scheduler::{CycleHandle, CycleScheduler, LoopAction, RefreshScheduler};

use crate::errors::PipelineResult;
use crate::frame::FrameBuffer;

/// Provider of live video frames
///
/// Frame dimensions may change between calls if the source resizes.
pub trait FrameSource {
    fn live_frame(&mut self) -> PipelineResult<FrameBuffer>;
}

impl<F> FrameSource for F
where
    F: FnMut() -> PipelineResult<FrameBuffer>,
{
    fn live_frame(&mut self) -> PipelineResult<FrameBuffer> {
        self()
    }
}

/// Destination for processed frames
pub trait FrameSink {
    /// Show a processed preview frame on the display surface
    fn emit_preview(&mut self, frame: &FrameBuffer);

    /// Hand a processed still to framing/printing
    fn emit_capture(&mut self, frame: &FrameBuffer);
}
