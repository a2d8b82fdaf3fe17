// SPDX-License-Identifier: MPL-2.0

//! Pipeline driver state machine

use super::scheduler::{CycleHandle, CycleScheduler, LoopAction};
use super::{FrameSink, FrameSource};
use crate::config::PipelineConfig;
use crate::constants::CYCLE_LOG_INTERVAL;
use crate::errors::{PipelineError, PipelineResult};
use crate::filters::{FilterType, QualityTier, apply_filter};
use crate::frame::FrameBuffer;
use tracing::{debug, info, trace, warn};

/// Observable driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// No frame source attached
    Idle,
    /// Frame source attached, previewing with the given filter
    Live { filter: FilterType },
    /// Full-quality pass in progress
    ///
    /// Only held for the duration of [`PipelineDriver::run_capture`], which
    /// borrows the driver mutably, so callers observe it from log output
    /// rather than through [`PipelineDriver::state`].
    Capturing { filter: FilterType },
}

/// Owns the preview loop state and dispatches frames to filters
///
/// The preview is "running" while a source is attached and the active filter
/// needs pixel processing. While running, exactly one cycle is registered with
/// the scheduler; when it stops, the pending cycle is cancelled.
pub struct PipelineDriver<Src, Snk, Sch> {
    /// Live frame source (None while idle)
    source: Option<Src>,
    /// Display and capture destination
    sink: Snk,
    /// Refresh-synchronized cycle registration
    scheduler: Sch,
    /// Tier block sizes and strides
    config: PipelineConfig,
    /// Filter applied by the next cycle or capture
    active_filter: FilterType,
    /// Tier of the most recent filter pass
    tier: QualityTier,
    /// Whether preview cycles are being scheduled
    running: bool,
    /// Whether a capture pass is in progress
    capturing: bool,
    /// Cycle registered with the scheduler, if any
    pending: Option<CycleHandle>,
    /// Last successfully emitted preview frame
    preview: Option<FrameBuffer>,
    /// Completed preview cycles since start
    cycles: u64,
}

impl<Src, Snk, Sch> PipelineDriver<Src, Snk, Sch>
where
    Src: FrameSource,
    Snk: FrameSink,
    Sch: CycleScheduler,
{
    /// Create an idle driver
    pub fn new(sink: Snk, scheduler: Sch, config: PipelineConfig) -> Self {
        Self {
            source: None,
            sink,
            scheduler,
            config,
            active_filter: FilterType::None,
            tier: QualityTier::Preview,
            running: false,
            capturing: false,
            pending: None,
            preview: None,
            cycles: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        let filter = self.active_filter;
        if self.capturing {
            DriverState::Capturing { filter }
        } else if self.source.is_some() {
            DriverState::Live { filter }
        } else {
            DriverState::Idle
        }
    }

    pub fn active_filter(&self) -> FilterType {
        self.active_filter
    }

    /// Tier of the most recent filter pass
    ///
    /// `Capture` after a capture, until the next preview cycle runs.
    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Whether preview cycles are being scheduled
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a cycle is registered for the next refresh tick
    pub fn is_cycle_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    /// Last preview frame that made it to the display
    pub fn last_preview(&self) -> Option<&FrameBuffer> {
        self.preview.as_ref()
    }

    pub fn sink(&self) -> &Snk {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut Snk {
        &mut self.sink
    }

    pub fn scheduler(&self) -> &Sch {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Sch {
        &mut self.scheduler
    }

    /// Attach a frame source and go live
    ///
    /// Replaces any previously attached source.
    pub fn start(&mut self, source: Src) {
        if self.source.is_some() {
            debug!("Replacing active frame source");
        }
        self.source = Some(source);
        self.cycles = 0;
        info!(filter = %self.active_filter, "Pipeline live");
        self.sync_schedule();
    }

    /// Detach the frame source and cancel any pending cycle
    pub fn stop(&mut self) -> Option<Src> {
        let source = self.source.take();
        self.preview = None;
        self.sync_schedule();
        info!(cycles = self.cycles, "Pipeline idle");
        source
    }

    /// Switch the active filter
    ///
    /// Takes effect on the next cycle or capture; frames already emitted are
    /// not touched. Switching to a display-only filter stops the preview loop.
    pub fn set_filter(&mut self, filter: FilterType) {
        if filter == self.active_filter {
            return;
        }
        debug!(from = %self.active_filter, to = %filter, "Filter changed");
        self.active_filter = filter;
        self.sync_schedule();
    }

    /// Reconcile the pending cycle with the running condition
    fn sync_schedule(&mut self) {
        self.running = self.source.is_some() && self.active_filter.requires_pixel_processing();

        if self.running {
            if self.pending.is_none() {
                self.pending = Some(self.scheduler.request_next_cycle());
                debug!(filter = %self.active_filter, "Preview loop scheduled");
            }
        } else if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_cycle(handle);
            debug!(handle = handle.id(), "Preview loop cancelled");
        }
    }

    /// Refresh tick for a previously requested cycle
    ///
    /// Handles that were cancelled or superseded are ignored.
    pub fn on_refresh(&mut self, handle: CycleHandle) -> LoopAction {
        if self.pending != Some(handle) {
            trace!(handle = handle.id(), "Ignoring stale cycle");
            return if self.running {
                LoopAction::Continue
            } else {
                LoopAction::Stop
            };
        }
        self.pending = None;
        self.run_preview_cycle()
    }

    /// One fetch, filter, emit iteration
    ///
    /// A failed fetch keeps the previous preview on screen and the loop keeps
    /// going. Calling this repeatedly never registers more than one pending
    /// cycle.
    pub fn run_preview_cycle(&mut self) -> LoopAction {
        if !self.running {
            return LoopAction::Stop;
        }
        let Some(source) = self.source.as_mut() else {
            return LoopAction::Stop;
        };

        match source.live_frame() {
            Ok(mut frame) => {
                self.tier = QualityTier::Preview;
                apply_filter(
                    &mut frame,
                    self.active_filter,
                    QualityTier::Preview,
                    &self.config,
                );
                self.sink.emit_preview(&frame);
                self.preview = Some(frame);
                self.cycles += 1;

                if self.cycles % CYCLE_LOG_INTERVAL == 0 {
                    debug!(cycles = self.cycles, filter = %self.active_filter, "Preview cycles run");
                }
            }
            Err(e) => {
                warn!(error = %e, "Preview cycle failed, keeping previous frame");
            }
        }

        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_next_cycle());
        }
        LoopAction::Continue
    }

    /// Full-quality filter pass over a still
    ///
    /// Always uses the capture tier. Display-only filters (blur) pass the
    /// still through unchanged. The result goes to the sink and is returned.
    pub fn run_capture(&mut self, mut still: FrameBuffer) -> FrameBuffer {
        let filter = self.active_filter;
        info!(
            %filter,
            width = still.width(),
            height = still.height(),
            "Capturing still"
        );

        self.capturing = true;
        self.tier = QualityTier::Capture;
        debug!(state = ?self.state(), "Capture pass started");

        apply_filter(&mut still, filter, QualityTier::Capture, &self.config);
        self.sink.emit_capture(&still);

        self.capturing = false;
        debug!(state = ?self.state(), "Capture complete");
        still
    }

    /// Snapshot the current live frame and capture it
    pub fn capture_live(&mut self) -> PipelineResult<FrameBuffer> {
        let source = self.source.as_mut().ok_or(PipelineError::NoSource)?;
        let still = source.live_frame().map_err(|e| {
            warn!(error = %e, "Failed to snapshot frame for capture");
            e
        })?;
        Ok(self.run_capture(still))
    }
}
