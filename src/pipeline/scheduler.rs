// SPDX-License-Identifier: GPL-3.0-only

//! Cycle scheduling primitives for the preview loop
//!
//! The driver never reschedules itself through a captured closure. It asks a
//! [`CycleScheduler`] for a [`CycleHandle`], keeps that handle, and cancels it
//! on teardown. Whoever owns the refresh clock hands the handle back via
//! `PipelineDriver::on_refresh` when the tick arrives.

/// Action returned by a preview cycle to control loop behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    /// Another cycle is scheduled
    Continue,
    /// The preview is stopped; nothing further is scheduled
    Stop,
}

/// Token identifying one scheduled cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleHandle(u64);

impl CycleHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Refresh-synchronized callback registration
pub trait CycleScheduler {
    /// Register interest in the next refresh tick
    fn request_next_cycle(&mut self) -> CycleHandle;

    /// Deregister a previously requested cycle
    ///
    /// Cancelling a handle that already fired or was never issued is a no-op.
    fn cancel_cycle(&mut self, handle: CycleHandle);
}

/// Single-slot scheduler polled by the refresh loop
///
/// At most one cycle is due at a time, matching the one-callback-per-frame
/// model of a display refresh.
#[derive(Debug, Default)]
pub struct RefreshScheduler {
    next_id: u64,
    due: Option<CycleHandle>,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the due cycle, if any, for firing on this tick
    pub fn take_due(&mut self) -> Option<CycleHandle> {
        self.due.take()
    }

    /// Whether a cycle is waiting for the next tick
    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }
}

impl CycleScheduler for RefreshScheduler {
    fn request_next_cycle(&mut self) -> CycleHandle {
        self.next_id += 1;
        let handle = CycleHandle(self.next_id);
        self.due = Some(handle);
        handle
    }

    fn cancel_cycle(&mut self, handle: CycleHandle) {
        if self.due == Some(handle) {
            self.due = None;
        }
    }
}
