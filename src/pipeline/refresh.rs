// SPDX-License-Identifier: GPL-3.0-only
//! Refresh loop driving preview cycles
//!
//! Stands in for a display-refresh callback: a `tokio` interval ticks at the
//! refresh period and fires whichever cycle the driver registered. The loop
//! ends once the driver stops scheduling (filter switched to a display-only
//! one, or the source was detached), when the stop signal is raised, or
//! after an optional tick limit.
//!
//! # Example
//!
//! ```ignore
//! let refresh = RefreshLoop::new("preview");
//! let stop = refresh.stop_signal();
//!
//! // Later, from a UI callback on the same runtime
//! stop.store(true, Ordering::SeqCst);
//!
//! let fired = refresh.run(&mut driver).await;
//! ```

use super::driver::PipelineDriver;
use super::scheduler::{LoopAction, RefreshScheduler};
use super::{FrameSink, FrameSource};
use crate::constants::DEFAULT_REFRESH_PERIOD;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

/// Cooperative refresh loop for a [`PipelineDriver`]
pub struct RefreshLoop {
    /// Name for logging
    name: String,
    /// Time between refresh ticks
    period: Duration,
    /// Stop after this many fired cycles
    max_cycles: Option<u64>,
    /// Signal to stop the loop
    stop_signal: Arc<AtomicBool>,
}

impl RefreshLoop {
    /// Create a loop ticking at the default refresh period
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            period: DEFAULT_REFRESH_PERIOD,
            max_cycles: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the refresh period
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Stop after firing `max_cycles` cycles
    pub fn with_max_cycles(mut self, max_cycles: u64) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Get a clone of the stop signal for external use
    pub fn stop_signal(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_signal)
    }

    /// Signal the loop to stop before its next cycle
    ///
    /// The run that sees the signal clears it, so a later `run` starts fresh.
    pub fn request_stop(&self) {
        debug!(name = %self.name, "Requesting refresh loop stop");
        self.stop_signal.store(true, Ordering::SeqCst);
    }

    /// Run until the driver stops scheduling cycles
    ///
    /// Returns the number of cycles fired.
    pub async fn run<Src, Snk>(
        &self,
        driver: &mut PipelineDriver<Src, Snk, RefreshScheduler>,
    ) -> u64
    where
        Src: FrameSource,
        Snk: FrameSink,
    {
        self.run_with(driver, |_, _| {}).await
    }

    /// Run with a hook invoked at the start of every tick
    ///
    /// The hook gets the driver and the tick number, so UI events such as
    /// filter changes can be applied between cycles on the same thread.
    pub async fn run_with<Src, Snk, F>(
        &self,
        driver: &mut PipelineDriver<Src, Snk, RefreshScheduler>,
        mut on_tick: F,
    ) -> u64
    where
        Src: FrameSource,
        Snk: FrameSink,
        F: FnMut(&mut PipelineDriver<Src, Snk, RefreshScheduler>, u64),
    {
        info!(
            name = %self.name,
            period_ms = self.period.as_millis() as u64,
            "Starting refresh loop"
        );

        let mut ticker = tokio::time::interval(self.period);
        // A slow cycle drops frames instead of bursting to catch up
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut ticks = 0u64;
        let mut fired = 0u64;

        loop {
            ticker.tick().await;

            // Consume the request so the loop can be run again
            if self.stop_signal.swap(false, Ordering::SeqCst) {
                debug!(name = %self.name, "Stop signal received");
                break;
            }

            on_tick(&mut *driver, ticks);
            ticks += 1;

            let Some(handle) = driver.scheduler_mut().take_due() else {
                debug!(name = %self.name, "No cycle pending");
                break;
            };

            let started = Instant::now();
            let action = driver.on_refresh(handle);
            fired += 1;

            let elapsed = started.elapsed();
            if elapsed > self.period {
                trace!(
                    name = %self.name,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Cycle exceeded refresh budget"
                );
            }

            if action == LoopAction::Stop {
                debug!(name = %self.name, "Driver stopped scheduling");
                break;
            }

            if let Some(max) = self.max_cycles
                && fired >= max
            {
                debug!(name = %self.name, fired, "Cycle limit reached");
                break;
            }
        }

        info!(name = %self.name, fired, "Refresh loop exiting");
        fired
    }
}
