//! Search budgets: fixed depth plus optional wall-clock and node limits.
//!
//! A search that runs out of budget keeps the best root move among the root
//! children it finished and reports `stopped`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Limits for one search call.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Lookahead horizon in plies
    pub depth: u8,
    /// Wall-clock budget for this move (None = unbounded)
    pub move_time: Option<Duration>,
    /// Node budget (None = unbounded)
    pub max_nodes: Option<u64>,
    /// Shared stop flag and clock
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Depth only, no budget.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            max_nodes: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Depth plus a wall-clock budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            max_nodes: None,
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<u64>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Start the clock. Call this when the search begins.
    pub fn start(&self) {
        self.time_control.start();
    }

    /// Whether a search that has expanded `nodes` nodes must stop now.
    ///
    /// The node budget is checked against the caller's own counter and does
    /// not raise the shared stop flag.
    #[inline]
    pub fn exhausted(&self, nodes: u64) -> bool {
        if self.max_nodes.is_some_and(|limit| nodes >= limit) {
            return true;
        }
        if self.time_control.is_stopped() {
            return true;
        }
        self.time_control.should_check_time(nodes) && self.time_control.check_time()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Thread-safe stop flag and clock, cheap to clone and share between the
/// workers of a parallel root search.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// Clock is read once every `check_interval` nodes
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
            check_interval: 256,
        }
    }

    pub fn start(&self) {
        *self.start_time.write().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Read the clock and raise the stop flag if the budget is spent.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && self.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        self.time_limit.is_some() && nodes.is_multiple_of(self.check_interval)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining budget (None if unbounded).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
