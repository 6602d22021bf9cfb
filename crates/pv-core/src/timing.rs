//! Stage timing for adjacency rebuilds and path searches.
//!
//! Off by default; set `PV_TIMING` or call [`enable_timing`]. Each stage keeps
//! a running total in [`solve_timing`], and [`solve_timing::log_summary`]
//! reports it through `tracing`.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

static ENABLED: AtomicBool = AtomicBool::new(false);

pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var_os("PV_TIMING").is_some()
}

/// Measures one run of a stage. Holds no start time when timing is off.
pub struct Timer {
    label: &'static str,
    started: Option<Instant>,
}

impl Timer {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            started: is_enabled().then(Instant::now),
        }
    }

    /// Add the elapsed time to `stage` and log it.
    pub fn stop_into(self, stage: &StageTotals) {
        let Some(started) = self.started else {
            return;
        };
        let elapsed = started.elapsed();
        stage.record(elapsed);
        tracing::debug!(
            label = self.label,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "timing"
        );
    }
}

/// Run count and total time of one stage, shareable as a `static`.
pub struct StageTotals {
    total_ns: AtomicU64,
    runs: AtomicU64,
}

impl StageTotals {
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            runs: AtomicU64::new(0),
        }
    }

    pub fn record(&self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.runs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn runs(&self) -> u64 {
        self.runs.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.total_ns.load(Ordering::Relaxed))
    }
}

/// Per-stage totals for the solve pipeline.
pub mod solve_timing {
    use super::StageTotals;

    pub static ADJACENCY_BUILD: StageTotals = StageTotals::new();
    pub static BFS_CALLS: StageTotals = StageTotals::new();
    pub static DFS_CALLS: StageTotals = StageTotals::new();

    /// Log run count, total and mean for every stage that ran.
    pub fn log_summary() {
        if !super::is_enabled() {
            return;
        }
        for (label, stage) in [
            ("adjacency", &ADJACENCY_BUILD),
            ("bfs", &BFS_CALLS),
            ("dfs", &DFS_CALLS),
        ] {
            let runs = stage.runs();
            if runs == 0 {
                continue;
            }
            let total_ms = stage.total().as_secs_f64() * 1000.0;
            tracing::info!(
                label,
                runs,
                total_ms,
                avg_ms = total_ms / runs as f64,
                "solve timing"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_totals_accumulate() {
        let stage = StageTotals::new();
        assert_eq!(stage.runs(), 0);
        stage.record(Duration::from_millis(500));
        stage.record(Duration::from_millis(1500));
        assert_eq!(stage.runs(), 2);
        assert_eq!(stage.total(), Duration::from_secs(2));
    }

    #[test]
    fn enabled_timer_records() {
        enable_timing();
        let stage = StageTotals::new();
        Timer::start("unit").stop_into(&stage);
        assert_eq!(stage.runs(), 1);
    }
}
