use std::collections::HashMap;
use std::time::Duration;

/// Per-part execution timing collected by the drive loop.
///
/// Purely observational: the numbers never influence scheduling. They exist
/// so a slow part shows up in the shutdown summary instead of being guessed
/// at from a sagging cycle rate.
#[derive(Debug, Clone, Default)]
pub struct LoopProfiler {
    part_stats: HashMap<&'static str, PartStats>,
}

/// Statistics for a single part
/// Uses Welford's online algorithm for variance calculation
#[derive(Debug, Clone)]
pub struct PartStats {
    /// Average execution time in microseconds
    pub avg_us: f64,
    /// Standard deviation in microseconds
    pub stddev_us: f64,
    /// Number of samples collected
    pub count: u64,
    /// Minimum execution time observed
    pub min_us: f64,
    /// Maximum execution time observed
    pub max_us: f64,
    // Welford's algorithm internal state
    mean: f64,
    m2: f64,
}

impl Default for PartStats {
    fn default() -> Self {
        Self {
            avg_us: 0.0,
            stddev_us: 0.0,
            count: 0,
            min_us: f64::MAX,
            max_us: 0.0,
            mean: 0.0,
            m2: 0.0,
        }
    }
}

impl PartStats {
    /// Update statistics with a new sample using Welford's online algorithm,
    /// which tracks variance without storing all samples.
    fn update(&mut self, duration_us: f64) {
        self.count += 1;

        self.min_us = self.min_us.min(duration_us);
        self.max_us = self.max_us.max(duration_us);

        let delta = duration_us - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = duration_us - self.mean;
        self.m2 += delta * delta2;

        self.avg_us = self.mean;
        if self.count > 1 {
            self.stddev_us = (self.m2 / (self.count - 1) as f64).sqrt();
        }
    }
}

impl LoopProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one execution of the named part.
    pub fn record(&mut self, part_name: &'static str, duration: Duration) {
        self.part_stats
            .entry(part_name)
            .or_default()
            .update(duration.as_secs_f64() * 1_000_000.0);
    }

    /// Stats for one part, if it has run at least once.
    pub fn stats(&self, part_name: &str) -> Option<&PartStats> {
        self.part_stats.get(part_name)
    }

    /// Log a one-line timing summary per part.
    pub fn log_summary(&self) {
        for (name, stats) in &self.part_stats {
            log::debug!(
                "part '{}': {} runs, avg {:.1}us (min {:.1}us / max {:.1}us, stddev {:.1}us)",
                name,
                stats.count,
                stats.avg_us,
                stats.min_us,
                stats.max_us,
                stats.stddev_us
            );
        }
    }
}
