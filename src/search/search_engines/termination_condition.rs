use crate::search::search_engines::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Optional wall-clock and memory ceilings for a single search invocation,
/// plus peak-memory tracking for the final report. Memory sampling degrades
/// gracefully: on platforms where [`memory_stats`] has nothing to offer the
/// peak simply stays `None`.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_bytes: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, memory_limit_mb: Option<usize>) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        let mut condition = Self {
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_bytes: None,
            last_log_time: Instant::now(),
        };
        condition.sample_memory();
        condition
    }

    /// Unbounded run, still tracks elapsed time and peak memory.
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    fn sample_memory(&mut self) -> Option<usize> {
        let usage = memory_stats().map(|usage| usage.physical_mem);
        self.peak_memory_usage_bytes = self.peak_memory_usage_bytes.max(usage);
        usage
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage.map(|bytes| bytes / 1024 / 1024),
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        self.sample_memory();
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_bytes.map(|b| b / 1024 / 1024),
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Called from every engine loop: reports the distinct result kind when
    /// a limit has been crossed. A memory ceiling forces a fresh sample on
    /// every call; the periodic 10-second cadence is far too coarse for
    /// searches that finish in well under a second.
    pub fn should_terminate(&mut self) -> Option<SearchResult> {
        self.log_if_needed();
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            self.sample_memory();
            if let Some(peak_bytes) = self.peak_memory_usage_bytes {
                if peak_bytes / 1024 / 1024 > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn peak_memory_usage_bytes(&self) -> Option<usize> {
        self.peak_memory_usage_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_never_terminates() {
        let mut condition = TerminationCondition::unbounded();
        assert_eq!(condition.should_terminate(), None);
    }

    #[test]
    fn exceeded_memory_limit_terminates() {
        let mut condition = TerminationCondition::new(None, Some(0));
        if condition.peak_memory_usage_bytes().is_none() {
            // No memory sampling on this platform; the ceiling can never
            // trip and the condition degrades to unbounded.
            return;
        }
        // Any live process is larger than a zero-megabyte ceiling.
        assert_eq!(
            condition.should_terminate(),
            Some(SearchResult::MemoryLimitExceeded)
        );
    }

    #[test]
    fn expired_time_limit_terminates() {
        let mut condition = TerminationCondition::new(Some(Duration::from_secs(0)), None);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(
            condition.should_terminate(),
            Some(SearchResult::TimeLimitExceeded)
        );
    }
}
