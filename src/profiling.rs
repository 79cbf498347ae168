//! Loop timing metrics and the in-app event log.
//!
//! Both are shown on the debug page. [`DebugLog`] also forwards every line to
//! `tracing`, so the same events land in the terminal log.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//! let mut log = DebugLog::new();
//!
//! // In main loop:
//! let loop_start = Instant::now();
//! // ... poll, draw ...
//! let render_time = loop_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(loop_start.elapsed(), render_time, sleep_time);
//!
//! log.push("Engine: ON");
//! ```

use core::fmt::Write;
use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines kept for the debug page.
pub const LOG_BUFFER_SIZE: usize = 12;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Loop timing and event counters.
pub struct ProfilingMetrics {
    // Loop timing (microseconds)
    /// Total iteration time (poll + draw + sleep)
    pub frame_time_us: u32,
    /// Time spent polling and drawing
    pub render_time_us: u32,
    /// Time spent sleeping until the next deadline
    pub sleep_time_us: u32,

    /// Minimum iteration time observed
    pub frame_time_min_us: u32,
    /// Maximum iteration time observed
    pub frame_time_max_us: u32,
    /// Exponential moving average of the iteration time
    frame_time_avg_us: f32,

    // Counters
    /// Loop iterations since startup
    pub total_frames: u64,
    /// Dashboard ticks
    pub ticks: u64,
    /// Clock refreshes
    pub clock_refreshes: u32,
    /// Ticks on which the warning condition held
    pub warning_ticks: u32,
    /// Indicator toggles from the keyboard
    pub indicator_toggles: u32,
    /// Full dashboard redraws
    pub redraws: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Create metrics and start the uptime clock.
    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            ticks: 0,
            clock_refreshes: 0,
            warning_ticks: 0,
            indicator_toggles: 0,
            redraws: 0,
            start_time: Instant::now(),
        }
    }

    /// EMA smoothing factor.
    const EMA_ALPHA: f32 = 0.1;

    /// Record timing for one loop iteration.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        self.frame_time_avg_us = if self.total_frames == 0 {
            total_us as f32
        } else {
            Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us)
        };

        self.total_frames += 1;
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Loop iterations per second, from the moving average.
    pub fn loop_rate(&self) -> f32 {
        if self.frame_time_avg_us > 0.0 {
            1_000_000.0 / self.frame_time_avg_us
        } else {
            0.0
        }
    }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Uptime as `HH:MM:SS`.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime()) }

    /// Count one dashboard tick, and whether the warning held on it.
    #[inline]
    pub const fn inc_tick(
        &mut self,
        warning: bool,
    ) {
        self.ticks += 1;
        if warning {
            self.warning_ticks += 1;
        }
    }

    #[inline]
    pub const fn inc_clock_refreshes(&mut self) { self.clock_refreshes += 1; }

    #[inline]
    pub const fn inc_indicator_toggles(&mut self) { self.indicator_toggles += 1; }

    #[inline]
    pub const fn inc_redraws(&mut self) { self.redraws += 1; }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format a duration as `HH:MM:SS`. Hours keep counting past 99.
fn format_hms(elapsed: Duration) -> String<12> {
    let secs = elapsed.as_secs();
    let mut s = String::new();
    write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60).ok();
    s
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer of recent events for the debug page.
///
/// Keeps the last [`LOG_BUFFER_SIZE`] lines; older lines are dropped. Lines
/// longer than [`LOG_LINE_LENGTH`] - 1 characters are truncated.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Append a line and emit it as a `tracing` event.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        tracing::info!(target: "cluster::events", "{msg}");

        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars().take(LOG_LINE_LENGTH - 1) {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    #[inline]
    #[allow(dead_code)]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiling_metrics_new() {
        let metrics = ProfilingMetrics::new();
        assert_eq!(metrics.total_frames, 0);
        assert_eq!(metrics.ticks, 0);
        assert_eq!(metrics.frame_time_min_us, u32::MAX);
        assert_eq!(metrics.frame_time_max_us, 0);
        assert_eq!(metrics.loop_rate(), 0.0);
    }

    #[test]
    fn test_record_frame() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(
            Duration::from_micros(10000),
            Duration::from_micros(2000),
            Duration::from_micros(8000),
        );

        assert_eq!(metrics.total_frames, 1);
        assert_eq!(metrics.frame_time_us, 10000);
        assert_eq!(metrics.render_time_us, 2000);
        assert_eq!(metrics.sleep_time_us, 8000);
        assert_eq!(metrics.frame_time_avg_us(), 10000);
        assert!((metrics.loop_rate() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_frame_min_max() {
        let mut metrics = ProfilingMetrics::new();
        for us in [10000, 4000, 12000] {
            metrics.record_frame(Duration::from_micros(us), Duration::ZERO, Duration::ZERO);
        }
        assert_eq!(metrics.frame_time_min_us, 4000);
        assert_eq!(metrics.frame_time_max_us, 12000);
    }

    #[test]
    fn test_tick_counters() {
        let mut metrics = ProfilingMetrics::new();
        metrics.inc_tick(false);
        metrics.inc_tick(true);
        metrics.inc_tick(true);
        metrics.inc_clock_refreshes();
        metrics.inc_indicator_toggles();
        metrics.inc_redraws();
        assert_eq!(metrics.ticks, 3);
        assert_eq!(metrics.warning_ticks, 2);
        assert_eq!(metrics.clock_refreshes, 1);
        assert_eq!(metrics.indicator_toggles, 1);
        assert_eq!(metrics.redraws, 1);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::ZERO).as_str(), "00:00:00");
        assert_eq!(format_hms(Duration::from_secs(3661)).as_str(), "01:01:01");
        assert_eq!(format_hms(Duration::from_secs(100 * 3600)).as_str(), "100:00:00");
    }

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());
        log.push("Dashboard running");
        log.push("Engine: ON");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), ["Dashboard running", "Engine: ON"]);
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();
        for i in 0..LOG_BUFFER_SIZE {
            log.push(&format!("Message {i}"));
        }
        log.push("New message");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        let first = log.iter().next().unwrap();
        assert_eq!(first, "Message 1", "oldest line dropped");
        assert_eq!(log.iter().last().unwrap(), "New message");
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        log.push("This is a very long message that exceeds the maximum line length limit");
        let stored = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH - 1);
    }
}
