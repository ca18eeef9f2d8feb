//! Payload constraints and statistics for the timeline store.

use serde::{Deserialize, Serialize};

/// Marker trait for values a timeline can store.
///
/// Payloads must be plain copyable data: `Copy` rules out embedded
/// references and shared ownership, `Default` supplies the payload half of
/// the "not found" sentinel pair, and `'static` rules out borrowed data.
/// Every type meeting the bounds implements `Payload` automatically.
///
/// # Examples
///
/// ```rust
/// use scrubline::Timeline;
///
/// // u64, f32, small arrays, &'static str, ... all qualify.
/// let mut ids: Timeline<u64> = Timeline::new();
/// let mut labels: Timeline<&'static str> = Timeline::new();
///
/// ids.append(0.0, 0.0, 42)?;
/// labels.append(0.0, 0.0, "start")?;
/// # Ok::<(), scrubline::ScrublineError>(())
/// ```
pub trait Payload: Copy + Default + 'static {}

impl<T: Copy + Default + 'static> Payload for T {}

/// Timeline statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineStats {
    /// Number of entries appended since creation or the last clear
    pub appends: u64,
    /// Number of position queries issued
    pub position_queries: u64,
    /// Number of position queries that matched no interval
    pub position_misses: u64,
}

impl TimelineStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an append
    pub fn record_append(&mut self) {
        self.appends += 1;
    }

    /// Record a position query and whether it found a match
    pub fn record_position_query(&mut self, hit: bool) {
        self.position_queries += 1;
        if !hit {
            self.position_misses += 1;
        }
    }
}
