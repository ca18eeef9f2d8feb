//! Thread-safe timeline wrapper, available with the `sync` feature.
//!
//! Wraps a [`Timeline`] in `Arc<RwLock<..>>` so one store can be shared
//! across threads. Reads run concurrently; recording and position lookups
//! take the write lock.

use crate::error::Result;
use crate::timeline::Timeline;
use crate::types::{Payload, TimelineStats};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use scrubline_types::segment::Segment;
use std::sync::Arc;

/// Thread-safe handle to a shared [`Timeline`].
///
/// Cloning is cheap and shares the same underlying store; use
/// [`Timeline::clone`] through [`read`](SyncTimeline::read) when an
/// independent deep copy is wanted.
///
/// [`at_position`](SyncTimeline::at_position) takes the write lock because
/// it moves the remembered search index. Share one handle among scrubbing
/// readers accordingly, or give latency-sensitive readers their own clone
/// of the inner timeline.
///
/// # Examples
///
/// ```rust
/// use scrubline::SyncTimeline;
///
/// let timeline = SyncTimeline::new();
/// timeline.append(0.0, 0.0, 1u64)?;
///
/// let recorder = timeline.clone();
/// std::thread::spawn(move || {
///     recorder.append(8.0, 2.0, 2u64).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline.at_time(2.0).0, 2);
/// # Ok::<(), scrubline::ScrublineError>(())
/// ```
#[derive(Clone)]
pub struct SyncTimeline<T: Payload> {
    inner: Arc<RwLock<Timeline<T>>>,
}

impl<T: Payload> SyncTimeline<T> {
    /// Create an empty shared timeline.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Timeline::new())),
        }
    }

    /// Create an empty shared timeline with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Timeline::with_capacity(capacity))),
        }
    }

    /// Number of entries in the timeline.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the timeline holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Whether an entry at position zero exists.
    pub fn has_origin(&self) -> bool {
        self.inner.read().has_origin()
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> TimelineStats {
        self.inner.read().stats()
    }

    /// Remove every entry and reset the cached state.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Append an entry. See [`Timeline::append`].
    pub fn append(&self, position: f64, elapsed: f64, payload: T) -> Result<()> {
        self.inner.write().append(position, elapsed, payload)
    }

    /// Seed the timeline at the origin, once. See
    /// [`Timeline::add_default_at_zero`].
    pub fn add_default_at_zero(&self, payload: T) -> Result<()> {
        self.inner.write().add_default_at_zero(payload)
    }

    /// Payload of the first entry, or `T::default()` when empty.
    pub fn first_payload(&self) -> T {
        self.inner.read().first_payload()
    }

    /// Payload of the last entry, or `T::default()` when empty.
    pub fn last_payload(&self) -> T {
        self.inner.read().last_payload()
    }

    /// Segment of the first entry, or [`Segment::INVALID`] when empty.
    pub fn first_segment(&self) -> Segment {
        self.inner.read().first_segment()
    }

    /// Segment of the last entry, or [`Segment::INVALID`] when empty.
    pub fn last_segment(&self) -> Segment {
        self.inner.read().last_segment()
    }

    /// Entry whose temporal interval contains `time`, or the sentinel pair.
    pub fn at_time(&self, time: f64) -> (T, Segment) {
        self.inner.read().at_time(time)
    }

    /// Entry whose positional interval contains `position`, or the sentinel
    /// pair. Takes the write lock to move the remembered index.
    pub fn at_position(&self, position: f64) -> (T, Segment) {
        self.inner.write().at_position(position)
    }

    /// Entry at `index`, or the sentinel pair when out of range.
    pub fn at_index(&self, index: i32) -> (T, Segment) {
        self.inner.read().at_index(index)
    }

    /// Entry following `segment`, or the sentinel pair past the end.
    pub fn next_of(&self, segment: &Segment) -> (T, Segment) {
        self.inner.read().next_of(segment)
    }

    /// Entry preceding `segment`, or the sentinel pair before the start.
    pub fn previous_of(&self, segment: &Segment) -> (T, Segment) {
        self.inner.read().previous_of(segment)
    }

    /// Acquire a read guard on the wrapped [`Timeline`], for running several
    /// lookups under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, Timeline<T>> {
        self.inner.read()
    }

    /// Acquire a write guard on the wrapped [`Timeline`].
    pub fn write(&self) -> RwLockWriteGuard<'_, Timeline<T>> {
        self.inner.write()
    }
}

impl<T: Payload> Default for SyncTimeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure SyncTimeline is Send + Sync
const _: () = {
    const fn assert_send_sync<S: Send + Sync>() {}
    let _ = assert_send_sync::<SyncTimeline<u64>>;
};
