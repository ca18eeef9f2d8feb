//! Core timeline store implementation.
//!
//! This module defines the main `Timeline` type: two index-aligned,
//! append-only sequences (payloads and interval segments) plus the
//! remembered index that anchors position searches near their previous hit.

use crate::error::{Result, ScrublineError};
use crate::search::{expanding_position_search, linear_time_search};
use crate::types::{Payload, TimelineStats};
use scrubline_types::segment::Segment;

#[cfg(feature = "sync")]
mod sync;

#[cfg(feature = "sync")]
pub use sync::SyncTimeline;

/// In-memory, interval-indexed timeline store (single-threaded by design).
///
/// A `Timeline` maps a sequence of payload values to non-overlapping
/// intervals along two independent axes, time and position, and answers
/// "what is active at time T" and "what is active at position P" lookups.
/// Appends arrive in increasing-time order; each append closes the previous
/// entry's open upper bounds, so temporal intervals tile the timeline with
/// no gaps or overlaps.
///
/// Position lookups are tuned for scrubbing: the search starts at the index
/// of the previous hit and expands outward, so moving a little costs a
/// little. Time lookups scan from the start and are intended for occasional
/// use.
///
/// # Thread Safety
///
/// A `Timeline` is **not** internally synchronized. The remembered index
/// makes [`at_position`](Timeline::at_position) a mutating call, so the
/// borrow checker already enforces the required discipline: any number of
/// concurrent `&self` reads, never concurrent with `append`, `clear`, or
/// `at_position`. To share one instance across threads, either wrap it
/// yourself or enable the `sync` feature and use `SyncTimeline`:
///
/// ```toml
/// [dependencies]
/// scrubline = { version = "0.1", features = ["sync"] }
/// ```
///
/// Cloning is a deep copy; clones never share backing storage.
///
/// # Examples
///
/// ```rust
/// use scrubline::Timeline;
///
/// let mut timeline = Timeline::new();
///
/// // Record phases of a run: (position, elapsed time, payload).
/// timeline.append(0.0, 0.0, "warmup")?;
/// timeline.append(40.0, 12.5, "sprint")?;
/// timeline.append(160.0, 9.0, "cooldown")?;
///
/// let (phase, _) = timeline.at_time(13.0);
/// assert_eq!(phase, "sprint");
///
/// let (phase, segment) = timeline.at_position(10.0);
/// assert_eq!(phase, "warmup");
/// assert_eq!(segment.data_index(), 0);
/// # Ok::<(), scrubline::ScrublineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timeline<T: Payload> {
    /// Stored payloads, index-aligned with `segments`
    payloads: Vec<T>,
    /// Interval descriptors, one per payload
    segments: Vec<Segment>,
    /// Index of the previous successful position match
    remembered: usize,
    /// Whether an entry at position zero exists
    has_origin: bool,
    /// Operation counters
    stats: TimelineStats,
}

impl<T: Payload> Timeline<T> {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty timeline with room for `capacity` entries in both
    /// backing sequences.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            payloads: Vec::with_capacity(capacity),
            segments: Vec::with_capacity(capacity),
            remembered: 0,
            has_origin: false,
            stats: TimelineStats::new(),
        }
    }

    /// Number of entries in the timeline.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether an entry at position zero exists.
    #[inline]
    pub fn has_origin(&self) -> bool {
        self.has_origin
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> TimelineStats {
        self.stats
    }

    /// Remove every entry and reset the search cache, origin flag, and
    /// counters. Backing capacity is retained for reuse.
    pub fn clear(&mut self) {
        self.payloads.clear();
        self.segments.clear();
        self.remembered = 0;
        self.has_origin = false;
        self.stats = TimelineStats::new();
    }

    // ===== Recording =====

    /// Append an entry whose intervals start at `position` and at the
    /// previous entry's time plus `elapsed`.
    ///
    /// The previous entry's open upper bounds are closed in place at the new
    /// entry's lower bounds, so temporal intervals stay tiled. The new entry
    /// keeps infinite upper bounds until the next append.
    ///
    /// The first entry accepts any `elapsed` and stores it as its absolute
    /// time; pass `0.0` to start the timeline at the origin. Every later
    /// append requires `elapsed > 0`.
    ///
    /// Positions are free to move backward or repeat, but a `position` that
    /// does not advance past the previous entry's makes that entry's
    /// positional interval empty: the entry stays reachable by time or
    /// index, yet no position query can ever return it. A warning is logged
    /// when an append does this.
    ///
    /// # Errors
    ///
    /// [`ScrublineError::InvalidInput`] when the timeline is non-empty and
    /// `elapsed <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scrubline::Timeline;
    ///
    /// let mut timeline = Timeline::new();
    /// timeline.append(0.0, 0.0, 1u32)?;
    /// timeline.append(6.0, 2.0, 2u32)?;
    ///
    /// assert_eq!(timeline.last_segment().time(), 2.0);
    /// assert!(timeline.append(9.0, 0.0, 3u32).is_err());
    /// # Ok::<(), scrubline::ScrublineError>(())
    /// ```
    pub fn append(&mut self, position: f64, elapsed: f64, payload: T) -> Result<()> {
        if !self.segments.is_empty() && elapsed <= 0.0 {
            return Err(ScrublineError::InvalidInput(format!(
                "elapsed time must be positive after the first entry, got: {} (position: {})",
                elapsed, position
            )));
        }

        let time = match self.segments.last() {
            Some(last) => {
                if position <= last.position() {
                    log::warn!(
                        "position {} does not advance past {}; the previous entry's positional interval is empty and unreachable by position queries",
                        position,
                        last.position()
                    );
                }
                last.time() + elapsed
            }
            None => elapsed,
        };

        let segment = Segment::new(position, time, self.segments.len() as i32);
        if let Some(last) = self.segments.last_mut() {
            last.link_to(&segment);
        }
        self.segments.push(segment);
        self.payloads.push(payload);

        if position == 0.0 {
            self.has_origin = true;
        }
        self.stats.record_append();
        log::trace!(
            "appended entry {} at position {}, time {}",
            segment.data_index(),
            position,
            time
        );
        Ok(())
    }

    /// Seed the timeline with `payload` at position and time zero, once.
    ///
    /// A no-op when an entry at position zero already exists. Seeding first
    /// guarantees that queries from the origin onward always find an entry.
    ///
    /// Call this before recording or not at all: on a timeline that already
    /// holds entries but none at position zero, the nested zero-elapsed
    /// append violates the append precondition and this call fails with
    /// [`ScrublineError::InvalidInput`] instead of corrupting the interval
    /// tiling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scrubline::Timeline;
    ///
    /// let mut timeline = Timeline::new();
    /// timeline.add_default_at_zero("empty")?;
    /// timeline.add_default_at_zero("ignored")?;
    ///
    /// assert_eq!(timeline.len(), 1);
    /// assert_eq!(timeline.first_payload(), "empty");
    /// # Ok::<(), scrubline::ScrublineError>(())
    /// ```
    pub fn add_default_at_zero(&mut self, payload: T) -> Result<()> {
        if self.has_origin {
            return Ok(());
        }
        self.append(0.0, 0.0, payload)
    }

    // ===== Accessors =====

    /// Payload of the first entry, or `T::default()` when empty.
    pub fn first_payload(&self) -> T {
        self.payloads.first().copied().unwrap_or_default()
    }

    /// Payload of the last entry, or `T::default()` when empty.
    pub fn last_payload(&self) -> T {
        self.payloads.last().copied().unwrap_or_default()
    }

    /// Segment of the first entry, or [`Segment::INVALID`] when empty.
    pub fn first_segment(&self) -> Segment {
        self.segments.first().copied().unwrap_or(Segment::INVALID)
    }

    /// Segment of the last entry, or [`Segment::INVALID`] when empty.
    pub fn last_segment(&self) -> Segment {
        self.segments.last().copied().unwrap_or(Segment::INVALID)
    }

    // ===== Lookups =====

    /// Entry whose temporal interval contains `time`, or the sentinel pair.
    ///
    /// Scans from the first entry. Temporal intervals tile contiguously, so
    /// at most one entry can match; times before the first entry and
    /// lookups on an empty timeline yield `(T::default(), Segment::INVALID)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scrubline::Timeline;
    ///
    /// let mut timeline = Timeline::new();
    /// timeline.append(0.0, 0.0, "a")?;
    /// timeline.append(5.0, 2.0, "b")?;
    ///
    /// assert_eq!(timeline.at_time(1.9).0, "a");
    /// assert_eq!(timeline.at_time(2.0).0, "b");
    /// assert!(timeline.at_time(-1.0).1.is_invalid());
    /// # Ok::<(), scrubline::ScrublineError>(())
    /// ```
    pub fn at_time(&self, time: f64) -> (T, Segment) {
        match linear_time_search(&self.segments, time) {
            Some(index) => (self.payloads[index], self.segments[index]),
            None => (T::default(), Segment::INVALID),
        }
    }

    /// Entry whose positional interval contains `position`, or the sentinel
    /// pair.
    ///
    /// Probes outward from the remembered index, which is moved to each hit
    /// so that runs of nearby lookups stay cheap. The remembered index only
    /// affects cost: any reachable entry is found from any anchor. A miss
    /// leaves the remembered index unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scrubline::Timeline;
    ///
    /// let mut timeline = Timeline::new();
    /// timeline.append(0.0, 0.0, "intro")?;
    /// timeline.append(30.0, 4.0, "verse")?;
    ///
    /// let (section, segment) = timeline.at_position(31.5);
    /// assert_eq!(section, "verse");
    /// assert!(segment.contains_position(31.5));
    /// # Ok::<(), scrubline::ScrublineError>(())
    /// ```
    pub fn at_position(&mut self, position: f64) -> (T, Segment) {
        match expanding_position_search(&self.segments, position, self.remembered) {
            Some(index) => {
                self.remembered = index;
                self.stats.record_position_query(true);
                (self.payloads[index], self.segments[index])
            }
            None => {
                self.stats.record_position_query(false);
                (T::default(), Segment::INVALID)
            }
        }
    }

    /// Entry at `index`, or the sentinel pair for any index outside the
    /// stored range (including `-1`, the sentinel's own payload index).
    pub fn at_index(&self, index: i32) -> (T, Segment) {
        if index < 0 || index as usize >= self.segments.len() {
            return (T::default(), Segment::INVALID);
        }
        let index = index as usize;
        (self.payloads[index], self.segments[index])
    }

    /// Entry following `segment`, or the sentinel pair past the end.
    ///
    /// Adjacency is payload-index arithmetic: the entry after the sentinel
    /// (`data_index` `-1`) is the first entry.
    pub fn next_of(&self, segment: &Segment) -> (T, Segment) {
        self.at_index(segment.data_index() + 1)
    }

    /// Entry preceding `segment`, or the sentinel pair before the start.
    pub fn previous_of(&self, segment: &Segment) -> (T, Segment) {
        self.at_index(segment.data_index() - 1)
    }
}
