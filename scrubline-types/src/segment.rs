use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of an interval-indexed timeline: a half-open interval in
/// position-space and a half-open interval in time-space, tied to a payload
/// slot by index.
///
/// A segment starts open-ended: both upper bounds are positive infinity
/// until the following entry is appended, at which point [`link_to`] closes
/// them exactly once. All range tests are half-open, `lower <= x < upper`.
///
/// Equality compares only the lower time bound, so two segments are equal
/// iff they start at the same time.
///
/// [`link_to`]: Segment::link_to
///
/// # Examples
///
/// ```
/// use scrubline_types::segment::Segment;
///
/// let mut first = Segment::new(0.0, 0.0, 0);
/// let second = Segment::new(5.0, 2.0, 1);
///
/// // The newest segment covers everything from its lower bounds upward.
/// assert!(first.contains_position(100.0));
///
/// // Linking closes the upper bounds at the next segment's lower bounds.
/// first.link_to(&second);
/// assert!(first.contains_position(4.9));
/// assert!(!first.contains_position(5.0));
/// assert_eq!(first.time_next(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    /// Lower positional bound (inclusive)
    position: f64,
    /// Upper positional bound (exclusive); infinite until linked
    position_next: f64,
    /// Lower temporal bound (inclusive)
    time: f64,
    /// Upper temporal bound (exclusive); infinite until linked
    time_next: f64,
    /// Index of the associated payload; -1 for the invalid sentinel
    data_index: i32,
}

impl Segment {
    /// The distinguished "not found" segment.
    ///
    /// Returned by lookups instead of an `Option` when no interval matches.
    /// Its lower bounds sit at negative infinity, its payload index at `-1`.
    pub const INVALID: Segment = Segment {
        position: f64::NEG_INFINITY,
        position_next: f64::INFINITY,
        time: f64::NEG_INFINITY,
        time_next: f64::INFINITY,
        data_index: -1,
    };

    /// Create a segment with open upper bounds.
    ///
    /// # Arguments
    ///
    /// * `position` - Lower bound of the positional interval (inclusive)
    /// * `time` - Lower bound of the temporal interval (inclusive)
    /// * `data_index` - Index of the associated payload
    ///
    /// # Examples
    ///
    /// ```
    /// use scrubline_types::segment::Segment;
    ///
    /// let segment = Segment::new(3.0, 1.5, 2);
    /// assert_eq!(segment.position(), 3.0);
    /// assert_eq!(segment.time(), 1.5);
    /// assert_eq!(segment.position_next(), f64::INFINITY);
    /// ```
    pub fn new(position: f64, time: f64, data_index: i32) -> Self {
        Self {
            position,
            position_next: f64::INFINITY,
            time,
            time_next: f64::INFINITY,
            data_index,
        }
    }

    /// Get the lower positional bound (inclusive).
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Get the upper positional bound (exclusive).
    #[inline]
    pub fn position_next(&self) -> f64 {
        self.position_next
    }

    /// Get the lower temporal bound (inclusive).
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Get the upper temporal bound (exclusive).
    #[inline]
    pub fn time_next(&self) -> f64 {
        self.time_next
    }

    /// Get the index of the associated payload (`-1` for the sentinel).
    #[inline]
    pub fn data_index(&self) -> i32 {
        self.data_index
    }

    /// Check whether `position` falls inside the positional interval.
    #[inline]
    pub fn contains_position(&self, position: f64) -> bool {
        position >= self.position && position < self.position_next
    }

    /// Check whether `time` falls inside the temporal interval.
    #[inline]
    pub fn contains_time(&self, time: f64) -> bool {
        time >= self.time && time < self.time_next
    }

    /// Close this segment's upper bounds at `next`'s lower bounds.
    ///
    /// This is the only mutation a stored segment undergoes. It happens
    /// exactly once, when the following entry is appended; the final segment
    /// of a timeline is never linked and keeps its infinite upper bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrubline_types::segment::Segment;
    ///
    /// let mut current = Segment::new(0.0, 0.0, 0);
    /// let next = Segment::new(8.0, 4.0, 1);
    ///
    /// current.link_to(&next);
    /// assert_eq!(current.position_next(), 8.0);
    /// assert_eq!(current.time_next(), 4.0);
    /// ```
    pub fn link_to(&mut self, next: &Segment) {
        self.position_next = next.position;
        self.time_next = next.time;
    }

    /// Check whether this is the invalid sentinel.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.position == f64::NEG_INFINITY && self.time == f64::NEG_INFINITY
    }

    /// Check whether this segment refers to a stored entry.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::INVALID
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P {}-{} T {}-{}",
            self.position, self.position_next, self.time, self.time_next
        )
    }
}
