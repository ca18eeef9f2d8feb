//! Index search algorithms over ordered segment slices.
//!
//! Both lookups are free functions so they can run against any segment
//! slice, not only one owned by a [`Timeline`](crate::Timeline). The
//! expanding search is the locality-friendly path: anchored near the
//! previous hit, its cost tracks the distance moved since that hit rather
//! than the slice length.

use scrubline_types::segment::Segment;

/// Find the segment whose positional interval contains `position`, probing
/// outward from `anchor`.
///
/// Candidates are visited in a zigzag expansion around the anchor: the
/// anchor itself, then `anchor - 1`, `anchor + 1`, `anchor - 2`,
/// `anchor + 2`, and so on. Once one side runs off its end of the slice,
/// every remaining probe goes the other way. Each of the `n` indices is
/// probed at most once, so a miss costs one full pass in the worst case.
///
/// The first matching index wins. Positions are not required to be
/// monotonic across a timeline, so several intervals could contain
/// `position`; no ordering among them is promised beyond proximity to the
/// anchor. Anchors past the end of the slice are clamped to the last index.
///
/// # Arguments
///
/// * `segments` - Ordered segment slice to search
/// * `position` - Target position
/// * `anchor` - Index to start probing from, typically the previous hit
///
/// # Returns
///
/// The index of the first matching segment, or `None` if no positional
/// interval contains `position` (including when `segments` is empty).
///
/// # Examples
///
/// ```rust
/// use scrubline::{expanding_position_search, Segment};
///
/// // Three linked entries covering positions [0, 5), [5, 9), [9, inf).
/// let mut segments: Vec<Segment> = Vec::new();
/// for (i, (position, time)) in [(0.0, 0.0), (5.0, 2.0), (9.0, 3.5)].into_iter().enumerate() {
///     let next = Segment::new(position, time, i as i32);
///     if let Some(last) = segments.last_mut() {
///         last.link_to(&next);
///     }
///     segments.push(next);
/// }
///
/// // The anchor affects cost, never the result.
/// assert_eq!(expanding_position_search(&segments, 6.0, 0), Some(1));
/// assert_eq!(expanding_position_search(&segments, 6.0, 2), Some(1));
/// assert_eq!(expanding_position_search(&segments, -3.0, 1), None);
/// ```
pub fn expanding_position_search(
    segments: &[Segment],
    position: f64,
    anchor: usize,
) -> Option<usize> {
    if segments.is_empty() {
        return None;
    }
    let len = segments.len();
    let anchor = anchor.min(len - 1);

    // Probes taken at or above the anchor, and below it. Even steps prefer
    // the upper side, odd steps the lower side; an exhausted side hands its
    // turn to the other.
    let mut above = 0;
    let mut below = 0;

    for step in 0..len {
        let index = if step % 2 == 0 {
            if anchor + above < len {
                above += 1;
                anchor + above - 1
            } else {
                below += 1;
                anchor - below
            }
        } else if below < anchor {
            below += 1;
            anchor - below
        } else {
            above += 1;
            anchor + above - 1
        };

        if segments[index].contains_position(position) {
            return Some(index);
        }
    }

    None
}

/// Find the first segment whose temporal interval contains `time`.
///
/// A plain scan from index zero. Temporal intervals tile the timeline
/// contiguously, so at most one segment can match.
///
/// # Arguments
///
/// * `segments` - Ordered segment slice to search
/// * `time` - Target time
///
/// # Returns
///
/// The index of the matching segment, or `None` if `time` precedes the
/// first entry or the slice is empty.
///
/// # Examples
///
/// ```rust
/// use scrubline::{linear_time_search, Segment};
///
/// let mut first = Segment::new(0.0, 0.0, 0);
/// let second = Segment::new(5.0, 2.0, 1);
/// first.link_to(&second);
///
/// let segments = [first, second];
/// assert_eq!(linear_time_search(&segments, 1.0), Some(0));
/// assert_eq!(linear_time_search(&segments, 7.5), Some(1));
/// assert_eq!(linear_time_search(&segments, -0.1), None);
/// ```
pub fn linear_time_search(segments: &[Segment], time: f64) -> Option<usize> {
    segments.iter().position(|segment| segment.contains_time(time))
}
