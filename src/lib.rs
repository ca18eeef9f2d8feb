//! In-memory, interval-indexed timeline store for scrubbable recorded state.
//!
//! ```rust
//! use scrubline::Scrubline;
//!
//! let mut timeline = Scrubline::new();
//! timeline.append(0.0, 0.0, "idle")?;
//! timeline.append(12.0, 3.0, "walk")?;
//!
//! let (state, segment) = timeline.at_position(14.5);
//! assert_eq!(state, "walk");
//! assert_eq!(segment.time(), 3.0);
//! # Ok::<(), scrubline::ScrublineError>(())
//! ```

pub mod error;
pub mod search;
pub mod timeline;
pub mod types;

pub use error::{Result, ScrublineError};

pub use timeline::Timeline;

#[cfg(feature = "sync")]
pub use timeline::SyncTimeline;

pub type Scrubline<T> = Timeline<T>;

pub use scrubline_types::segment::Segment;

pub use search::{expanding_position_search, linear_time_search};

pub use types::{Payload, TimelineStats};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Result, Scrubline, ScrublineError, Timeline};

    pub use scrubline_types::segment::Segment;

    pub use crate::types::{Payload, TimelineStats};

    #[cfg(feature = "sync")]
    pub use crate::SyncTimeline;
}
