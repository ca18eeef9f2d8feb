//! # scrubline-types
//!
//! Core interval types for the Scrubline timeline store.
//!
//! This crate provides the fundamental value type for interval-indexed
//! timelines:
//!
//! - **Segment types**: `Segment`, one half-open interval in position-space
//!   and time-space, tied to a payload slot by index
//!
//! All types are serializable with Serde.
//!
//! ## Examples
//!
//! ```rust
//! use scrubline_types::segment::Segment;
//!
//! let segment = Segment::new(0.0, 0.0, 0);
//! assert!(segment.contains_position(12.5));
//! assert!(segment.contains_time(3.0));
//! ```

pub mod segment;
