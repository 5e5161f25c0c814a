//! Frame-count to SMPTE timecode conversion.
//!
//! This crate converts between an absolute count of elapsed media frames
//! and the structured `HH:MM:SS:FF` timecode form, under a closed catalog
//! of standard counting modes:
//!
//! - **Conversion**: bidirectional mapping between a frame count and the
//!   four timecode fields, including drop-frame compensation for the
//!   30- and 60-based drop modes
//! - **Validation**: range and dropped-frame-number checking of a value
//!   against a counting mode
//! - **Text codec**: canonical formatting and strict, lossless parsing
//!
//! # Quick start
//!
//! ```rust
//! use framecode::{frame_count_to_timecode, timecode_to_frame_count, FrameRateMode};
//!
//! let tc = frame_count_to_timecode(40, FrameRateMode::Fps24);
//! assert_eq!(tc.to_string(), "00:00:01:16");
//!
//! let back = timecode_to_frame_count(tc, FrameRateMode::Fps24);
//! assert_eq!(back, 40);
//! ```
//!
//! # Drop-frame counting
//!
//! Under a drop-frame mode, frame numbers are skipped at the start of every
//! minute not divisible by ten, so that nominal-rate numbering tracks real
//! elapsed time at the true NTSC rates. The skipped numbers never appear:
//!
//! ```rust
//! use framecode::{frame_count_to_timecode, FrameRateMode, TimecodeValue};
//!
//! // 30 * 61 raw frames crosses one dropping minute boundary.
//! let tc = frame_count_to_timecode(1830, FrameRateMode::Fps30Drop);
//! assert_eq!(tc.to_string(), "00:01:01;02");
//!
//! // 00:01:00;00 names a skipped frame number and is invalid.
//! let skipped = TimecodeValue::with_drop_mark(0, 1, 0, 0);
//! assert!(!skipped.is_valid(FrameRateMode::Fps30Drop));
//! ```
//!
//! # Text round trips
//!
//! ```rust
//! use framecode::{format, parse};
//!
//! let tc = parse("01:14:19:03").unwrap();
//! assert_eq!(tc.hours, 1);
//! assert!(!tc.drop_mark);
//! assert_eq!(format(tc), "01:14:19:03");
//!
//! // A semicolon before the frames field marks drop-frame display.
//! assert!(parse("01:14:19;03").unwrap().drop_mark);
//! ```
//!
//! Values are inert data: any field values can be constructed and formatted,
//! and a counting mode enters only at conversion or validation time. See
//! [`TimecodeValue`] for the details.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod mode;
pub mod timecode;

pub use error::{ParseError, Result};
pub use mode::FrameRateMode;
pub use timecode::TimecodeValue;

// Re-export drop-frame utilities
pub use dropframe::{drop_correction, is_dropped_frame};

/// An absolute count of elapsed frames. Zero frames is `00:00:00:00`.
pub type FrameCount = i64;

/// Maximum hours value in a valid timecode (23).
pub const MAX_HOURS: i32 = 23;

/// Maximum minutes value in a valid timecode (59).
pub const MAX_MINUTES: i32 = 59;

/// Maximum seconds value in a valid timecode (59).
pub const MAX_SECONDS: i32 = 59;

/// Convert an absolute frame count to a timecode value.
///
/// The drop mark of the result reflects the mode. The sign of a negative
/// count is discarded: `-n` produces the same fields as `n`.
#[must_use]
pub fn frame_count_to_timecode(frame_count: FrameCount, mode: FrameRateMode) -> TimecodeValue {
    TimecodeValue::from_frame_count(frame_count, mode)
}

/// Convert a timecode value to an absolute frame count under the given mode.
#[must_use]
pub fn timecode_to_frame_count(value: TimecodeValue, mode: FrameRateMode) -> FrameCount {
    value.to_frame_count(mode)
}

/// Check whether a timecode value is well-formed and drop-frame-legal under
/// the given mode.
#[must_use]
pub fn is_valid(value: TimecodeValue, mode: FrameRateMode) -> bool {
    value.is_valid(mode)
}

/// Format a timecode value to its canonical string.
///
/// Equivalent to the value's `Display` implementation.
#[must_use]
pub fn format(value: TimecodeValue) -> String {
    value.to_string()
}

/// Parse a timecode string.
///
/// Equivalent to the value's `FromStr` implementation; see
/// [`TimecodeValue`] for the accepted grammar.
pub fn parse(text: &str) -> Result<TimecodeValue> {
    text.parse()
}
