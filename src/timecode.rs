//! Structured timecode values and their conversion to and from absolute
//! frame counts.
//!
//! A [`TimecodeValue`] is inert data: construction performs no validation,
//! and the four integer fields may hold any value, including out-of-range or
//! negative ones. A counting mode is supplied only at the point of
//! conversion or validity checking, never stored in the value, because the
//! same `HH:MM:SS:FF` fields mean a different frame count under different
//! modes.

use crate::dropframe;
use crate::error::{ParseError, Result};
use crate::mode::FrameRateMode;
use crate::{FrameCount, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structured timecode of the form `HH:MM:SS:FF`.
///
/// Equality is field-wise. No ordering is defined: the frames field only
/// orders meaningfully relative to a counting mode, which the value does
/// not carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimecodeValue {
    /// Hours (0-23 when valid).
    pub hours: i32,
    /// Minutes (0-59 when valid).
    pub minutes: i32,
    /// Seconds (0-59 when valid).
    pub seconds: i32,
    /// Frames (0 to fps-1 when valid, relative to a counting mode).
    pub frames: i32,
    /// Whether the separator before the frames field renders as `;`
    /// rather than `:`.
    ///
    /// This flag only affects the text representation. All arithmetic is
    /// driven by the [`FrameRateMode`] passed to the conversion functions.
    pub drop_mark: bool,
}

impl TimecodeValue {
    /// Create a timecode value with the drop mark cleared.
    ///
    /// No range checking is performed; use [`is_valid`](Self::is_valid) to
    /// check a value against a counting mode.
    #[must_use]
    pub fn new(hours: i32, minutes: i32, seconds: i32, frames: i32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
            drop_mark: false,
        }
    }

    /// Create a timecode value with the drop mark set.
    #[must_use]
    pub fn with_drop_mark(hours: i32, minutes: i32, seconds: i32, frames: i32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
            drop_mark: true,
        }
    }

    /// The zero timecode, `00:00:00:00`.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check if all four fields are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.frames == 0
    }

    /// Create a timecode value from an absolute frame count.
    ///
    /// Zero frames is `00:00:00:00`; the hours field wraps past 24 hours.
    /// The sign of a negative count is discarded: `-n` produces the same
    /// fields as `n`. Callers that need direction must track it alongside
    /// the count.
    #[must_use]
    pub fn from_frame_count(frame_count: FrameCount, mode: FrameRateMode) -> Self {
        let fps = FrameCount::from(mode.integral_fps());
        let absolute = frame_count.abs();

        let corrected = if mode.is_drop_frame() {
            absolute + dropframe::drop_correction(mode, absolute)
        } else {
            absolute
        };

        let frames = corrected % fps;
        let total_seconds = corrected / fps;
        let seconds = total_seconds % 60;
        let total_minutes = total_seconds / 60;
        let minutes = total_minutes % 60;
        let hours = (total_minutes / 60) % 24;

        Self {
            hours: hours as i32,
            minutes: minutes as i32,
            seconds: seconds as i32,
            frames: frames as i32,
            drop_mark: mode.is_drop_frame(),
        }
    }

    /// The absolute frame count for this timecode under the given mode.
    ///
    /// The drop correction is computed from the raw field arithmetic and
    /// subtracted, mirroring [`from_frame_count`](Self::from_frame_count)
    /// where it is computed from the incoming count and added.
    #[must_use]
    pub fn to_frame_count(&self, mode: FrameRateMode) -> FrameCount {
        let fps = FrameCount::from(mode.integral_fps());
        let total_seconds = 3600 * FrameCount::from(self.hours)
            + 60 * FrameCount::from(self.minutes)
            + FrameCount::from(self.seconds);
        let absolute = total_seconds * fps + FrameCount::from(self.frames);

        if mode.is_drop_frame() {
            absolute - dropframe::drop_correction(mode, absolute)
        } else {
            absolute
        }
    }

    /// Evaluate the validity of this value under the given counting mode.
    ///
    /// Each field must be non-negative and within range, and under a
    /// drop-frame mode the frames field must not name a skipped frame
    /// number.
    #[must_use]
    pub fn is_valid(&self, mode: FrameRateMode) -> bool {
        if self.hours < 0 || self.minutes < 0 || self.seconds < 0 || self.frames < 0 {
            return false;
        }
        if self.hours > MAX_HOURS
            || self.minutes > MAX_MINUTES
            || self.seconds > MAX_SECONDS
            || self.frames >= mode.integral_fps() as i32
        {
            return false;
        }
        if !mode.is_drop_frame() {
            return true;
        }
        !dropframe::is_dropped_frame(mode, self.minutes, self.seconds, self.frames)
    }

    /// The separator character rendered before the frames field.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.drop_mark {
            ';'
        } else {
            ':'
        }
    }
}

impl fmt::Display for TimecodeValue {
    /// Canonical form `HH:MM:SS:FF`, each field zero-padded to two digits,
    /// with `;` before the frames field when the drop mark is set.
    ///
    /// No validation occurs: a field wider than two digits prints in full.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours,
            self.minutes,
            self.seconds,
            self.separator(),
            self.frames
        )
    }
}

/// Consume one-or-more leading ASCII digits as a field value.
fn scan_field(rest: &mut &str, field: &str) -> Result<i32> {
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(ParseError::malformed(format!(
            "expected digits for {field} field"
        )));
    }
    let (head, tail) = rest.split_at(digits);
    *rest = tail;
    head.parse()
        .map_err(|_| ParseError::malformed(format!("{field} field out of range: {head}")))
}

/// Consume a single `:` or `;` separator.
fn scan_separator(rest: &mut &str, field: &str) -> Result<char> {
    match rest.as_bytes().first() {
        Some(&sep @ (b':' | b';')) => {
            *rest = &rest[1..];
            Ok(sep as char)
        }
        _ => Err(ParseError::malformed(format!(
            "expected ':' or ';' before {field} field"
        ))),
    }
}

impl FromStr for TimecodeValue {
    type Err = ParseError;

    /// Parse a timecode string.
    ///
    /// The grammar is four integer fields joined by three single-character
    /// separators, each `:` or `;`; the separator before the frames field
    /// sets the drop mark. Fields are one or more ASCII digits. Signs,
    /// surrounding whitespace, and any other leading or trailing content
    /// are rejected, so parsing is deterministic and all-or-nothing.
    fn from_str(s: &str) -> Result<Self> {
        let mut rest = s;

        let hours = scan_field(&mut rest, "hours")?;
        scan_separator(&mut rest, "minutes")?;
        let minutes = scan_field(&mut rest, "minutes")?;
        scan_separator(&mut rest, "seconds")?;
        let seconds = scan_field(&mut rest, "seconds")?;
        let drop_mark = scan_separator(&mut rest, "frames")? == ';';
        let frames = scan_field(&mut rest, "frames")?;

        if !rest.is_empty() {
            return Err(ParseError::malformed(format!(
                "trailing characters after frames field: {rest:?}"
            )));
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
            frames,
            drop_mark,
        })
    }
}
