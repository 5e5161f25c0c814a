//! Drop-frame numbering arithmetic for the 30- and 60-based drop modes.
//!
//! Drop-frame timecode skips frame numbers at the start of every minute
//! whose number is not divisible by ten: two numbers per minute for 30-based
//! counting, four for 60-based. Over an hour this keeps nominal-rate frame
//! numbering aligned with real elapsed time at the true NTSC rates
//! (approximately 29.97 and 59.94 fps).
//!
//! The correction here is a closed-form count of how many frame numbers have
//! been skipped up to a given frame count, rather than an iterative
//! simulation of the numbering.

use crate::mode::FrameRateMode;
use crate::FrameCount;

/// Frame numbers dropped at the start of each affected minute.
fn drop_step(mode: FrameRateMode) -> FrameCount {
    if mode.integral_fps() == 30 {
        2
    } else {
        4
    }
}

/// The number of frame numbers skipped at or before `absolute_frame_count`.
///
/// The correction is added to an absolute frame count before decomposing it
/// into timecode fields, and subtracted from the raw field arithmetic when
/// recovering a frame count. In both directions it is computed from the
/// uncorrected count.
///
/// # Panics
///
/// Panics if `mode` is not a drop-frame mode. Callers gate on
/// [`FrameRateMode::is_drop_frame`] before applying any correction.
#[must_use]
pub fn drop_correction(mode: FrameRateMode, absolute_frame_count: FrameCount) -> FrameCount {
    assert!(
        mode.is_drop_frame(),
        "drop correction is only defined for drop-frame modes"
    );

    let fps = FrameCount::from(mode.integral_fps());
    let frames_per_minute = fps * 60;
    let step = drop_step(mode);

    let whole_minutes = absolute_frame_count / frames_per_minute;
    let tens_of_minutes = whole_minutes / 10;

    whole_minutes * step - tens_of_minutes * step
}

/// Whether `minutes`/`seconds`/`frames` names a frame number that the given
/// drop mode skips.
///
/// Frame numbers are skipped only at the start of a minute not divisible by
/// ten: `{0, 1}` for 30-based counting, `{0, 1, 2, 3}` for 60-based. For a
/// non-drop mode this is always `false`.
#[must_use]
pub fn is_dropped_frame(mode: FrameRateMode, minutes: i32, seconds: i32, frames: i32) -> bool {
    if !mode.is_drop_frame() {
        return false;
    }

    let step = drop_step(mode) as i32;
    seconds == 0 && minutes % 10 != 0 && (0..step).contains(&frames)
}
