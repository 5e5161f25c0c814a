//! Frame-rate counting modes.
//!
//! A counting mode fixes two things about a timecode: how many frames are
//! counted per timecode second, and whether frame numbers are dropped at
//! minute boundaries to keep long-running timecode aligned with real
//! elapsed time at the true (fractional) NTSC rates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of supported frame-rate counting modes.
///
/// Drop-ness is part of the mode: `Fps30` and `Fps30Drop` count the same
/// thirty frames per second but number them differently. The matches in
/// [`integral_fps`](Self::integral_fps) and
/// [`is_drop_frame`](Self::is_drop_frame) list every variant so that adding
/// a mode is a compile-time exhaustiveness error, not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRateMode {
    /// 24 frames per second (film).
    Fps24,
    /// 25 frames per second (PAL).
    Fps25,
    /// 30 frames per second, non-drop.
    Fps30,
    /// 30 frames per second with drop-frame numbering, averaging the true
    /// NTSC rate of approximately 29.97 fps over an hour.
    Fps30Drop,
    /// 48 frames per second (HFR film).
    Fps48,
    /// 60 frames per second, non-drop.
    Fps60,
    /// 60 frames per second with drop-frame numbering, averaging the true
    /// NTSC rate of approximately 59.94 fps over an hour.
    Fps60Drop,
}

impl FrameRateMode {
    /// Every supported counting mode, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Fps24,
        Self::Fps25,
        Self::Fps30,
        Self::Fps30Drop,
        Self::Fps48,
        Self::Fps60,
        Self::Fps60Drop,
    ];

    /// The number of frames that must be advanced before the seconds field
    /// of a timecode advances.
    #[must_use]
    pub fn integral_fps(self) -> u32 {
        match self {
            Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps30 | Self::Fps30Drop => 30,
            Self::Fps48 => 48,
            Self::Fps60 | Self::Fps60Drop => 60,
        }
    }

    /// Whether drop-frame numbering is in effect.
    #[must_use]
    pub fn is_drop_frame(self) -> bool {
        match self {
            Self::Fps30Drop | Self::Fps60Drop => true,
            Self::Fps24 | Self::Fps25 | Self::Fps30 | Self::Fps48 | Self::Fps60 => false,
        }
    }
}

impl fmt::Display for FrameRateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fps24 => write!(f, "24"),
            Self::Fps25 => write!(f, "25"),
            Self::Fps30 => write!(f, "30"),
            Self::Fps30Drop => write!(f, "30 drop"),
            Self::Fps48 => write!(f, "48"),
            Self::Fps60 => write!(f, "60"),
            Self::Fps60Drop => write!(f, "60 drop"),
        }
    }
}
