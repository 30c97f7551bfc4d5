//! Small playback types shared by the store and its surfaces.

use std::fmt;

/// What happens when playback runs off the end of the queue.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// Stall at the end of the queue.
    #[default]
    Off,
    /// Wrap around to the start of the queue.
    All,
    /// Repeat the current track. Only tracked as a mode for now.
    One,
}

impl RepeatMode {
    /// The mode after this one in the `Off -> All -> One` cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::All => "all",
            Self::One => "one",
        })
    }
}

/// Transport view of the store, for surfaces that only care about the
/// play/pause indicator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// No current track.
    #[default]
    Stopped,
    Playing,
    Paused,
}
