//! The playback state store.
//!
//! Every operation is total: boundary cases (no current track, empty queue,
//! first/last position) are no-ops or wraps, never errors. Values are taken
//! verbatim; clamping belongs to the surfaces that produce them.

use tracing::debug;

use crate::catalog::Track;

use super::types::{PlaybackStatus, RepeatMode};

/// `previous_track` restarts the current track once playback is past this
/// many seconds.
pub const RESTART_THRESHOLD_SECS: u32 = 3;

/// Volume a fresh store starts with.
pub const DEFAULT_VOLUME: i32 = 70;

/// Owns the current track, transport flags and queue for one session.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    current_track: Option<Track>,
    is_playing: bool,
    current_time: u32,
    volume: i32,
    is_shuffle: bool,
    repeat_mode: RepeatMode,
    queue: Vec<Track>,
}

impl PlayerStore {
    /// Seed a paused store with `queue`, its first entry as the current track.
    pub fn new(queue: Vec<Track>) -> Self {
        Self {
            current_track: queue.first().cloned(),
            is_playing: false,
            current_time: 0,
            volume: DEFAULT_VOLUME,
            is_shuffle: false,
            repeat_mode: RepeatMode::Off,
            queue,
        }
    }

    pub fn with_volume(mut self, volume: i32) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.is_shuffle = shuffle;
        self
    }

    pub fn with_repeat_mode(mut self, mode: RepeatMode) -> Self {
        self.repeat_mode = mode;
        self
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Seconds into the current track.
    pub fn current_time(&self) -> u32 {
        self.current_time
    }

    pub fn volume(&self) -> i32 {
        self.volume
    }

    pub fn is_shuffle(&self) -> bool {
        self.is_shuffle
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    pub fn status(&self) -> PlaybackStatus {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackStatus::Stopped,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    /// Make `track` current and start it from the top. The queue is left
    /// alone, so `track` need not be in it.
    pub fn play_track(&mut self, track: Track) {
        debug!(track = %track.id, "play track");
        self.current_track = Some(track);
        self.is_playing = true;
        self.current_time = 0;
    }

    /// Flip play/pause. Callers check for a current track first.
    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
        debug!(playing = self.is_playing, "toggle play");
    }

    /// Advance to the following queue entry, wrapping to the head when
    /// repeat-all is on. Without a following entry and without repeat-all
    /// nothing changes.
    pub fn next_track(&mut self) {
        let Some(pos) = self.current_track.as_ref().map(|t| self.position_of(t)) else {
            return;
        };

        let following = pos.and_then(|i| self.queue.get(i + 1));
        let target = match following {
            Some(track) => Some(track),
            None if self.repeat_mode == RepeatMode::All => self.queue.first(),
            None => None,
        };

        match target.cloned() {
            Some(track) => {
                debug!(track = %track.id, "next track");
                self.start(track);
            }
            None => debug!("next track: end of queue"),
        }
    }

    /// Past the restart threshold, rewind the current track. Otherwise step
    /// to the preceding queue entry, if there is one.
    pub fn previous_track(&mut self) {
        let Some(current) = self.current_track.as_ref() else {
            return;
        };

        if self.current_time > RESTART_THRESHOLD_SECS {
            debug!(track = %current.id, "previous track: restart");
            self.current_time = 0;
            return;
        }

        let preceding = match self.position_of(current) {
            Some(i) if i > 0 => self.queue.get(i - 1).cloned(),
            _ => None,
        };

        if let Some(track) = preceding {
            debug!(track = %track.id, "previous track");
            self.start(track);
        }
    }

    /// Jump to `time` seconds. Not clamped to the track's duration.
    pub fn seek_to(&mut self, time: u32) {
        self.current_time = time;
    }

    /// Set the volume verbatim; `0..=100` is a convention of the callers.
    pub fn set_volume(&mut self, volume: i32) {
        debug!(volume, "set volume");
        self.volume = volume;
    }

    /// Flip the shuffle flag. Traversal order is unaffected.
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffle = !self.is_shuffle;
        debug!(shuffle = self.is_shuffle, "toggle shuffle");
    }

    /// Cycle `Off -> All -> One -> Off`.
    pub fn toggle_repeat(&mut self) {
        self.repeat_mode = self.repeat_mode.next();
        debug!(repeat = %self.repeat_mode, "toggle repeat");
    }

    /// Append `track` to the queue.
    pub fn add_to_queue(&mut self, track: Track) {
        debug!(track = %track.id, len = self.queue.len() + 1, "add to queue");
        self.queue.push(track);
    }

    fn position_of(&self, track: &Track) -> Option<usize> {
        self.queue.iter().position(|t| t.id == track.id)
    }

    fn start(&mut self, track: Track) {
        self.current_track = Some(track);
        self.current_time = 0;
        self.is_playing = true;
    }
}
