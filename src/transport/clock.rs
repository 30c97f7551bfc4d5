use crate::player::PlayerStore;

/// Result of feeding one tick to the clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do: no track, paused or seeking.
    Idle,
    /// Playback moved to the given second.
    Advanced(u32),
    /// The track reached its duration and `next_track` was issued.
    TrackEnded,
}

/// Surface-side playback position.
///
/// Mirrors the store's time except while a seek gesture is in progress,
/// when it holds the previewed position instead.
#[derive(Debug, Default, Clone)]
pub struct Clock {
    local_time: u32,
    seeking: bool,
}

impl Clock {
    pub fn local_time(&self) -> u32 {
        self.local_time
    }

    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    pub fn sync(&mut self, store: &PlayerStore) {
        if !self.seeking {
            self.local_time = store.current_time();
        }
    }

    pub fn on_tick(&mut self, store: &mut PlayerStore) -> TickOutcome {
        if self.seeking || !store.is_playing() {
            return TickOutcome::Idle;
        }
        let Some(duration) = store.current_track().map(|t| t.duration) else {
            return TickOutcome::Idle;
        };

        // The store may have moved since the last sync (restart, track change).
        let next = store.current_time().saturating_add(1);
        if next >= duration {
            store.next_track();
            self.local_time = 0;
            store.seek_to(0);
            TickOutcome::TrackEnded
        } else {
            self.local_time = next;
            store.seek_to(next);
            TickOutcome::Advanced(next)
        }
    }

    pub fn begin_seek(&mut self) {
        self.seeking = true;
    }

    /// Move the previewed position by `delta_secs`, kept within the track.
    pub fn preview_seek(&mut self, delta_secs: i64, duration: u32) {
        let moved = i64::from(self.local_time).saturating_add(delta_secs);
        self.local_time = moved.clamp(0, i64::from(duration)) as u32;
    }

    pub fn commit_seek(&mut self, store: &mut PlayerStore) {
        store.seek_to(self.local_time);
        self.seeking = false;
    }

    pub fn cancel_seek(&mut self, store: &PlayerStore) {
        self.seeking = false;
        self.local_time = store.current_time();
    }

    pub fn clear_seek(&mut self) {
        self.seeking = false;
    }
}
