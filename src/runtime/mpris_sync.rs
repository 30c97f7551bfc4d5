use crate::catalog::TrackId;
use crate::mpris::MprisHandle;
use crate::player::{PlaybackStatus, PlayerStore, RepeatMode};

/// The parts of the store MPRIS clients can observe. Playback time is left
/// out since `Position` is not exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncKey {
    track: Option<TrackId>,
    status: PlaybackStatus,
    repeat: RepeatMode,
    shuffle: bool,
    volume: i32,
}

impl SyncKey {
    pub fn of(store: &PlayerStore) -> Self {
        Self {
            track: store.current_track().map(|t| t.id.clone()),
            status: store.status(),
            repeat: store.repeat_mode(),
            shuffle: store.is_shuffle(),
            volume: store.volume(),
        }
    }
}

pub fn update_mpris(mpris: &MprisHandle, store: &PlayerStore) {
    mpris.sync(store);
}
