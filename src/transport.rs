//! Transport module: the auto-advance timer that drives playback progress.
//!
//! A `Ticker` thread emits one `Tick` per period while playback runs. The
//! `Clock` turns ticks into `seek_to`/`next_track` calls on the store, and
//! `Transport` starts and cancels tickers as the store's state changes. The
//! store itself has no notion of time passing.

mod clock;
mod ticker;

pub use clock::*;
pub use ticker::*;

use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::trace;

use crate::catalog::{Track, TrackId};
use crate::player::PlayerStore;

struct Running {
    ticker: Ticker,
    track: TrackId,
}

/// Owns the surface clock and at most one live ticker.
pub struct Transport {
    clock: Clock,
    period: Duration,
    tick_tx: Sender<Tick>,
    generation: u64,
    running: Option<Running>,
    seek_track: Option<TrackId>,
}

impl Transport {
    pub fn new(period: Duration, tick_tx: Sender<Tick>) -> Self {
        Self {
            clock: Clock::default(),
            period,
            tick_tx,
            generation: 0,
            running: None,
            seek_track: None,
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Whether a ticker is currently live.
    #[cfg(test)]
    pub fn is_ticking(&self) -> bool {
        self.running.is_some()
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bring the ticker in line with `store`: one ticker while a track is
    /// playing and no seek is in progress, none otherwise. A track change
    /// restarts the ticker so a partial second never carries over, and
    /// abandons a seek gesture begun on the previous track.
    pub fn reconcile(&mut self, store: &PlayerStore) {
        self.drop_stale_seek(store);
        self.clock.sync(store);

        let wanted = if store.is_playing() && !self.clock.is_seeking() {
            store.current_track().map(|t| t.id.clone())
        } else {
            None
        };
        let running_for = self.running.as_ref().map(|r| &r.track);

        match wanted {
            Some(id) if running_for == Some(&id) => {}
            Some(id) => self.start(id),
            None => self.stop(),
        }
    }

    /// Apply a tick to the store. Ticks from cancelled tickers, and ticks
    /// from a ticker started for a track that is no longer current, are
    /// dropped.
    pub fn handle_tick(&mut self, tick: Tick, store: &mut PlayerStore) -> TickOutcome {
        let live_for_current = self.running.as_ref().is_some_and(|r| {
            tick.generation == self.generation
                && store.current_track().map(|t| &t.id) == Some(&r.track)
        });
        if !live_for_current {
            trace!(tick = tick.generation, current = self.generation, "stale tick");
            return TickOutcome::Idle;
        }
        self.clock.on_tick(store)
    }

    /// Start `track` through the store, abandoning any in-flight seek.
    pub fn play_track(&mut self, store: &mut PlayerStore, track: Track) {
        self.clock.clear_seek();
        self.seek_track = None;
        store.play_track(track);
        self.reconcile(store);
    }

    pub fn begin_seek(&mut self, store: &PlayerStore) {
        self.seek_track = store.current_track().map(|t| t.id.clone());
        self.clock.begin_seek();
        self.reconcile(store);
    }

    pub fn preview_seek(&mut self, delta_secs: i64, store: &PlayerStore) {
        if let Some(track) = store.current_track() {
            self.clock.preview_seek(delta_secs, track.duration);
        }
    }

    pub fn commit_seek(&mut self, store: &mut PlayerStore) {
        self.drop_stale_seek(store);
        if self.clock.is_seeking() {
            self.clock.commit_seek(store);
        }
        self.seek_track = None;
        self.reconcile(store);
    }

    pub fn cancel_seek(&mut self, store: &PlayerStore) {
        self.clock.cancel_seek(store);
        self.seek_track = None;
        self.reconcile(store);
    }

    fn drop_stale_seek(&mut self, store: &PlayerStore) {
        let current = store.current_track().map(|t| &t.id);
        if self.clock.is_seeking() && self.seek_track.as_ref() != current {
            trace!("track changed under seek, dropping preview");
            self.clock.clear_seek();
            self.seek_track = None;
        }
    }

    fn start(&mut self, track: TrackId) {
        self.stop();
        self.generation += 1;
        trace!(generation = self.generation, track = %track, "start ticker");
        let ticker = Ticker::spawn(self.period, self.generation, self.tick_tx.clone());
        self.running = Some(Running { ticker, track });
    }

    fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            trace!(generation = self.generation, "cancel ticker");
            running.ticker.cancel();
        }
    }
}

#[cfg(test)]
mod tests;
