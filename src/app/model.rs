//! Application model types: `App`, `View`, `Row` and `Action`.

use crate::catalog::{Album, AlbumId, Catalog, Playlist, PlaylistId, Track};
use crate::player::PlayerStore;

/// A screen of the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Library,
    Album(AlbumId),
    Playlist(PlaylistId),
    Search,
    Queue,
    NowPlaying,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Library => "library",
            Self::Album(_) => "album",
            Self::Playlist(_) => "playlist",
            Self::Search => "search",
            Self::Queue => "queue",
            Self::NowPlaying => "now playing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowItem {
    Album(Album),
    Playlist(Playlist),
    Track(Track),
}

/// One selectable line of a list view, tagged with the shelf it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub section: &'static str,
    pub item: RowItem,
}

impl Row {
    fn new(section: &'static str, item: RowItem) -> Self {
        Self { section, item }
    }
}

/// Which shelves the library view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LibraryFilter {
    #[default]
    All,
    Albums,
    Playlists,
}

impl LibraryFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Albums => "albums",
            Self::Playlists => "playlists",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::All => Self::Albums,
            Self::Albums => Self::Playlists,
            Self::Playlists => Self::All,
        }
    }
}

/// Something the runtime should do to the player or the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play(Track),
    AddToQueue(Track),
    Open(View),
}

/// The main application model.
pub struct App {
    pub catalog: Catalog,
    pub view: View,
    history: Vec<View>,
    pub selected: usize,
    pub library_filter: LibraryFilter,

    pub search_query: String,
    pub search_editing: bool,

    default_volume: i32,
    muted_volume: Option<i32>,
}

impl App {
    /// Create a new `App` browsing `catalog`. `default_volume` is what
    /// unmuting falls back to when nothing better is known.
    pub fn new(catalog: Catalog, default_volume: i32) -> Self {
        Self {
            catalog,
            view: View::Home,
            history: Vec::new(),
            selected: 0,
            library_filter: LibraryFilter::default(),
            search_query: String::new(),
            search_editing: false,
            default_volume,
            muted_volume: None,
        }
    }

    /// Rows of the current view, in display order.
    pub fn rows(&self, store: &PlayerStore) -> Vec<Row> {
        let c = &self.catalog;
        let albums = |section, albums: &[Album]| {
            albums
                .iter()
                .map(move |a| Row::new(section, RowItem::Album(a.clone())))
                .collect::<Vec<_>>()
        };
        let tracks = |section, tracks: Vec<&Track>| {
            tracks
                .into_iter()
                .map(move |t| Row::new(section, RowItem::Track(t.clone())))
                .collect::<Vec<_>>()
        };
        let playlists = |section| {
            c.playlists()
                .iter()
                .map(move |p| Row::new(section, RowItem::Playlist(p.clone())))
                .collect::<Vec<_>>()
        };

        match &self.view {
            View::Home => {
                let mut rows = albums("recently played", c.recently_played());
                rows.extend(albums("recently added", c.recently_added()));
                rows.extend(playlists("playlists"));
                rows
            }
            View::Library => match self.library_filter {
                LibraryFilter::All => {
                    let mut rows = albums("albums", c.albums());
                    rows.extend(playlists("playlists"));
                    rows
                }
                LibraryFilter::Albums => albums("albums", c.albums()),
                LibraryFilter::Playlists => playlists("playlists"),
            },
            View::Album(id) => tracks("tracks", c.album_tracks(id)),
            View::Playlist(id) => tracks("tracks", c.playlist_tracks(id)),
            View::Search => {
                if self.search_query.is_empty() {
                    return Vec::new();
                }
                let results = c.search(&self.search_query);
                if results.is_empty() {
                    return Vec::new();
                }
                let mut rows: Vec<Row> = results
                    .albums
                    .into_iter()
                    .map(|a| Row::new("albums", RowItem::Album(a.clone())))
                    .collect();
                rows.extend(tracks("tracks", results.tracks));
                rows
            }
            View::Queue => tracks("queue", store.queue().iter().collect()),
            View::NowPlaying => Vec::new(),
        }
    }

    /// Step the library view to its next filter chip.
    pub fn cycle_library_filter(&mut self) {
        self.library_filter = self.library_filter.next();
        self.selected = 0;
    }

    /// Jump to a top-level view, dropping the back history.
    pub fn switch_view(&mut self, view: View) {
        self.history.clear();
        self.search_editing = false;
        self.view = view;
        self.selected = 0;
    }

    /// Open `view` on top of the current one.
    pub fn open(&mut self, view: View) {
        if self.view == view {
            return;
        }
        let previous = std::mem::replace(&mut self.view, view);
        self.history.push(previous);
        self.search_editing = false;
        self.selected = 0;
    }

    /// Return to the previous view. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(view) => {
                self.view = view;
                self.selected = 0;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Open the now playing view, or leave it if it is already showing.
    pub fn toggle_now_playing(&mut self) {
        if self.view == View::NowPlaying {
            if !self.back() {
                self.switch_view(View::Home);
            }
        } else {
            self.open(View::NowPlaying);
        }
    }

    /// Move selection to the next row, wrapping to the first.
    pub fn next(&mut self, store: &PlayerStore) {
        let len = self.rows(store).len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move selection to the previous row, wrapping to the last.
    pub fn prev(&mut self, store: &PlayerStore) {
        let len = self.rows(store).len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, store: &PlayerStore) {
        self.selected = self.rows(store).len().saturating_sub(1);
    }

    /// Keep `selected` inside the current row count.
    pub fn clamp_selection(&mut self, store: &PlayerStore) {
        let len = self.rows(store).len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn selected_row(&self, store: &PlayerStore) -> Option<Row> {
        self.rows(store).into_iter().nth(self.selected)
    }

    /// What Enter does on the selected row.
    pub fn activate(&self, store: &PlayerStore) -> Option<Action> {
        let row = self.selected_row(store)?;
        Some(match row.item {
            RowItem::Album(a) => Action::Open(View::Album(a.id)),
            RowItem::Playlist(p) => Action::Open(View::Playlist(p.id)),
            RowItem::Track(t) => Action::Play(t),
        })
    }

    /// Queue the selected row when it is a track.
    pub fn enqueue_selected(&self, store: &PlayerStore) -> Option<Action> {
        match self.selected_row(store)?.item {
            RowItem::Track(t) => Some(Action::AddToQueue(t)),
            _ => None,
        }
    }

    /// First track of the album or playlist being shown, if any.
    pub fn play_all(&self) -> Option<Action> {
        let first = match &self.view {
            View::Album(id) => self.catalog.album_tracks(id).into_iter().next(),
            View::Playlist(id) => self.catalog.playlist_tracks(id).into_iter().next(),
            _ => None,
        };
        first.cloned().map(Action::Play)
    }

    /// Switch to search and start typing a query.
    pub fn start_search(&mut self) {
        if self.view != View::Search {
            self.switch_view(View::Search);
        }
        self.search_editing = true;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.selected = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.selected = 0;
    }

    /// Leave typing mode, keeping the query.
    pub fn finish_search(&mut self) {
        self.search_editing = false;
    }

    /// Leave typing mode and drop the query.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_editing = false;
        self.selected = 0;
    }

    pub fn is_muted(&self) -> bool {
        self.muted_volume.is_some()
    }

    /// Volume to apply for a mute toggle from `current`.
    ///
    /// Muting remembers `current` and yields 0. Unmuting yields the
    /// remembered volume, or the default when the player was already silent.
    pub fn toggle_mute(&mut self, current: i32) -> i32 {
        match self.muted_volume.take() {
            Some(v) if v > 0 => v,
            Some(_) => self.default_volume,
            None => {
                self.muted_volume = Some(current);
                0
            }
        }
    }

    /// Volume after nudging `current` by `delta`, kept within `0..=100`.
    /// Any manual change cancels mute.
    pub fn nudge_volume(&mut self, current: i32, delta: i32) -> i32 {
        self.muted_volume = None;
        current.saturating_add(delta).clamp(0, 100)
    }
}

/// Fraction of `duration` covered by `elapsed`, kept within `0.0..=1.0`.
pub fn progress_ratio(elapsed: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    (f64::from(elapsed) / f64::from(duration)).clamp(0.0, 1.0)
}

/// 1-based position of the current track in the queue, with the queue length.
pub fn queue_position(store: &PlayerStore) -> Option<(usize, usize)> {
    let current = store.current_track()?;
    let queue = store.queue();
    queue
        .iter()
        .position(|t| t.id == current.id)
        .map(|i| (i + 1, queue.len()))
}
