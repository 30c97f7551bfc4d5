//! Built-in seed catalog: the data a fresh install browses.

use super::model::{Album, AlbumId, Catalog, Playlist, PlaylistId, Quality, Track, TrackId};

const ARTWORK_BASE: &str = "https://images.unsplash.com";

fn artwork(photo: &str, size: u16) -> String {
    format!("{ARTWORK_BASE}/{photo}?w={size}&h={size}&fit=crop")
}

#[allow(clippy::too_many_arguments)]
fn album(
    id: &str,
    title: &str,
    artist: &str,
    photo: &str,
    year: u16,
    genre: &str,
    track_count: u32,
    duration: u32,
    quality: &str,
) -> Album {
    Album {
        id: AlbumId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        artwork_url: artwork(photo, 400),
        year,
        genre: genre.to_string(),
        track_count,
        duration,
        quality: quality.to_string(),
    }
}

// Seed tracks inherit artist, artwork, genre and year from their album.
fn track(id: &str, title: &str, duration: u32, album: &Album) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: album.artist.clone(),
        album: album.title.clone(),
        album_id: album.id.clone(),
        duration,
        quality: Quality::Flac,
        artwork_url: album.artwork_url.clone(),
        genre: Some(album.genre.clone()),
        year: Some(album.year),
    }
}

fn playlist(id: &str, name: &str, track_count: u32, photo: &str, tracks: &[&str]) -> Playlist {
    Playlist {
        id: PlaylistId::new(id),
        name: name.to_string(),
        track_count,
        artwork_url: artwork(photo, 200),
        tracks: tracks.iter().map(|t| TrackId::new(*t)).collect(),
    }
}

impl Catalog {
    /// The built-in catalog: ten albums, five tracks and three playlists.
    pub fn builtin() -> Self {
        let albums = vec![
            album(
                "album-1",
                "Midnight Dreams",
                "Tame Impala",
                "photo-1618005182384-a83a8bd57fbe",
                2023,
                "Electronic",
                12,
                2847,
                "FLAC 24-bit",
            ),
            album(
                "album-2",
                "Urban Echoes",
                "The Sonic Collective",
                "photo-1470225620780-dba8ba36b745",
                2022,
                "Hip Hop",
                15,
                3245,
                "FLAC 24-bit",
            ),
            album(
                "album-3",
                "Analog Waves",
                "Vintage Keys",
                "photo-1459749411175-04bf5292ceea",
                2024,
                "Jazz",
                10,
                2456,
                "FLAC 24-bit",
            ),
            album(
                "album-4",
                "Neon Nights",
                "Synthwave Dreams",
                "photo-1514320291840-2e0a9bf2a9ae",
                2023,
                "Synthwave",
                8,
                1989,
                "FLAC 16-bit",
            ),
            album(
                "album-5",
                "Acoustic Sessions",
                "Maya Stone",
                "photo-1487180144351-b8472da7d491",
                2023,
                "Folk",
                11,
                2678,
                "FLAC 24-bit",
            ),
            album(
                "album-6",
                "Electric Pulse",
                "Circuit Breakers",
                "photo-1511671782779-c97d3d27a1d4",
                2024,
                "EDM",
                13,
                3124,
                "WAV",
            ),
            album(
                "album-7",
                "Velvet Lounge",
                "Blue Note Trio",
                "photo-1619983081563-430f63602796",
                2022,
                "Jazz",
                9,
                2234,
                "FLAC 24-bit",
            ),
            album(
                "album-8",
                "Bass & Breaks",
                "DJ Rhythm",
                "photo-1493225457124-a3eb161ffa5f",
                2024,
                "Drum & Bass",
                14,
                3456,
                "FLAC 24-bit",
            ),
            album(
                "album-9",
                "Golden Hour",
                "Sunset Sessions",
                "photo-1429962714451-bb934ecdc4ec",
                2023,
                "Chillwave",
                10,
                2567,
                "FLAC 16-bit",
            ),
            album(
                "album-10",
                "Underground",
                "Metro Collective",
                "photo-1508700115892-45ecd05ae2ad",
                2024,
                "Techno",
                12,
                3012,
                "WAV",
            ),
        ];

        let tracks = vec![
            track("track-1", "Ethereal Dreams", 245, &albums[0]),
            track("track-2", "Neon Lights", 198, &albums[0]),
            track("track-3", "City Rhythm", 223, &albums[1]),
            track("track-4", "Vinyl Soul", 267, &albums[2]),
            track("track-5", "Midnight Cruise", 289, &albums[3]),
        ];

        let playlists = vec![
            playlist(
                "playlist-1",
                "Late Night Vibes",
                24,
                "photo-1511379938547-c1f69419868d",
                &["track-1", "track-2", "track-5"],
            ),
            playlist(
                "playlist-2",
                "Focus Flow",
                18,
                "photo-1470225620780-dba8ba36b745",
                &["track-3", "track-4"],
            ),
            playlist(
                "playlist-3",
                "Weekend Mix",
                32,
                "photo-1493225457124-a3eb161ffa5f",
                &["track-1", "track-3", "track-5"],
            ),
        ];

        Self::from_parts(albums, tracks, playlists)
    }
}
