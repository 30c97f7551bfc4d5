use super::*;
use std::path::PathBuf;

#[test]
fn repeat_setting_maps_onto_player_modes() {
    assert_eq!(repeat_mode(config::RepeatModeSetting::Off), RepeatMode::Off);
    assert_eq!(repeat_mode(config::RepeatModeSetting::All), RepeatMode::All);
    assert_eq!(repeat_mode(config::RepeatModeSetting::One), RepeatMode::One);
}

#[test]
fn store_is_seeded_paused_with_playback_defaults() {
    let mut settings = config::Settings::default();
    settings.playback.volume = 40;
    settings.playback.shuffle = true;
    settings.playback.repeat_mode = config::RepeatModeSetting::All;

    let catalog = Catalog::builtin();
    let store = build_store(&catalog, &settings);

    assert_eq!(store.queue().len(), catalog.tracks().len());
    assert_eq!(store.current_track(), catalog.tracks().first());
    assert!(!store.is_playing());
    assert_eq!(store.volume(), 40);
    assert!(store.is_shuffle());
    assert_eq!(store.repeat_mode(), RepeatMode::All);
}

#[test]
fn missing_catalog_file_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let settings = config::LibrarySettings {
        catalog_path: Some(dir.path().join("nope.toml")),
    };
    assert_eq!(load_catalog(&settings).albums().len(), 10);
}

#[test]
fn configured_catalog_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[albums]]
id = "a1"
title = "Only"
artist = "Someone"
artwork_url = ""
year = 2020
genre = "Ambient"
track_count = 1
duration = 60
quality = "WAV"

[[tracks]]
id = "t1"
title = "Alone"
artist = "Someone"
album = "Only"
album_id = "a1"
duration = 60
quality = "WAV"
artwork_url = ""
"#,
    )
    .unwrap();

    let settings = config::LibrarySettings {
        catalog_path: Some(path),
    };
    let catalog = load_catalog(&settings);
    assert_eq!(catalog.albums().len(), 1);
    assert_eq!(catalog.tracks()[0].title, "Alone");
}
