// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn empty_test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("primeflix-desktop-app-settings-{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults() {
    let settings = State::default();
    assert_eq!(None, settings.poster_dir);
    assert_eq!(20, settings.browse_sample_size);
    assert_eq!(4, settings.browse_columns);
    assert!(!settings.fullscreen);
}

#[test]
fn settings_file_path() {
    assert_eq!(
        PathBuf::from("/home/user/.config/primeflix/primeflix_settings.ron"),
        new_settings_file_path(PathBuf::from("/home/user/.config/primeflix"))
    );
}

#[test]
fn load_missing_file() {
    let dir = empty_test_dir("load-missing");
    assert_eq!(None, State::load(&dir).unwrap());
}

#[test]
fn save_and_load() {
    let dir = empty_test_dir("save-and-load");
    let settings = State {
        poster_dir: Some(PathBuf::from("/srv/posters")),
        poster_cache_dir: Some(PathBuf::from("/var/cache/primeflix")),
        browse_sample_size: 12,
        browse_columns: 3,
        fullscreen: true,
    };
    settings.save(&dir).unwrap();
    assert_eq!(Some(settings), State::load(&dir).unwrap());
}

#[test]
fn load_partial_file_with_defaults() {
    let dir = empty_test_dir("load-partial");
    fs::write(
        new_settings_file_path(dir.clone()),
        "(poster_dir: Some(\"/srv/posters\"), fullscreen: true)",
    )
    .unwrap();
    let settings = State::load(&dir).unwrap().unwrap();
    assert_eq!(Some(PathBuf::from("/srv/posters")), settings.poster_dir);
    assert_eq!(None, settings.poster_cache_dir);
    assert_eq!(DEFAULT_BROWSE_SAMPLE_SIZE, settings.browse_sample_size);
    assert_eq!(DEFAULT_BROWSE_COLUMNS, settings.browse_columns);
    assert!(settings.fullscreen);
}

#[test]
fn restore_writes_defaults_if_missing() {
    let dir = empty_test_dir("restore-missing");
    let data_dir = dir.join("data");
    let settings = State::restore(&dir, || Ok(data_dir.clone())).unwrap();
    assert_eq!(Some(data_dir.join("posters").as_path()), settings.poster_cache_dir());
    assert_eq!(Some(settings), State::load(&dir).unwrap());
}

#[test]
fn restore_keeps_unreadable_file() {
    let dir = empty_test_dir("restore-unreadable");
    let file_path = new_settings_file_path(dir.clone());
    fs::write(&file_path, "not ron at all {").unwrap();
    let settings = State::restore(&dir, || Ok(PathBuf::from("/var/lib/primeflix"))).unwrap();
    assert_eq!(DEFAULT_BROWSE_SAMPLE_SIZE, settings.browse_sample_size);
    assert!(State::load(&dir).is_err());
    assert_eq!("not ron at all {", fs::read_to_string(file_path).unwrap());
}

#[test]
fn update_fullscreen() {
    let mut settings = State::default();
    assert!(!settings.update_fullscreen(false));
    assert!(settings.update_fullscreen(true));
    assert!(settings.fullscreen);
}
