// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fs, path::PathBuf};

use primeflix::{Genre, Rating};

use super::*;

fn empty_test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("primeflix-browser-app-poster-{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn movie(image: Option<&'static str>) -> Movie {
    Movie {
        title: "Tumbbad".to_owned(),
        year: 2018,
        rating: Rating::new(8.2),
        genres: vec![Genre::from_static("Horror")],
        image: image.map(PosterPath::new),
    }
}

const fn key(uid: u32, size: PosterSize) -> PosterKey {
    PosterKey {
        uid: MovieUid::new(uid),
        size,
    }
}

#[test]
fn load_without_image() {
    let loader = FilePosterLoader::default();
    assert!(matches!(
        load_poster_blocking(&loader, None, &movie(None), PosterSize::GRID),
        Err(PosterUnavailable::Missing)
    ));
}

#[test]
fn load_falls_back_if_preprocessed_poster_is_unreadable() {
    let poster_dir = empty_test_dir("fallback-source");
    let cache_dir = empty_test_dir("fallback-cache");
    let movie = movie(Some("tumbbad.jpg"));
    fs::write(
        preprocessed_poster_path(&cache_dir, &movie),
        b"not an image",
    )
    .unwrap();
    let loader = FilePosterLoader::new(Some(poster_dir.clone()));
    let Err(PosterUnavailable::NotFound(file_path)) =
        load_poster_blocking(&loader, Some(&cache_dir), &movie, PosterSize::GRID)
    else {
        panic!("expected the original poster file to be missing");
    };
    assert_eq!(poster_dir.join("tumbbad.jpg"), file_path);
}

#[test]
fn cache_lifecycle() {
    let ctx = Context::default();
    let mut cache = PosterCache::new(&ctx);
    let grid_key = key(7, PosterSize::GRID);
    let detail_key = key(7, PosterSize::DETAIL);
    assert!(cache.get(grid_key).is_none());

    assert!(cache.start_loading(grid_key));
    assert!(!cache.start_loading(grid_key));
    assert!(matches!(cache.get(grid_key), Some(PosterTexture::Loading)));
    assert_eq!(
        [200, 300],
        cache.texture_or_placeholder(grid_key).size()
    );

    let poster = PosterImage::filled(PosterSize::GRID, [0xff; 4]);
    cache.finish_loading(&ctx, grid_key, Some(poster));
    assert!(matches!(cache.get(grid_key), Some(PosterTexture::Loaded(_))));

    assert!(cache.start_loading(detail_key));
    cache.finish_loading(&ctx, detail_key, None);
    assert!(matches!(
        cache.get(detail_key),
        Some(PosterTexture::Unavailable)
    ));
    assert_eq!(
        [260, 390],
        cache.texture_or_placeholder(detail_key).size()
    );
}
