// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fs, path::PathBuf};

use image::{Rgba, RgbaImage};

use crate::{genre::Genre, movie::Rating};

use super::*;

fn empty_test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("primeflix-core-poster-{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &Path, width: u32, height: u32) {
    let image = RgbaImage::from_pixel(width, height, Rgba([0xff, 0x47, 0x47, 0xff]));
    image.save(path).unwrap();
}

fn movie(title: &str, year: u16, image: Option<&'static str>) -> Movie {
    Movie {
        title: title.to_owned(),
        year,
        rating: Rating::new(7.5),
        genres: vec![Genre::from_static("Drama")],
        image: image.map(PosterPath::new),
    }
}

#[test]
fn resolve_relative_path_against_base_dir() {
    let path = PosterPath::new("kahaani.jpg");
    assert_eq!(PathBuf::from("kahaani.jpg"), path.resolve(None));
    assert_eq!(
        PathBuf::from("/srv/posters/kahaani.jpg"),
        path.resolve(Some(Path::new("/srv/posters")))
    );
}

#[test]
fn resolve_absolute_path_ignores_base_dir() {
    let path = PosterPath::new("/tmp/kahaani.jpg");
    assert_eq!(
        PathBuf::from("/tmp/kahaani.jpg"),
        path.resolve(Some(Path::new("/srv/posters")))
    );
}

#[test]
fn resolve_expands_home_dir() {
    let Some(base_dirs) = directories::BaseDirs::new() else {
        return;
    };
    let path = PosterPath::new("~/posters/kahaani.jpg");
    assert_eq!(
        base_dirs.home_dir().join("posters/kahaani.jpg"),
        path.resolve(Some(Path::new("/srv/posters")))
    );
    // Only the home directory of the current user
    let path = PosterPath::new("~other/kahaani.jpg");
    assert_eq!(
        PathBuf::from("/srv/posters/~other/kahaani.jpg"),
        path.resolve(Some(Path::new("/srv/posters")))
    );
}

#[test]
fn filled_poster_image() {
    let size = PosterSize {
        width: 2,
        height: 3,
    };
    let poster = PosterImage::filled(size, [1, 2, 3, 4]);
    assert_eq!(size, poster.size());
    assert_eq!([1, 2, 3, 4].repeat(6), poster.rgba());
}

#[test]
fn poster_file_stem_is_file_system_safe() {
    assert_eq!(
        "Bangalore_Days_2014",
        poster_file_stem(&movie("Bangalore Days", 2014, None))
    );
    assert_eq!("RaOne_2011", poster_file_stem(&movie("Ra.One", 2011, None)));
    assert_eq!(
        "Pushpa_The_Rise_2021",
        poster_file_stem(&movie("Pushpa: The Rise", 2021, None))
    );
    assert_eq!(
        "Kapoor__Sons_2016",
        poster_file_stem(&movie(" Kapoor & Sons ", 2016, None))
    );
    assert_eq!(
        "Veer-Zaara_2004",
        poster_file_stem(&movie("Veer-Zaara", 2004, None))
    );
}

#[test]
fn load_missing_poster() {
    let loader = FilePosterLoader::default();
    assert!(matches!(
        loader.load_poster(None, PosterSize::GRID),
        Err(PosterUnavailable::Missing)
    ));
}

#[test]
fn load_poster_file_not_found() {
    let dir = empty_test_dir("not-found");
    let loader = FilePosterLoader::new(Some(dir.clone()));
    let path = PosterPath::new("nonexistent.jpg");
    let err = loader
        .load_poster(Some(&path), PosterSize::GRID)
        .unwrap_err();
    let PosterUnavailable::NotFound(file_path) = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(dir.join("nonexistent.jpg"), file_path);
}

#[test]
fn load_poster_decode_failure() {
    let dir = empty_test_dir("decode-failure");
    fs::write(dir.join("garbage.jpg"), b"not an image").unwrap();
    let loader = FilePosterLoader::new(Some(dir));
    let path = PosterPath::new("garbage.jpg");
    assert!(matches!(
        loader.load_poster(Some(&path), PosterSize::GRID),
        Err(PosterUnavailable::Decode { .. })
    ));
}

#[test]
fn load_poster_resized() {
    let dir = empty_test_dir("resized");
    write_png(&dir.join("poster.png"), 20, 40);
    let loader = FilePosterLoader::new(Some(dir));
    let path = PosterPath::new("poster.png");
    for size in [PosterSize::GRID, PosterSize::DETAIL] {
        let poster = loader.load_poster(Some(&path), size).unwrap();
        assert_eq!(size, poster.size());
        assert_eq!((size.width * size.height * 4) as usize, poster.rgba().len());
    }
}

#[test]
fn preprocess_posters_writes_reuses_and_reports_failures() {
    let poster_dir = empty_test_dir("preprocess-source");
    let dest_dir = empty_test_dir("preprocess-dest").join("posters");
    write_png(&poster_dir.join("premam.png"), 40, 60);
    let catalog = Catalog::new([
        movie("Premam", 2015, Some("premam.png")),
        movie("Uyare", 2019, None),
        movie("Thappad", 2020, Some("thappad.png")),
    ]);
    let premam_uid = catalog.entries()[0].uid;
    let loader = FilePosterLoader::new(Some(poster_dir));

    let report =
        preprocess_posters(&catalog, &loader, &dest_dir, PosterSize::GRID, false).unwrap();
    let expected_path = dest_dir.join("Premam_2015.jpg");
    assert_eq!(
        expected_path,
        preprocessed_poster_path(&dest_dir, &catalog.entries()[0].movie)
    );
    assert_eq!(vec![(premam_uid, expected_path.clone())], report.processed);
    assert!(report.reused.is_empty());
    assert_eq!(2, report.failed.len());
    assert!(matches!(
        report.failed[0].1,
        PreprocessFailure::Unavailable(PosterUnavailable::Missing)
    ));
    assert!(matches!(
        report.failed[1].1,
        PreprocessFailure::Unavailable(PosterUnavailable::NotFound(_))
    ));

    let written = image::open(&expected_path).unwrap();
    assert_eq!(200, written.width());
    assert_eq!(300, written.height());

    let report =
        preprocess_posters(&catalog, &loader, &dest_dir, PosterSize::GRID, false).unwrap();
    assert!(report.processed.is_empty());
    assert_eq!(vec![(premam_uid, expected_path.clone())], report.reused);

    let report =
        preprocess_posters(&catalog, &loader, &dest_dir, PosterSize::GRID, true).unwrap();
    assert_eq!(vec![(premam_uid, expected_path)], report.processed);
    assert!(report.reused.is_empty());
}
