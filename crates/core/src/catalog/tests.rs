// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use crate::movie::Rating;

use super::*;

fn movie(title: &str, genres: &[&'static str]) -> Movie {
    Movie {
        title: title.to_owned(),
        year: 2020,
        rating: Rating::new(7.0),
        genres: genres.iter().copied().map(Genre::from_static).collect(),
        image: None,
    }
}

#[test]
fn sample_catalog_is_valid() {
    let catalog = Catalog::sample();
    assert_eq!(96, catalog.len());
    assert!(catalog.is_valid());
}

#[test]
fn uids_are_catalog_positions() {
    let catalog = Catalog::sample();
    for (index, entry) in catalog.iter().enumerate() {
        assert_eq!(index, entry.uid.index());
        assert_eq!(Some(entry), catalog.get(entry.uid));
    }
    assert_eq!(None, catalog.get(MovieUid::new(96)));
}

#[test]
fn invalid_catalog() {
    assert!(Catalog::new([movie("Uyare", &["Drama"])]).is_valid());
    assert!(!Catalog::new([movie("Uyare", &["Drama"]), movie("", &["Drama"])]).is_valid());
    assert!(!Catalog::new([movie(" Uyare", &["Drama"])]).is_valid());
}

#[test]
fn horror() {
    let catalog = Catalog::sample();
    let titles = catalog
        .movies_by_genre("Horror")
        .into_iter()
        .map(|entry| entry.movie.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        vec![
            "Tumbbad",
            "Stree",
            "Pari",
            "Raaz",
            "Pizza",
            "1920",
            "Ragini MMS"
        ],
        titles
    );
}

#[test]
fn movies_by_genre_is_exact_and_case_sensitive() {
    let catalog = Catalog::new([
        movie("Space Warriors", &["Action", "Sci-Fi"]),
        movie("PK", &["Sci-Fi", "Comedy"]),
        movie("Cargo", &["Sci-Fi", "Drama"]),
    ]);
    assert_eq!(3, catalog.movies_by_genre("Sci-Fi").len());
    assert!(catalog.movies_by_genre("sci-fi").is_empty());
    assert!(catalog.movies_by_genre("Sci").is_empty());
    assert!(catalog.movies_by_genre("").is_empty());
    let dramas = catalog.movies_by_genre("Drama");
    assert_eq!(1, dramas.len());
    assert_eq!("Cargo", dramas[0].movie.title);
}

#[test]
fn genres_in_order_of_first_occurrence() {
    let catalog = Catalog::new([
        movie("Space Warriors", &["Action", "Sci-Fi"]),
        movie("PK", &["Sci-Fi", "Comedy"]),
        movie("Anand", &[]),
        movie("Cargo", &["Sci-Fi", "Drama"]),
    ]);
    let genres = catalog
        .genres()
        .into_iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>();
    assert_eq!(vec!["Action", "Sci-Fi", "Comedy", "Drama"], genres);
}

#[test]
fn random_entries_are_distinct() {
    let catalog = Catalog::sample();
    let entries = catalog.random_entries(20);
    assert_eq!(20, entries.len());
    let uids = entries.iter().map(|entry| entry.uid).collect::<HashSet<_>>();
    assert_eq!(20, uids.len());
}

#[test]
fn random_entries_are_capped_at_catalog_size() {
    let catalog = Catalog::new([movie("Uyare", &["Drama"]), movie("Joji", &["Drama"])]);
    assert_eq!(2, catalog.random_entries(20).len());
    assert!(catalog.random_entries(0).is_empty());
    assert!(Catalog::default().random_entries(20).is_empty());
}
