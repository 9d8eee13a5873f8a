// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn titles<'a>(entries: &[&'a CatalogEntry]) -> Vec<&'a str> {
    entries
        .iter()
        .map(|entry| entry.movie.title.as_str())
        .collect()
}

fn satisfies_predicate(movie: &Movie, input: &str) -> bool {
    let term = input.trim().to_lowercase();
    movie.title.to_lowercase().contains(&term)
        || movie
            .genres
            .iter()
            .any(|genre| genre.as_str().to_lowercase().contains(&term))
}

const SAMPLE_QUERIES: &[&str] = &[
    "premam",
    "Thriller",
    "  drama ",
    "RA.ONE",
    "a",
    "sci",
    "2",
    "ka",
    "horror",
    "fiction",
];

#[test]
fn parse_empty_or_placeholder() {
    assert_eq!(None, Query::parse(""));
    assert_eq!(None, Query::parse(" \t\n"));
    assert_eq!(None, Query::parse(SEARCH_PLACEHOLDER));
    assert_eq!(None, Query::parse(" search... "));
    assert_eq!(None, Query::parse("SEARCH..."));
}

#[test]
fn parse_normalizes_input() {
    let query = Query::parse("  Kahaani 2 ").unwrap();
    assert_eq!("kahaani 2", query.as_str());
    // Inner whitespace is kept
    let query = Query::parse("Bangalore  Days").unwrap();
    assert_eq!("bangalore  days", query.as_str());
}

#[test]
fn empty_or_placeholder_input_matches_nothing() {
    let catalog = Catalog::sample();
    for input in ["", "   ", "Search...", "search..."] {
        assert!(find_movies(&catalog, input).is_empty());
    }
}

#[test]
fn premam() {
    let catalog = Catalog::sample();
    let found = find_movies(&catalog, "premam");
    assert_eq!(1, found.len());
    assert_eq!("Premam", found[0].movie.title);
    assert_eq!(2015, found[0].movie.year);
}

#[test]
fn thriller_matches_genre_case_insensitive() {
    let catalog = Catalog::sample();
    let found = find_movies(&catalog, "Thriller");
    let titles = titles(&found);
    assert!(titles.contains(&"Kahaani"));
    assert!(titles.contains(&"Kahaani 2"));
    assert!(found.iter().all(|entry| {
        entry
            .movie
            .genres
            .iter()
            .any(|genre| genre.as_str().to_lowercase().contains("thriller"))
    }));
}

#[test]
fn genre_substring_matches() {
    let catalog = Catalog::sample();
    let found = find_movies(&catalog, "sci");
    assert!(!found.is_empty());
    assert!(found.iter().all(|entry| entry.movie.has_genre("Sci-Fi")));
}

#[test]
fn matches_satisfy_predicate() {
    let catalog = Catalog::sample();
    for input in SAMPLE_QUERIES {
        for entry in find_movies(&catalog, input) {
            assert!(
                satisfies_predicate(&entry.movie, input),
                "{title} does not match {input}",
                title = entry.movie.title
            );
        }
    }
}

#[test]
fn matches_are_complete_and_in_catalog_order() {
    let catalog = Catalog::sample();
    for input in SAMPLE_QUERIES {
        let expected = catalog
            .iter()
            .filter(|entry| satisfies_predicate(&entry.movie, input))
            .collect::<Vec<_>>();
        assert_eq!(expected, find_movies(&catalog, input));
    }
}

#[test]
fn duplicate_titles_are_not_deduplicated() {
    let catalog = Catalog::sample();
    let found = find_movies(&catalog, "ra.one");
    assert_eq!(vec!["Ra.One", "Ra.One"], titles(&found));
    assert_ne!(found[0].uid, found[1].uid);
}

#[test]
fn find_movies_is_idempotent() {
    let catalog = Catalog::sample();
    for input in SAMPLE_QUERIES {
        assert_eq!(find_movies(&catalog, input), find_movies(&catalog, input));
    }
}

#[test]
fn no_matches() {
    let catalog = Catalog::sample();
    assert!(find_movies(&catalog, "xyzzy").is_empty());
}
