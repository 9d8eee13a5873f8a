// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn kahaani() -> Movie {
    Movie {
        title: "Kahaani".to_owned(),
        year: 2012,
        rating: Rating::new(8.1),
        genres: vec![Genre::from_static("Thriller"), Genre::from_static("Mystery")],
        image: Some(PosterPath::new("kahaani.jpg")),
    }
}

#[test]
fn full_record_equality() {
    let movie = kahaani();
    assert_eq!(movie, movie.clone());

    let other_year = Movie {
        year: 2016,
        ..kahaani()
    };
    assert_ne!(movie, other_year);

    let without_image = Movie {
        image: None,
        ..kahaani()
    };
    assert_ne!(movie, without_image);
}

#[test]
fn has_genre_is_case_sensitive() {
    let movie = kahaani();
    assert!(movie.has_genre("Thriller"));
    assert!(!movie.has_genre("thriller"));
    assert!(!movie.has_genre("Thrill"));
}

#[test]
fn matches_lowercase_term_in_title_or_genres() {
    let movie = kahaani();
    assert!(movie.matches_lowercase_term("kahaani"));
    assert!(movie.matches_lowercase_term("haa"));
    assert!(movie.matches_lowercase_term("mystery"));
    assert!(movie.matches_lowercase_term("myst"));
    assert!(!movie.matches_lowercase_term("horror"));
}

#[test]
fn genres_label() {
    assert_eq!("Thriller, Mystery", kahaani().genres_label());
}

#[test]
fn rating_display() {
    assert_eq!("8.0", Rating::new(8.0).to_string());
    assert_eq!("8.1", Rating::new(8.1).to_string());
}

#[test]
fn rating_equality_is_reflexive() {
    let nan = Rating::new(f64::NAN);
    assert_eq!(nan, nan);
    assert_ne!(nan, Rating::new(8.1));
    assert_eq!(Rating::new(8.1), Rating::new(8.1));

    let unrated = Movie {
        rating: nan,
        ..kahaani()
    };
    assert_eq!(unrated, unrated.clone());
}

#[test]
fn validate_movie() {
    assert!(kahaani().validate().is_ok());

    let untitled = Movie {
        title: String::new(),
        ..kahaani()
    };
    assert!(untitled.validate().is_err());

    let untrimmed = Movie {
        title: " Kahaani".to_owned(),
        ..kahaani()
    };
    assert!(untrimmed.validate().is_err());

    let unrated = Movie {
        rating: Rating::new(f64::NAN),
        ..kahaani()
    };
    assert!(unrated.validate().is_err());
}

#[test]
fn movie_without_genres_and_image_is_valid() {
    let movie = Movie {
        genres: vec![],
        image: None,
        ..kahaani()
    };
    assert!(movie.validate().is_ok());
}
