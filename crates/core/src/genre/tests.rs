// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn genre_equality_is_case_sensitive() {
    assert_eq!(Genre::from_static("Horror"), Genre::from("Horror".to_owned()));
    assert_ne!(Genre::from_static("Horror"), Genre::from_static("horror"));
}

#[test]
fn genre_matches_lowercase_term() {
    let genre = Genre::from_static("Sci-Fi");
    assert!(genre.matches_lowercase_term("sci-fi"));
    assert!(genre.matches_lowercase_term("sci"));
    assert!(genre.matches_lowercase_term("-f"));
    assert!(!genre.matches_lowercase_term("scifi"));
}

#[test]
fn join_labels() {
    let genres = [Genre::from_static("Romance"), Genre::from_static("Comedy")];
    assert_eq!("Romance, Comedy", Genre::join_labels(&genres, ", "));
    assert_eq!("", Genre::join_labels(&[] as &[Genre], ", "));
}

#[test]
fn featured_genres_in_display_order() {
    let labels: Vec<_> = FeaturedGenre::all().map(FeaturedGenre::label).collect();
    assert_eq!(
        vec![
            "Comedy", "Romance", "Thriller", "Action", "Horror", "Drama", "Sci-Fi", "Mystery"
        ],
        labels
    );
}

#[test]
fn featured_genre_colors() {
    assert_eq!(RgbColor::new(0xff_47_47), FeaturedGenre::Comedy.color());
    assert_eq!(RgbColor::new(0x2c_3e_50), FeaturedGenre::Horror.color());
    assert_eq!(RgbColor::new(0xf1_c4_0f), FeaturedGenre::SciFi.color());
}
