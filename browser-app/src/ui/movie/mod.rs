// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use egui::Color32;

use primeflix::{FeaturedGenre, Movie, desktop_app::library::Listing, util::color::RgbColor};

#[must_use]
const fn solid_rgb_color(color: RgbColor) -> Color32 {
    Color32::from_rgb(color.red(), color.green(), color.blue())
}

#[must_use]
pub(crate) const fn featured_genre_color(genre: FeaturedGenre) -> Color32 {
    solid_rgb_color(genre.color())
}

/// Single line for terminal output.
#[must_use]
pub(crate) fn movie_line(movie: &Movie) -> String {
    let Movie {
        title,
        year,
        rating,
        ..
    } = movie;
    format!(
        "{title} ({year}) - Rating: {rating} [{genres}]",
        genres = movie.genres_label()
    )
}

#[must_use]
pub(crate) fn favourite_line(movie: &Movie) -> String {
    let Movie {
        title,
        year,
        rating,
        ..
    } = movie;
    format!(
        "{title} ({year}) — {genres} | ⭐ {rating}",
        genres = movie.genres_label()
    )
}

#[must_use]
pub(crate) fn detail_subtitle(movie: &Movie) -> String {
    let Movie { year, rating, .. } = movie;
    format!("{year} • ⭐ {rating}")
}

/// Caption below a poster in the browse grid.
#[must_use]
pub(crate) fn tile_caption(movie: &Movie) -> String {
    let Movie { year, rating, .. } = movie;
    format!("⭐ {rating} | {year}")
}

#[must_use]
pub(crate) fn listing_heading(listing: &Listing) -> String {
    match listing {
        Listing::Search { query, movies } => {
            format!("Results for '{query}' ({count})", count = movies.len())
        }
        Listing::Genre { genre, movies } => {
            format!("{genre} Movies ({count})", count = movies.len())
        }
        Listing::Favourites { movies } => format!("My List ({count})", count = movies.len()),
        Listing::Browse { .. } => "Browse".to_owned(),
    }
}
