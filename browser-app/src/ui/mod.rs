// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! User interface components for rendering with `egui`.

mod movie;
pub(crate) use self::movie::{
    detail_subtitle, favourite_line, featured_genre_color, listing_heading, movie_line,
    tile_caption,
};

mod poster;
pub(crate) use self::poster::{PosterCache, PosterKey, load_poster_blocking};
