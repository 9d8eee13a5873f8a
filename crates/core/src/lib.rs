// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core domain model of the movie catalog.
//!
//! Everything in this crate is independent of any particular UI technology.

pub mod catalog;
pub use self::catalog::{Catalog, CatalogEntry};

pub mod favourites;
pub use self::favourites::{AddFavouriteOutcome, Favourites};

pub mod genre;
pub use self::genre::{FeaturedGenre, Genre};

pub mod movie;
pub use self::movie::{Movie, MovieUid, Rating, ReleaseYear};

pub mod poster;
pub use self::poster::{
    FilePosterLoader, PosterImage, PosterLoader, PosterPath, PosterSize, PosterUnavailable,
};

pub mod search;
pub use self::search::{Query, SEARCH_PLACEHOLDER, find_movies};

pub mod util;

pub mod prelude {
    // Re-export trait methods from semval
    pub use semval::{IsValid as _, Validate as _};

    pub(crate) use semval::prelude::*;
}
