// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use primeflix_core::{
    AddFavouriteOutcome, Catalog, CatalogEntry, Favourites, Genre, MovieUid, Query,
    search::find_movies,
};

use crate::ActionEffect;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Search by title or genre.
    Search(String),

    /// List all movies of a genre.
    SelectGenre(Genre),

    SelectMovie(MovieUid),

    AddToFavourites(MovieUid),

    AddSelectionToFavourites,

    ViewFavourites,

    /// Pick a random sample of movies.
    Browse { sample_size: usize },
}

/// Movies to be presented, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Search {
        /// The trimmed input.
        query: String,
        movies: Vec<MovieUid>,
    },
    Genre {
        genre: Genre,
        movies: Vec<MovieUid>,
    },
    Favourites {
        movies: Vec<MovieUid>,
    },
    Browse {
        movies: Vec<MovieUid>,
    },
}

impl Listing {
    #[must_use]
    pub fn movies(&self) -> &[MovieUid] {
        match self {
            Self::Search { movies, .. }
            | Self::Genre { movies, .. }
            | Self::Favourites { movies }
            | Self::Browse { movies } => movies,
        }
    }
}

/// Ephemeral information for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    EmptySearch,
    NoMatches { query: String },
    NoMoviesInGenre,
    FavouriteAdded { title: String },
    FavouriteAlreadyPresent { title: String },
    NoSelection,
    NoFavourites,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySearch => f.write_str("Please enter or select a genre or movie title."),
            Self::NoMatches { query } => write!(f, "No matches for '{query}'"),
            Self::NoMoviesInGenre => f.write_str("No movies found in this genre."),
            Self::FavouriteAdded { title } => write!(f, "{title} added to favourites!"),
            Self::FavouriteAlreadyPresent { title } => {
                write!(f, "{title} is already in favourites.")
            }
            Self::NoSelection => f.write_str("No movie selected."),
            Self::NoFavourites => f.write_str("You have no favourites yet!"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Changed if the state of the library has been modified.
    ///
    /// Responses that only carry a listing or a notice are maybe
    /// changed.
    pub effect: ActionEffect,

    pub listing: Option<Listing>,

    pub notice: Option<Notice>,
}

impl Response {
    #[must_use]
    const fn unchanged() -> Self {
        Self {
            effect: ActionEffect::Unchanged,
            listing: None,
            notice: None,
        }
    }

    #[must_use]
    const fn notice(effect: ActionEffect, notice: Notice) -> Self {
        Self {
            effect,
            listing: None,
            notice: Some(notice),
        }
    }

    #[must_use]
    fn listing(listing: Listing, notice: Option<Notice>) -> Self {
        Self {
            effect: ActionEffect::MaybeChanged,
            listing: Some(listing),
            notice,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown movie {0}")]
pub struct UnknownMovie(pub MovieUid);

/// Stateful library frontend.
///
/// Owns the catalog, the favourites, and the current selection.
/// Manages the application state that should not depend on any
/// particular UI technology.
#[derive(Debug)]
pub struct Library {
    catalog: Catalog,
    favourites: Favourites,
    selection: Option<MovieUid>,
}

impl Library {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            favourites: Favourites::new(),
            selection: None,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn favourites(&self) -> &Favourites {
        &self.favourites
    }

    pub fn entry(&self, uid: MovieUid) -> Result<&CatalogEntry, UnknownMovie> {
        self.catalog.get(uid).ok_or(UnknownMovie(uid))
    }

    #[must_use]
    pub fn selection(&self) -> Option<&CatalogEntry> {
        self.selection.and_then(|uid| self.catalog.get(uid))
    }

    pub fn dispatch(&mut self, command: Command) -> Response {
        log::debug!("Dispatching {command:?}");
        match command {
            Command::Search(input) => self.search(&input),
            Command::SelectGenre(genre) => self.select_genre(genre),
            Command::SelectMovie(uid) => self.select_movie(uid),
            Command::AddToFavourites(uid) => self.add_to_favourites(uid),
            Command::AddSelectionToFavourites => self.add_selection_to_favourites(),
            Command::ViewFavourites => self.view_favourites(),
            Command::Browse { sample_size } => self.browse(sample_size),
        }
    }

    /// Search by title or genre.
    ///
    /// The first matching movie becomes the selection.
    pub fn search(&mut self, input: &str) -> Response {
        if Query::parse(input).is_none() {
            return Response::notice(ActionEffect::MaybeChanged, Notice::EmptySearch);
        }
        let query = input.trim().to_owned();
        let movies = uids(find_movies(&self.catalog, &query));
        let notice = movies.is_empty().then(|| Notice::NoMatches {
            query: query.clone(),
        });
        let first_match = movies.first().copied();
        let mut response = Response::listing(Listing::Search { query, movies }, notice);
        if let Some(uid) = first_match {
            response.effect += self.update_selection(uid);
        }
        response
    }

    #[must_use]
    pub fn select_genre(&self, genre: Genre) -> Response {
        let movies = uids(self.catalog.movies_by_genre(genre.as_str()));
        let notice = movies.is_empty().then_some(Notice::NoMoviesInGenre);
        Response::listing(Listing::Genre { genre, movies }, notice)
    }

    pub fn select_movie(&mut self, uid: MovieUid) -> Response {
        if let Err(err) = self.entry(uid) {
            log::warn!("Cannot select movie: {err}");
            return Response::unchanged();
        }
        Response {
            effect: self.update_selection(uid),
            ..Response::unchanged()
        }
    }

    fn update_selection(&mut self, uid: MovieUid) -> ActionEffect {
        let changed = self.selection != Some(uid);
        self.selection = Some(uid);
        ActionEffect::changed_if(changed)
    }

    pub fn add_to_favourites(&mut self, uid: MovieUid) -> Response {
        let Some(entry) = self.catalog.get(uid) else {
            log::warn!("Cannot add to favourites: {err}", err = UnknownMovie(uid));
            return Response::unchanged();
        };
        let title = entry.movie.title.clone();
        match self.favourites.add(entry) {
            AddFavouriteOutcome::Added => {
                log::info!("Added {title} to favourites");
                Response::notice(ActionEffect::Changed, Notice::FavouriteAdded { title })
            }
            AddFavouriteOutcome::AlreadyPresent => Response::notice(
                ActionEffect::MaybeChanged,
                Notice::FavouriteAlreadyPresent { title },
            ),
        }
    }

    pub fn add_selection_to_favourites(&mut self) -> Response {
        let Some(uid) = self.selection else {
            return Response::notice(ActionEffect::MaybeChanged, Notice::NoSelection);
        };
        self.add_to_favourites(uid)
    }

    #[must_use]
    pub fn view_favourites(&self) -> Response {
        let movies = uids(self.favourites.entries());
        let notice = movies.is_empty().then_some(Notice::NoFavourites);
        Response::listing(Listing::Favourites { movies }, notice)
    }

    #[must_use]
    pub fn browse(&self, sample_size: usize) -> Response {
        let movies = uids(self.catalog.random_entries(sample_size));
        Response::listing(Listing::Browse { movies }, None)
    }
}

fn uids<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) -> Vec<MovieUid> {
    entries.into_iter().map(|entry| entry.uid).collect()
}
