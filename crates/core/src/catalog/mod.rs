// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use rand::seq::SliceRandom as _;

use crate::{
    genre::Genre,
    movie::{Movie, MovieInvalidity, MovieUid},
    prelude::*,
    util::random::adhoc_rng,
};

mod sample;

/// A catalog record together with its synthetic identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub uid: MovieUid,
    pub movie: Movie,
}

/// The fixed, ordered list of movies.
///
/// Read-only after it has been loaded.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Load the catalog from records in catalog order.
    ///
    /// Identifiers are assigned sequentially starting at 0.
    #[must_use]
    pub fn new(movies: impl IntoIterator<Item = Movie>) -> Self {
        let entries = movies
            .into_iter()
            .zip(0..)
            .map(|(movie, uid)| CatalogEntry {
                uid: MovieUid::new(uid),
                movie,
            })
            .collect::<Vec<_>>();
        log::debug!(
            "Loaded catalog with {num_entries} movie(s)",
            num_entries = entries.len()
        );
        Self { entries }
    }

    /// The bundled sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        let catalog = Self::new(sample::movies());
        debug_assert!(catalog.validate().is_ok());
        catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, uid: MovieUid) -> Option<&CatalogEntry> {
        let entry = self.entries.get(uid.index())?;
        debug_assert_eq!(uid, entry.uid);
        Some(entry)
    }

    /// Select all movies tagged with the given genre.
    ///
    /// The genre must match one of the tags exactly, including case.
    /// Catalog order is preserved.
    #[must_use]
    pub fn movies_by_genre(&self, genre: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.movie.has_genre(genre))
            .collect()
    }

    /// Distinct genre tags in order of their first occurrence.
    #[must_use]
    pub fn genres(&self) -> Vec<&Genre> {
        let mut genres: Vec<&Genre> = Vec::new();
        for genre in self.entries.iter().flat_map(|entry| &entry.movie.genres) {
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }
        genres
    }

    /// Pick up to `max_count` distinct entries in random order.
    #[must_use]
    pub fn random_entries(&self, max_count: usize) -> Vec<&CatalogEntry> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.shuffle(&mut adhoc_rng());
        entries.truncate(max_count);
        entries
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CatalogInvalidity {
    Movie(MovieUid, MovieInvalidity),
}

impl Validate for Catalog {
    type Invalidity = CatalogInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        self.entries
            .iter()
            .fold(ValidationContext::new(), |context, entry| {
                let uid = entry.uid;
                context.validate_with(&entry.movie, |invalidity| {
                    CatalogInvalidity::Movie(uid, invalidity)
                })
            })
            .into()
    }
}

#[cfg(test)]
mod tests;
