// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{catalog::CatalogEntry, movie::Movie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddFavouriteOutcome {
    Added,
    AlreadyPresent,
}

/// Movies marked by the user, in the order they were added.
///
/// Only grows and is never persisted. Membership is decided by comparing
/// all fields of the movie, not only the title.
#[derive(Debug, Clone, Default)]
pub struct Favourites {
    entries: Vec<CatalogEntry>,
}

impl Favourites {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
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

    #[must_use]
    pub fn contains(&self, movie: &Movie) -> bool {
        self.entries.iter().any(|entry| entry.movie == *movie)
    }

    pub fn add(&mut self, entry: &CatalogEntry) -> AddFavouriteOutcome {
        if self.contains(&entry.movie) {
            return AddFavouriteOutcome::AlreadyPresent;
        }
        self.entries.push(entry.clone());
        AddFavouriteOutcome::Added
    }
}
