// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use crate::{
    catalog::{Catalog, CatalogEntry},
    movie::Movie,
};

/// Hint text of an empty search field.
///
/// Submitting the hint text is treated like an empty query.
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// A normalized, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    lowercase_term: String,
}

impl Query {
    /// Normalize the user input.
    ///
    /// Returns `None` if the input is empty after trimming or if it
    /// equals the placeholder text, ignoring case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let lowercase_term = input.trim().to_lowercase();
        if lowercase_term.is_empty() || lowercase_term == SEARCH_PLACEHOLDER.to_lowercase() {
            return None;
        }
        Some(Self { lowercase_term })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.lowercase_term
    }

    /// Matches a substring of the title or a substring of any genre tag,
    /// ignoring case.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        movie.matches_lowercase_term(&self.lowercase_term)
    }

    /// Select all matching entries in catalog order.
    #[must_use]
    pub fn filter<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
        catalog
            .iter()
            .filter(|entry| self.matches(&entry.movie))
            .collect()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Find all movies with a title or genre that matches the user input.
///
/// An empty input or the placeholder text results in no matches.
#[must_use]
pub fn find_movies<'a>(catalog: &'a Catalog, input: &str) -> Vec<&'a CatalogEntry> {
    let Some(query) = Query::parse(input) else {
        return Vec::new();
    };
    let matches = query.filter(catalog);
    log::debug!(
        "Found {num_matches} movie(s) for \"{query}\"",
        num_matches = matches.len()
    );
    matches
}

#[cfg(test)]
mod tests;
