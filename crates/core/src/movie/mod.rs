// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use derive_more::{Display, From};

use crate::{
    genre::Genre,
    poster::PosterPath,
    prelude::*,
    util::string::{contains_lowercase, is_trimmed_non_empty},
};

///////////////////////////////////////////////////////////////////////
// MovieUid
///////////////////////////////////////////////////////////////////////

/// Synthetic identifier of a catalog record.
///
/// Assigned once when the catalog is loaded. Equals the zero-based
/// position of the record in catalog order and is unique within a
/// catalog, unlike the title.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct MovieUid(u32);

impl MovieUid {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

///////////////////////////////////////////////////////////////////////
// ReleaseYear
///////////////////////////////////////////////////////////////////////

pub type ReleaseYear = u16;

///////////////////////////////////////////////////////////////////////
// Rating
///////////////////////////////////////////////////////////////////////

pub type RatingValue = f64;

/// Average user rating.
///
/// Informational only. No range is enforced, but the value must be
/// finite to be displayed.
///
/// Ratings are compared bitwise. NaN equals itself.
#[derive(Copy, Clone, Debug, Default, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Rating(RatingValue);

impl Rating {
    #[must_use]
    pub const fn new(value: RatingValue) -> Self {
        Self(value)
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Rating {}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RatingInvalidity {
    NotFinite,
}

impl Validate for Rating {
    type Invalidity = RatingInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(!self.0.is_finite(), Self::Invalidity::NotFinite)
            .into()
    }
}

///////////////////////////////////////////////////////////////////////
// Movie
///////////////////////////////////////////////////////////////////////

/// A single catalog record.
///
/// Two records are equal only if *all* fields are equal. Records that
/// merely share a title are different.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    pub title: String,

    pub year: ReleaseYear,

    pub rating: Rating,

    /// Ordered genre tags.
    pub genres: Vec<Genre>,

    /// Optional path of the poster image.
    pub image: Option<PosterPath>,
}

impl Movie {
    /// Check if any genre tag equals the given tag exactly.
    ///
    /// The comparison is case-sensitive.
    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|tag| tag.as_str() == genre)
    }

    /// Check if the lowercase term is contained in the title or in any
    /// of the genre tags, ignoring case.
    #[must_use]
    pub fn matches_lowercase_term(&self, lowercase_term: &str) -> bool {
        contains_lowercase(&self.title, lowercase_term)
            || self
                .genres
                .iter()
                .any(|genre| genre.matches_lowercase_term(lowercase_term))
    }

    /// Genre tags joined for display, e.g. "Thriller, Mystery".
    #[must_use]
    pub fn genres_label(&self) -> String {
        Genre::join_labels(&self.genres, ", ")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovieInvalidity {
    Title,
    Rating(RatingInvalidity),
}

impl Validate for Movie {
    type Invalidity = MovieInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(!is_trimmed_non_empty(&self.title), Self::Invalidity::Title)
            .validate_with(&self.rating, Self::Invalidity::Rating)
            .into()
    }
}

#[cfg(test)]
mod tests;
