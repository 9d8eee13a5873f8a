// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{borrow::Cow, fmt};

use itertools::Itertools as _;
use strum::{EnumIter, IntoEnumIterator as _};

use crate::util::{color::RgbColor, string::contains_lowercase};

///////////////////////////////////////////////////////////////////////
// Genre
///////////////////////////////////////////////////////////////////////

/// A genre tag.
///
/// Free text, compared case-sensitively for equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct Genre(Cow<'static, str>);

impl Genre {
    #[must_use]
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Equal to or contains the lowercase term, ignoring case.
    #[must_use]
    pub fn matches_lowercase_term(&self, lowercase_term: &str) -> bool {
        // Covers exact matches, too.
        contains_lowercase(&self.0, lowercase_term)
    }

    #[must_use]
    pub fn join_labels<'a>(genres: impl IntoIterator<Item = &'a Genre>, separator: &str) -> String {
        genres.into_iter().map(Genre::as_str).join(separator)
    }
}

impl AsRef<str> for Genre {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Genre {
    fn from(from: String) -> Self {
        Self(Cow::Owned(from))
    }
}

impl From<&'static str> for Genre {
    fn from(from: &'static str) -> Self {
        Self::from_static(from)
    }
}

///////////////////////////////////////////////////////////////////////
// FeaturedGenre
///////////////////////////////////////////////////////////////////////

/// Genres that are offered for quick selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum FeaturedGenre {
    Comedy,
    Romance,
    Thriller,
    Action,
    Horror,
    Drama,
    SciFi,
    Mystery,
}

impl FeaturedGenre {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comedy => "Comedy",
            Self::Romance => "Romance",
            Self::Thriller => "Thriller",
            Self::Action => "Action",
            Self::Horror => "Horror",
            Self::Drama => "Drama",
            Self::SciFi => "Sci-Fi",
            Self::Mystery => "Mystery",
        }
    }

    /// Accent color for rendering.
    #[must_use]
    pub const fn color(self) -> RgbColor {
        let code = match self {
            Self::Comedy => 0xff_47_47,
            Self::Romance => 0xff_6f_91,
            Self::Thriller => 0x8e_44_ad,
            Self::Action => 0x34_98_db,
            Self::Horror => 0x2c_3e_50,
            Self::Drama => 0x16_a0_85,
            Self::SciFi => 0xf1_c4_0f,
            Self::Mystery => 0xe6_7e_22,
        };
        RgbColor::new(code)
    }

    /// All featured genres in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl fmt::Display for FeaturedGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests;
