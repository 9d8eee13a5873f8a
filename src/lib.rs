// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Browse a fixed catalog of movies, search by title or genre, and keep
//! a list of favourites.

pub use primeflix_core::*;

#[cfg(feature = "desktop-app")]
pub use primeflix_desktop_app as desktop_app;
