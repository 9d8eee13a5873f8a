// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use egui::Context;

use primeflix::desktop_app::{
    library::{Library, Listing, Notice},
    settings,
};

use crate::ui::PosterCache;

/// Content of the central panel.
#[derive(Debug, Default)]
pub(crate) enum ModelMode {
    #[default]
    Home,
    Listing(Listing),
    More,
}

#[derive(Debug)]
pub(crate) struct Model {
    pub(crate) library: Library,
    pub(crate) settings: settings::State,
    pub(crate) mode: ModelMode,

    /// The most recent notice, replaced by the next one.
    pub(crate) notice: Option<Notice>,

    pub(crate) posters: PosterCache,
}

impl Model {
    #[must_use]
    pub(crate) fn new(ctx: &Context, library: Library, settings: settings::State) -> Self {
        Self {
            library,
            settings,
            mode: Default::default(),
            notice: None,
            posters: PosterCache::new(ctx),
        }
    }
}
