// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Headless access without starting the GUI.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use itertools::Itertools as _;

use primeflix::{
    CatalogEntry, Genre, PosterSize,
    desktop_app::{
        library::{Command as LibraryCommand, Library},
        settings,
    },
    poster::preprocess_posters,
};

use crate::ui::movie_line;

#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Args {
    /// Override the directory of the settings file.
    #[arg(long)]
    pub(crate) config_dir: Option<PathBuf>,

    /// Start the GUI if omitted.
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Find movies by title or genre.
    Search { query: String },

    /// List all movies tagged with a genre (case-sensitive).
    Genre { tag: String },

    /// List all movies.
    Catalog,

    /// List all genres.
    Genres,

    /// Render all posters as thumbnails into the poster cache directory.
    Posters {
        /// Replace existing thumbnails.
        #[arg(long)]
        overwrite: bool,
    },
}

pub(crate) fn run(
    command: Command,
    library: &mut Library,
    settings: &settings::State,
) -> anyhow::Result<()> {
    match command {
        Command::Search { query } => {
            dispatch_and_print(library, LibraryCommand::Search(query));
        }
        Command::Genre { tag } => {
            dispatch_and_print(library, LibraryCommand::SelectGenre(Genre::new(tag)));
        }
        Command::Catalog => {
            print_entries(library.catalog().iter());
        }
        Command::Genres => {
            println!("{}", library.catalog().genres().into_iter().join("\n"));
        }
        Command::Posters { overwrite } => {
            let dest_dir = settings
                .poster_cache_dir()
                .context("poster cache directory is not configured")?;
            let loader = settings.poster_loader();
            let report = preprocess_posters(
                library.catalog(),
                &loader,
                dest_dir,
                PosterSize::GRID,
                overwrite,
            )
            .with_context(|| format!("pre-processing posters into {}", dest_dir.display()))?;
            println!(
                "Processed {processed} poster(s), reused {reused}, {failed} missing/failed",
                processed = report.processed.len(),
                reused = report.reused.len(),
                failed = report.failed.len(),
            );
            for (uid, failure) in &report.failed {
                let title = library
                    .entry(*uid)
                    .map(|entry| entry.movie.title.as_str())
                    .unwrap_or_default();
                println!(" - {title} -> {failure}");
            }
        }
    }
    Ok(())
}

fn dispatch_and_print(library: &mut Library, command: LibraryCommand) {
    let response = library.dispatch(command);
    if let Some(listing) = &response.listing {
        print_entries(
            listing
                .movies()
                .iter()
                .filter_map(|uid| library.entry(*uid).ok()),
        );
    }
    if let Some(notice) = response.notice {
        eprintln!("{notice}");
    }
}

fn print_entries<'a>(entries: impl IntoIterator<Item = &'a CatalogEntry>) {
    for entry in entries {
        println!("{}", movie_line(&entry.movie));
    }
}
