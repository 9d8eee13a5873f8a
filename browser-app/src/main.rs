// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use directories::ProjectDirs;
use log::LevelFilter;

use primeflix::{Catalog, desktop_app::library::Library, prelude::*};

pub mod app;
use self::app::App;

#[cfg(feature = "cli")]
mod cli;

pub mod ui;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static MIMALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug)]
pub struct NoReceiverForEvent;

/// Default log level for debug builds.
#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Info;

/// Reduce log verbosity for release builds.
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER_LEVEL: LevelFilter = LevelFilter::Warn;

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let Some(dir_path) = app_data_dir() else {
        bail!("default data directory is unavailable");
    };
    let readonly = dir_path
        .metadata()
        .map(|metadata| metadata.permissions().readonly())
        .context("metadata")?;
    if readonly {
        log::warn!(
            "Default data directory (read-only): {dir_path}",
            dir_path = dir_path.display()
        );
    }
    Ok(dir_path)
}

#[tokio::main]
async fn main() {
    env_logger::Builder::new()
        .filter_level(DEFAULT_LOG_FILTER_LEVEL)
        // Parse environment variables after configuring all default option(s).
        .parse_default_env()
        .init();

    #[cfg(feature = "cli")]
    let args = <cli::Args as clap::Parser>::parse();

    #[cfg(feature = "cli")]
    let config_dir = args.config_dir.clone().or_else(app_config_dir);
    #[cfg(not(feature = "cli"))]
    let config_dir = app_config_dir();

    let Some(config_dir) = config_dir else {
        log::error!("Config directory is unavailable");
        return;
    };
    match config_dir
        .metadata()
        .map(|metadata| metadata.permissions().readonly())
    {
        Ok(readonly) => {
            if readonly {
                log::warn!(
                    "Config directory (read-only): {dir_path}",
                    dir_path = config_dir.display()
                );
            } else {
                log::info!(
                    "Config directory: {dir_path}",
                    dir_path = config_dir.display()
                );
            }
        }
        Err(err) => {
            log::error!("Failed to query permissions of config directory: {err}");
        }
    }

    let initial_settings =
        match primeflix::desktop_app::settings::State::restore(&config_dir, default_data_dir) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("Failed to restore settings: {err:#}");
                return;
            }
        };

    let catalog = Catalog::sample();
    if !catalog.is_valid() {
        log::warn!("Catalog contains invalid movies");
    }
    let mut library = Library::new(catalog);

    #[cfg(feature = "cli")]
    if let Some(command) = args.command {
        if let Err(err) = cli::run(command, &mut library, &initial_settings) {
            log::error!("Command failed: {err:#}");
        }
        return;
    }

    let rt = match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle,
        Err(err) => {
            log::error!("No Tokio runtime: {err}");
            return;
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(app::WINDOW_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_fullscreen(initial_settings.fullscreen),
        ..Default::default()
    };
    if let Err(err) = eframe::run_native(
        app_name(),
        native_options,
        Box::new(move |ctx| {
            let mdl = app::Model::new(&ctx.egui_ctx, library, initial_settings);
            let app = App::new(ctx, rt, mdl, config_dir);
            Ok(Box::new(app))
        }),
    ) {
        log::error!("Failed to run app: {err}");
    }
}

#[must_use]
const fn app_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

#[must_use]
fn app_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", app_name())
}

fn init_app_dir(app_dir: &Path) {
    if let Err(err) = std::fs::create_dir_all(app_dir) {
        log::error!(
            "Failed to create app directory '{dir}': {err}",
            dir = app_dir.display(),
        );
    } else {
        debug_assert!(app_dir.exists());
    }
}

#[must_use]
fn init_config_dir(app_dirs: &ProjectDirs) -> &Path {
    let app_config_dir = app_dirs.config_local_dir();
    init_app_dir(app_config_dir);
    app_config_dir
}

#[must_use]
fn init_data_dir(app_dirs: &ProjectDirs) -> &Path {
    let app_data_dir = app_dirs.data_local_dir();
    init_app_dir(app_data_dir);
    app_data_dir
}

#[must_use]
fn app_config_dir() -> Option<PathBuf> {
    app_dirs()
        .as_ref()
        .map(init_config_dir)
        .map(Path::to_path_buf)
}

#[must_use]
fn app_data_dir() -> Option<PathBuf> {
    app_dirs()
        .as_ref()
        .map(init_data_dir)
        .map(Path::to_path_buf)
}
