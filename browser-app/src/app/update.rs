// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::{Path, PathBuf};

use egui::{Context, ViewportCommand};

use primeflix::{
    PosterUnavailable,
    desktop_app::{
        ActionEffect, JoinedTask,
        library::{Command, Response},
        settings,
    },
};

use crate::ui::{PosterKey, load_poster_blocking};

use super::{
    Action, Event, Message, MessageSender, Model, ModelMode, NavigateAction, PosterAction,
    SettingsAction,
};

pub(super) struct UpdateContext<'a> {
    pub(super) rt: &'a tokio::runtime::Handle,
    pub(super) msg_tx: &'a MessageSender,
    pub(super) mdl: &'a mut Model,
    pub(super) settings_dir: &'a Path,
}

impl UpdateContext<'_> {
    pub(super) fn on_message(&mut self, ctx: &Context, msg: Message) {
        match msg {
            Message::Action(action) => self.on_action(ctx, action),
            Message::Event(event) => self.on_event(ctx, event),
        }
    }

    fn on_action(&mut self, ctx: &Context, action: Action) {
        let action_effect = match action {
            Action::Navigate(action) => self.on_navigate_action(action),
            Action::Library(command) => self.on_library_command(command),
            Action::Poster(action) => self.on_poster_action(action),
            Action::Settings(action) => self.on_settings_action(ctx, action),
        };
        if action_effect.is_unchanged() {
            return;
        }
        ctx.request_repaint();
    }

    fn on_navigate_action(&mut self, action: NavigateAction) -> ActionEffect {
        match action {
            NavigateAction::Home => {
                self.mdl.mode = ModelMode::Home;
                ActionEffect::MaybeChanged
            }
            NavigateAction::Browse => {
                let sample_size = self.mdl.settings.browse_sample_size;
                self.on_library_command(Command::Browse { sample_size })
            }
            NavigateAction::MyList => self.on_library_command(Command::ViewFavourites),
            NavigateAction::More => {
                self.mdl.mode = ModelMode::More;
                ActionEffect::MaybeChanged
            }
        }
    }

    fn on_library_command(&mut self, command: Command) -> ActionEffect {
        let Model {
            library,
            mode,
            notice,
            ..
        } = self.mdl;
        let Response {
            effect,
            listing,
            notice: new_notice,
        } = library.dispatch(command);
        if let Some(listing) = listing {
            log::debug!(
                "Showing listing with {count} movie(s)",
                count = listing.movies().len()
            );
            *mode = ModelMode::Listing(listing);
        }
        if let Some(new_notice) = new_notice {
            log::info!("{new_notice}");
            *notice = Some(new_notice);
        }
        effect
    }

    fn on_poster_action(&mut self, action: PosterAction) -> ActionEffect {
        let Self {
            rt, msg_tx, mdl, ..
        } = self;
        let Model {
            library,
            settings,
            posters,
            ..
        } = mdl;
        match action {
            PosterAction::Load(key) => {
                let entry = match library.entry(key.uid) {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::warn!("Cannot load poster: {err}");
                        return ActionEffect::Unchanged;
                    }
                };
                if !posters.start_loading(key) {
                    // Already loading or loaded
                    return ActionEffect::Unchanged;
                }
                let loader = settings.poster_loader();
                let poster_cache_dir = settings.poster_cache_dir().map(Path::to_path_buf);
                let movie = entry.movie.clone();
                let msg_tx = (*msg_tx).clone();
                rt.spawn(async move {
                    let join_handle = tokio::task::spawn_blocking(move || {
                        load_poster_blocking(&loader, poster_cache_dir.as_deref(), &movie, key.size)
                    });
                    let poster = match JoinedTask::join(join_handle).await {
                        JoinedTask::Completed(Ok(poster)) => Some(poster),
                        JoinedTask::Completed(Err(err)) => {
                            log_poster_unavailable(key, &err);
                            None
                        }
                        JoinedTask::Cancelled => {
                            log::debug!("Loading poster {key:?} cancelled");
                            None
                        }
                        JoinedTask::Panicked(err) => {
                            log::error!("Loading poster {key:?} panicked: {err}");
                            None
                        }
                    };
                    let _ = msg_tx.emit_event(Event::PosterLoaded { key, poster });
                });
                ActionEffect::Changed
            }
        }
    }

    fn on_settings_action(&mut self, ctx: &Context, action: SettingsAction) -> ActionEffect {
        let Self {
            rt,
            mdl,
            settings_dir,
            ..
        } = self;
        match action {
            SettingsAction::UpdateFullscreen(fullscreen) => {
                if !mdl.settings.update_fullscreen(fullscreen) {
                    return ActionEffect::Unchanged;
                }
                ctx.send_viewport_cmd(ViewportCommand::Fullscreen(fullscreen));
                spawn_save_settings(rt, mdl.settings.clone(), settings_dir.to_path_buf());
                ActionEffect::Changed
            }
        }
    }

    fn on_event(&mut self, ctx: &Context, event: Event) {
        match event {
            Event::PosterLoaded { key, poster } => {
                self.mdl.posters.finish_loading(ctx, key, poster);
                ctx.request_repaint();
            }
        }
    }
}

fn log_poster_unavailable(key: PosterKey, err: &PosterUnavailable) {
    match err {
        PosterUnavailable::Missing => {
            log::debug!("No poster for movie {uid}", uid = key.uid);
        }
        PosterUnavailable::NotFound(_) | PosterUnavailable::Decode { .. } => {
            log::warn!("Poster of movie {uid} unavailable: {err}", uid = key.uid);
        }
    }
}

fn spawn_save_settings(
    rt: &tokio::runtime::Handle,
    settings: settings::State,
    settings_dir: PathBuf,
) {
    rt.spawn(async move {
        if let Err(err) = settings.save_spawn_blocking(settings_dir).await {
            log::error!("Failed to save settings: {err:#}");
        }
    });
}
