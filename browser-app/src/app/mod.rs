// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{path::PathBuf, sync::mpsc};

use eframe::{CreationContext, Frame};
use egui::{Context, Key};

use primeflix::{FeaturedGenre, desktop_app::library::Command};

mod message;
pub(crate) use self::message::{
    Action, Event, Message, MessageSender, NavigateAction, PosterAction, SettingsAction,
};

mod model;
pub(crate) use self::model::{Model, ModelMode};

mod update;
use self::update::UpdateContext;

mod render;
use self::render::RenderContext;

pub(crate) const WINDOW_TITLE: &str = "PRIMEFLIX 🎬";

/// UI data bindings
///
/// Stores user input and other mutable UI state that needs to be preserved
/// between frames.
#[derive(Debug, Default)]
struct UiData {
    search_input: String,
}

impl UiData {
    /// Put the genre label into the search input and search for it.
    fn search_featured_genre(&mut self, genre: FeaturedGenre) -> Command {
        genre.label().clone_into(&mut self.search_input);
        Command::Search(self.search_input.clone())
    }
}

#[expect(missing_debug_implementations)]
pub struct App {
    rt: tokio::runtime::Handle,

    msg_rx: mpsc::Receiver<Message>,
    msg_tx: MessageSender,

    mdl: Model,

    settings_dir: PathBuf,

    ui_data: UiData,
}

impl App {
    #[must_use]
    pub(crate) fn new(
        ctx: &CreationContext<'_>,
        rt: tokio::runtime::Handle,
        mdl: Model,
        settings_dir: PathBuf,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let msg_tx = MessageSender::new(ctx.egui_ctx.clone(), msg_tx);
        Self {
            rt,
            msg_rx,
            msg_tx,
            mdl,
            settings_dir,
            ui_data: Default::default(),
        }
    }

    fn update(&mut self) -> (&mpsc::Receiver<Message>, UpdateContext<'_>) {
        let Self {
            rt,
            msg_rx,
            msg_tx,
            mdl,
            settings_dir,
            ..
        } = self;
        let ctx = UpdateContext {
            rt,
            msg_tx,
            mdl,
            settings_dir,
        };
        (msg_rx, ctx)
    }

    fn render(&mut self) -> RenderContext<'_> {
        let Self {
            msg_tx,
            mdl,
            ui_data,
            ..
        } = self;
        RenderContext {
            msg_tx,
            mdl,
            ui_data,
        }
    }

    fn on_keyboard_input(&self, ctx: &Context) {
        let fullscreen = self.mdl.settings.fullscreen;
        let (escape, f11) = ctx.input(|i| (i.key_pressed(Key::Escape), i.key_pressed(Key::F11)));
        if escape && fullscreen {
            self.msg_tx
                .send_action(SettingsAction::UpdateFullscreen(false));
        } else if f11 {
            self.msg_tx
                .send_action(SettingsAction::UpdateFullscreen(!fullscreen));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, frm: &mut Frame) {
        self.on_keyboard_input(ctx);

        let (msg_rx, mut update_ctx) = self.update();
        let msg_count = msg_rx
            .try_iter()
            .map(|msg| {
                update_ctx.on_message(ctx, msg);
            })
            .count();
        if msg_count > 0 {
            log::debug!("Processed {msg_count} message(s) before rendering frame");
        }

        let mut render_ctx = self.render();
        render_ctx.render_frame(ctx, frm);
    }
}
