// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::mpsc;

use egui::Context;

use primeflix::{PosterImage, desktop_app::library::Command};

use crate::{NoReceiverForEvent, ui::PosterKey};

#[allow(missing_debug_implementations)]
struct NoReceiverForMessage(Message);

#[allow(missing_debug_implementations)]
#[derive(Clone)]
pub(crate) struct MessageSender {
    ctx: Context,
    msg_tx: mpsc::Sender<Message>,
}

impl MessageSender {
    pub(crate) const fn new(ctx: Context, msg_tx: mpsc::Sender<Message>) -> Self {
        Self { ctx, msg_tx }
    }

    pub(crate) fn send_action<T>(&self, action: T)
    where
        T: Into<Action>,
    {
        if let Err(NoReceiverForMessage(msg)) = self.send_message(Message::Action(action.into())) {
            log::warn!("No receiver for action message: {msg:?}");
        }
    }

    pub(crate) fn emit_event<T>(&self, event: T) -> Result<(), NoReceiverForEvent>
    where
        T: Into<Event>,
    {
        if let Err(NoReceiverForMessage(msg)) = self.send_message(Message::Event(event.into())) {
            log::warn!("No receiver for event message: {msg:?}");
            return Err(NoReceiverForEvent);
        }
        Ok(())
    }

    fn send_message(&self, msg: Message) -> Result<(), NoReceiverForMessage> {
        self.msg_tx.send(msg).map_err(|err| {
            log::warn!("Failed to send message: {err}");
            NoReceiverForMessage(err.0)
        })?;
        // Queued messages are consumed before rendering the next frame.
        self.ctx.request_repaint();
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) enum Message {
    Action(Action),
    Event(Event),
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Event> for Message {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

#[derive(Debug)]
pub(crate) enum Action {
    Navigate(NavigateAction),
    Library(Command),
    Poster(PosterAction),
    Settings(SettingsAction),
}

impl From<NavigateAction> for Action {
    fn from(action: NavigateAction) -> Self {
        Self::Navigate(action)
    }
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        Self::Library(command)
    }
}

impl From<PosterAction> for Action {
    fn from(action: PosterAction) -> Self {
        Self::Poster(action)
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Self::Settings(action)
    }
}

/// Switch between the pages of the top panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigateAction {
    Home,
    Browse,
    MyList,
    More,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum PosterAction {
    /// Decode the poster in the background unless already loaded.
    Load(PosterKey),
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum SettingsAction {
    UpdateFullscreen(bool),
}

/// App-level event
///
/// Not cloneable to prevent unintended storage. Notifications are
/// supposed to be ephemeral and should disappear after being processed.
#[derive(Debug)]
pub(crate) enum Event {
    PosterLoaded {
        key: PosterKey,
        poster: Option<PosterImage>,
    },
}
