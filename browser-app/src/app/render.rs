// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use eframe::Frame;
use egui::{
    Align, Button, CentralPanel, Color32, Context, Grid, Image, Key, Layout, RichText, ScrollArea,
    Sense, SidePanel, TextEdit, TopBottomPanel, Vec2, load::SizedTexture,
};

use primeflix::{
    CatalogEntry, FeaturedGenre, MovieUid, PosterSize, SEARCH_PLACEHOLDER,
    desktop_app::library::{Command, Library, Listing},
};

use crate::ui::{
    PosterCache, PosterKey, detail_subtitle, favourite_line, featured_genre_color,
    listing_heading, tile_caption,
};

use super::{MessageSender, Model, ModelMode, NavigateAction, PosterAction, UiData};

const ACCENT_COLOR: Color32 = Color32::from_rgb(0xe5, 0x09, 0x14);

const SEARCH_INPUT_WIDTH: f32 = 240.0;

const DETAIL_PANEL_WIDTH: f32 = 300.0;

// In contrast to `UpdateContext` the model is immutable during rendering.
// Only the `UiData` remains mutable.
pub(super) struct RenderContext<'a> {
    pub(super) msg_tx: &'a MessageSender,
    pub(super) mdl: &'a Model,
    pub(super) ui_data: &'a mut UiData,
}

impl RenderContext<'_> {
    pub(super) fn render_frame(&mut self, ctx: &Context, _frm: &mut Frame) {
        let Self {
            msg_tx,
            mdl,
            ui_data,
        } = self;

        TopBottomPanel::top("top-panel").show(ctx, |ui| {
            render_top_panel(ui, ui_data, msg_tx, mdl);
        });

        TopBottomPanel::bottom("bottom-panel").show(ctx, |ui| {
            render_bottom_panel(ui, mdl);
        });

        if let Some(selected) = mdl.library.selection() {
            SidePanel::right("detail-panel")
                .resizable(false)
                .exact_width(DETAIL_PANEL_WIDTH)
                .show(ctx, |ui| {
                    render_detail_panel(ui, msg_tx, &mdl.posters, selected);
                });
        }

        CentralPanel::default().show(ctx, |ui| {
            render_central_panel(ui, msg_tx, mdl);
        });
    }
}

fn render_top_panel(ui: &mut egui::Ui, ui_data: &mut UiData, msg_tx: &MessageSender, mdl: &Model) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("PRIMEFLIX").strong().color(ACCENT_COLOR));
        for (label, action) in [
            ("Home", NavigateAction::Home),
            ("Browse", NavigateAction::Browse),
            ("My List", NavigateAction::MyList),
            ("More", NavigateAction::More),
        ] {
            let selected = is_navigation_active(&mdl.mode, action);
            if ui.add(Button::new(label).selected(selected)).clicked() {
                msg_tx.send_action(action);
            }
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let search_clicked = ui.button("Search").clicked();
            let search_response = ui.add(
                TextEdit::singleline(&mut ui_data.search_input)
                    .hint_text(SEARCH_PLACEHOLDER)
                    .desired_width(SEARCH_INPUT_WIDTH),
            );
            let return_pressed =
                search_response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if search_clicked || return_pressed {
                msg_tx.send_action(Command::Search(ui_data.search_input.clone()));
            }
        });
    });
    ui.horizontal_wrapped(|ui| {
        for genre in FeaturedGenre::all() {
            let text = RichText::new(genre.label()).strong().color(Color32::WHITE);
            let button = Button::new(text).fill(featured_genre_color(genre));
            if ui.add(button).clicked() {
                msg_tx.send_action(ui_data.search_featured_genre(genre));
            }
        }
    });
}

fn is_navigation_active(mode: &ModelMode, action: NavigateAction) -> bool {
    match action {
        NavigateAction::Home => matches!(mode, ModelMode::Home),
        NavigateAction::Browse => matches!(mode, ModelMode::Listing(Listing::Browse { .. })),
        NavigateAction::MyList => matches!(mode, ModelMode::Listing(Listing::Favourites { .. })),
        NavigateAction::More => matches!(mode, ModelMode::More),
    }
}

fn render_bottom_panel(ui: &mut egui::Ui, mdl: &Model) {
    ui.horizontal(|ui| {
        if let Some(notice) = &mdl.notice {
            ui.label(notice.to_string());
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(format!(
                "Favourites: {count}",
                count = mdl.library.favourites().len()
            ));
        });
    });
}

fn render_detail_panel(
    ui: &mut egui::Ui,
    msg_tx: &MessageSender,
    posters: &PosterCache,
    selected: &CatalogEntry,
) {
    let CatalogEntry { uid, movie } = selected;
    ui.vertical_centered(|ui| {
        render_poster(
            ui,
            msg_tx,
            posters,
            PosterKey {
                uid: *uid,
                size: PosterSize::DETAIL,
            },
        );
        ui.heading(movie.title.as_str());
        ui.label(detail_subtitle(movie));
        ui.label(movie.genres_label());
        ui.add_space(8.0);
        let add_button =
            Button::new(RichText::new("Add to favourites").color(Color32::WHITE)).fill(ACCENT_COLOR);
        if ui.add(add_button).clicked() {
            msg_tx.send_action(Command::AddToFavourites(*uid));
        }
    });
}

fn render_central_panel(ui: &mut egui::Ui, msg_tx: &MessageSender, mdl: &Model) {
    let Model {
        library,
        settings,
        mode,
        posters,
        ..
    } = mdl;
    match mode {
        ModelMode::Home => {
            ui.heading("Welcome to PRIMEFLIX");
            ui.label("Search for a title or pick a genre to get started.");
            ui.label(format!(
                "{movie_count} movies in {genre_count} genres",
                movie_count = library.catalog().len(),
                genre_count = library.catalog().genres().len(),
            ));
        }
        ModelMode::More => {
            ui.heading("About PRIMEFLIX");
            ui.label("A small catalog of Indian movies for browsing by title and genre.");
            ui.label("Favourites are kept until the application is closed.");
        }
        ModelMode::Listing(listing) => {
            ui.heading(listing_heading(listing));
            match listing {
                Listing::Browse { movies } => {
                    let columns = settings.browse_columns;
                    render_poster_grid(ui, msg_tx, library, posters, movies, columns);
                }
                Listing::Favourites { movies } => {
                    render_favourites(ui, msg_tx, library, movies);
                }
                Listing::Search { movies, .. } | Listing::Genre { movies, .. } => {
                    if ui.button("Add Selected to Favourites").clicked() {
                        msg_tx.send_action(Command::AddSelectionToFavourites);
                    }
                    render_result_table(ui, msg_tx, library, movies);
                }
            }
        }
    }
}

fn listed_entries<'a>(
    library: &'a Library,
    movies: &'a [MovieUid],
) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
    movies.iter().filter_map(|uid| library.entry(*uid).ok())
}

fn is_selected(library: &Library, uid: MovieUid) -> bool {
    library.selection().is_some_and(|selected| selected.uid == uid)
}

fn render_poster_grid(
    ui: &mut egui::Ui,
    msg_tx: &MessageSender,
    library: &Library,
    posters: &PosterCache,
    movies: &[MovieUid],
    columns: usize,
) {
    let columns = columns.max(1);
    ScrollArea::vertical().show(ui, |ui| {
        Grid::new("poster-grid")
            .num_columns(columns)
            .spacing([16.0, 16.0])
            .show(ui, |ui| {
                for (index, entry) in listed_entries(library, movies).enumerate() {
                    ui.vertical(|ui| {
                        let key = PosterKey {
                            uid: entry.uid,
                            size: PosterSize::GRID,
                        };
                        let poster_response = render_poster(ui, msg_tx, posters, key)
                            .on_hover_text(entry.movie.title.as_str());
                        let title_response = ui.add(
                            Button::new(RichText::new(&entry.movie.title).strong())
                                .selected(is_selected(library, entry.uid))
                                .frame(false),
                        );
                        ui.label(tile_caption(&entry.movie));
                        if poster_response.clicked() || title_response.clicked() {
                            msg_tx.send_action(Command::SelectMovie(entry.uid));
                        }
                    });
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    });
}

fn render_favourites(
    ui: &mut egui::Ui,
    msg_tx: &MessageSender,
    library: &Library,
    movies: &[MovieUid],
) {
    if movies.is_empty() {
        ui.label("You have no favourites yet!");
        return;
    }
    ScrollArea::vertical().show(ui, |ui| {
        for entry in listed_entries(library, movies) {
            let line = Button::new(favourite_line(&entry.movie))
                .selected(is_selected(library, entry.uid))
                .frame(false);
            if ui.add(line).clicked() {
                msg_tx.send_action(Command::SelectMovie(entry.uid));
            }
        }
    });
}

fn render_result_table(
    ui: &mut egui::Ui,
    msg_tx: &MessageSender,
    library: &Library,
    movies: &[MovieUid],
) {
    ScrollArea::both().show(ui, |ui| {
        Grid::new("result-table")
            .num_columns(4)
            .spacing([40.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                for heading in ["Title", "Year", "Rating", "Genres"] {
                    ui.strong(heading);
                }
                ui.end_row();
                for entry in listed_entries(library, movies) {
                    let title = Button::new(entry.movie.title.as_str())
                        .selected(is_selected(library, entry.uid))
                        .frame(false);
                    if ui.add(title).clicked() {
                        msg_tx.send_action(Command::SelectMovie(entry.uid));
                    }
                    ui.label(entry.movie.year.to_string());
                    ui.label(entry.movie.rating.to_string());
                    ui.label(entry.movie.genres_label());
                    ui.end_row();
                }
            });
    });
}

/// Render the poster texture or a placeholder while loading.
fn render_poster(
    ui: &mut egui::Ui,
    msg_tx: &MessageSender,
    posters: &PosterCache,
    key: PosterKey,
) -> egui::Response {
    if posters.get(key).is_none() {
        msg_tx.send_action(PosterAction::Load(key));
    }
    let texture = posters.texture_or_placeholder(key);
    let size = Vec2::new(key.size.width as f32, key.size.height as f32);
    ui.add(Image::new(SizedTexture::new(texture.id(), size)).sense(Sense::click()))
}
