// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::HashMap, fmt, path::Path};

use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use primeflix::{
    FilePosterLoader, Movie, MovieUid, PosterImage, PosterLoader as _, PosterPath, PosterSize,
    PosterUnavailable, poster::preprocessed_poster_path,
};

const PLACEHOLDER_RGBA: [u8; 4] = [0x33, 0x33, 0x33, 0xff];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PosterKey {
    pub(crate) uid: MovieUid,
    pub(crate) size: PosterSize,
}

pub(crate) enum PosterTexture {
    Loading,
    Loaded(TextureHandle),
    Unavailable,
}

impl fmt::Debug for PosterTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading"),
            Self::Loaded(texture) => f.debug_tuple("Loaded").field(&texture.id()).finish(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// Textures of decoded posters.
///
/// Entries are never evicted. The catalog is small and fixed.
pub(crate) struct PosterCache {
    grid_placeholder: TextureHandle,
    detail_placeholder: TextureHandle,
    textures: HashMap<PosterKey, PosterTexture>,
}

impl PosterCache {
    #[must_use]
    pub(crate) fn new(ctx: &Context) -> Self {
        Self {
            grid_placeholder: load_placeholder_texture(ctx, PosterSize::GRID),
            detail_placeholder: load_placeholder_texture(ctx, PosterSize::DETAIL),
            textures: HashMap::new(),
        }
    }

    #[must_use]
    pub(crate) fn get(&self, key: PosterKey) -> Option<&PosterTexture> {
        self.textures.get(&key)
    }

    /// The texture for rendering, a placeholder until loaded.
    #[must_use]
    pub(crate) fn texture_or_placeholder(&self, key: PosterKey) -> &TextureHandle {
        match self.textures.get(&key) {
            Some(PosterTexture::Loaded(texture)) => texture,
            Some(PosterTexture::Loading | PosterTexture::Unavailable) | None => {
                self.placeholder(key.size)
            }
        }
    }

    #[must_use]
    fn placeholder(&self, size: PosterSize) -> &TextureHandle {
        if size == PosterSize::DETAIL {
            &self.detail_placeholder
        } else {
            &self.grid_placeholder
        }
    }

    /// Returns `false` if loading has already been started.
    pub(crate) fn start_loading(&mut self, key: PosterKey) -> bool {
        if self.textures.contains_key(&key) {
            return false;
        }
        self.textures.insert(key, PosterTexture::Loading);
        true
    }

    pub(crate) fn finish_loading(
        &mut self,
        ctx: &Context,
        key: PosterKey,
        poster: Option<PosterImage>,
    ) {
        let texture = poster.map_or(PosterTexture::Unavailable, |poster| {
            PosterTexture::Loaded(load_poster_texture(ctx, key, &poster))
        });
        self.textures.insert(key, texture);
    }
}

impl fmt::Debug for PosterCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosterCache")
            .field("textures", &self.textures)
            .finish_non_exhaustive()
    }
}

#[must_use]
fn load_placeholder_texture(ctx: &Context, size: PosterSize) -> TextureHandle {
    let placeholder = PosterImage::filled(size, PLACEHOLDER_RGBA);
    load_texture(ctx, format!("poster-placeholder-{size}"), &placeholder)
}

#[must_use]
fn load_poster_texture(ctx: &Context, key: PosterKey, poster: &PosterImage) -> TextureHandle {
    let name = format!("poster-{uid}-{size}", uid = key.uid, size = key.size);
    load_texture(ctx, name, poster)
}

#[must_use]
fn load_texture(ctx: &Context, name: String, poster: &PosterImage) -> TextureHandle {
    let PosterSize { width, height } = poster.size();
    let image = ColorImage::from_rgba_unmultiplied([width as usize, height as usize], poster.rgba());
    ctx.load_texture(name, image, TextureOptions::LINEAR)
}

/// Load a poster, preferring a pre-processed thumbnail.
///
/// Blocks the current thread while decoding.
pub(crate) fn load_poster_blocking(
    loader: &FilePosterLoader,
    poster_cache_dir: Option<&Path>,
    movie: &Movie,
    size: PosterSize,
) -> Result<PosterImage, PosterUnavailable> {
    if size == PosterSize::GRID
        && movie.image.is_some()
        && let Some(poster_cache_dir) = poster_cache_dir
    {
        let cached_path = preprocessed_poster_path(poster_cache_dir, movie);
        if cached_path.is_file() {
            let cached_path = PosterPath::new(cached_path.to_string_lossy().into_owned());
            match FilePosterLoader::default().load_poster(Some(&cached_path), size) {
                Ok(poster) => return Ok(poster),
                Err(err) => {
                    log::debug!("Ignoring pre-processed poster: {err}");
                }
            }
        }
    }
    loader.load_poster(movie.image.as_ref(), size)
}

#[cfg(test)]
mod tests;
