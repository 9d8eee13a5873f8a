// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Poster images of movies.
//!
//! Posters are optional. Every failure to provide one is reported as
//! [`PosterUnavailable`] and must never affect any other operation.

use std::{
    borrow::Cow,
    fmt, fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use image::{Rgba, RgbImage, RgbaImage, codecs::jpeg::JpegEncoder, imageops::FilterType};

use crate::{
    catalog::Catalog,
    movie::{Movie, MovieUid},
};

///////////////////////////////////////////////////////////////////////
// PosterPath
///////////////////////////////////////////////////////////////////////

/// The path of a poster image as recorded in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct PosterPath(Cow<'static, str>);

impl PosterPath {
    #[must_use]
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the file system path.
    ///
    /// A leading `~` is replaced by the home directory of the current
    /// user. Relative paths are resolved against `base_dir`, if given.
    #[must_use]
    pub fn resolve(&self, base_dir: Option<&Path>) -> PathBuf {
        let path = expand_home_dir(self.as_str());
        if path.is_absolute() {
            return path;
        }
        match base_dir {
            Some(base_dir) => base_dir.join(path),
            None => path,
        }
    }
}

impl AsRef<str> for PosterPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PosterPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn expand_home_dir(path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };
    if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR)) {
        // `~user` is not supported.
        return PathBuf::from(path);
    }
    let Some(base_dirs) = directories::BaseDirs::new() else {
        log::debug!("Home directory unknown, cannot expand {path}");
        return PathBuf::from(path);
    };
    let rest = rest.trim_start_matches(['/', std::path::MAIN_SEPARATOR]);
    base_dirs.home_dir().join(rest)
}

///////////////////////////////////////////////////////////////////////
// PosterSize
///////////////////////////////////////////////////////////////////////

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PosterSize {
    pub width: u32,
    pub height: u32,
}

impl PosterSize {
    /// Thumbnails in grids and lists.
    pub const GRID: Self = Self {
        width: 200,
        height: 300,
    };

    /// The enlarged poster of the selected movie.
    pub const DETAIL: Self = Self {
        width: 260,
        height: 390,
    };
}

impl fmt::Display for PosterSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { width, height } = self;
        write!(f, "{width}x{height}")
    }
}

///////////////////////////////////////////////////////////////////////
// PosterImage
///////////////////////////////////////////////////////////////////////

/// Decoded RGBA8 pixels of a poster.
#[derive(Clone, PartialEq, Eq)]
pub struct PosterImage(RgbaImage);

impl PosterImage {
    /// A single-colored image, e.g. as a placeholder.
    #[must_use]
    pub fn filled(size: PosterSize, rgba: [u8; 4]) -> Self {
        Self(RgbaImage::from_pixel(size.width, size.height, Rgba(rgba)))
    }

    #[must_use]
    pub fn size(&self) -> PosterSize {
        let (width, height) = self.0.dimensions();
        PosterSize { width, height }
    }

    #[must_use]
    pub fn rgba(&self) -> &[u8] {
        self.0.as_raw()
    }
}

// Omit the pixels
impl fmt::Debug for PosterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosterImage")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

///////////////////////////////////////////////////////////////////////
// PosterLoader
///////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
pub enum PosterUnavailable {
    #[error("no poster")]
    Missing,

    #[error("poster file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to decode poster file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub trait PosterLoader {
    /// Load and scale the poster to the requested size.
    fn load_poster(
        &self,
        path: Option<&PosterPath>,
        size: PosterSize,
    ) -> Result<PosterImage, PosterUnavailable>;
}

/// Loads posters from the local file system.
#[derive(Debug, Clone, Default)]
pub struct FilePosterLoader {
    base_dir: Option<PathBuf>,
}

impl FilePosterLoader {
    /// Relative poster paths are resolved against `base_dir`.
    #[must_use]
    pub const fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    #[must_use]
    pub fn resolve(&self, path: &PosterPath) -> PathBuf {
        path.resolve(self.base_dir())
    }
}

impl PosterLoader for FilePosterLoader {
    fn load_poster(
        &self,
        path: Option<&PosterPath>,
        size: PosterSize,
    ) -> Result<PosterImage, PosterUnavailable> {
        let path = path.ok_or(PosterUnavailable::Missing)?;
        let file_path = self.resolve(path);
        if !file_path.is_file() {
            return Err(PosterUnavailable::NotFound(file_path));
        }
        log::debug!("Loading poster {} ({size})", file_path.display());
        let image = match image::open(&file_path) {
            Ok(image) => image,
            Err(source) => {
                return Err(PosterUnavailable::Decode {
                    path: file_path,
                    source,
                });
            }
        };
        let rgba_image = image
            .resize_exact(size.width, size.height, FilterType::Lanczos3)
            .into_rgba8();
        Ok(PosterImage(rgba_image))
    }
}

///////////////////////////////////////////////////////////////////////
// Pre-processing
///////////////////////////////////////////////////////////////////////

const PREPROCESSED_FILE_EXTENSION: &str = "jpg";

const PREPROCESSED_JPEG_QUALITY: u8 = 90;

/// File name stem of a pre-processed poster.
///
/// Derived from the title and year, e.g. `Bangalore_Days_2014`.
/// Only alphanumeric characters, `_`, and `-` are retained.
#[must_use]
pub fn poster_file_stem(movie: &Movie) -> String {
    let Movie { title, year, .. } = movie;
    format!("{title}_{year}", title = title.trim().replace(' ', "_"))
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-'))
        .collect()
}

/// Location of the pre-processed poster of a movie within `dest_dir`.
#[must_use]
pub fn preprocessed_poster_path(dest_dir: &Path, movie: &Movie) -> PathBuf {
    dest_dir.join(format!(
        "{stem}.{PREPROCESSED_FILE_EXTENSION}",
        stem = poster_file_stem(movie)
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum PreprocessFailure {
    #[error(transparent)]
    Unavailable(#[from] PosterUnavailable),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Default)]
pub struct PreprocessReport {
    /// Newly written files.
    pub processed: Vec<(MovieUid, PathBuf)>,

    /// Existing files that have not been overwritten.
    pub reused: Vec<(MovieUid, PathBuf)>,

    pub failed: Vec<(MovieUid, PreprocessFailure)>,
}

/// Render the posters of all catalog movies as JPEG files into `dest_dir`.
///
/// Existing files are only replaced if `overwrite` is set. Failures are
/// collected per movie. Only I/O errors that affect `dest_dir` itself
/// abort the operation.
pub fn preprocess_posters(
    catalog: &Catalog,
    loader: &impl PosterLoader,
    dest_dir: &Path,
    size: PosterSize,
    overwrite: bool,
) -> io::Result<PreprocessReport> {
    fs::create_dir_all(dest_dir)?;
    let mut report = PreprocessReport::default();
    for entry in catalog {
        let uid = entry.uid;
        let out_path = preprocessed_poster_path(dest_dir, &entry.movie);
        if entry.movie.image.is_some() && !overwrite && out_path.is_file() {
            log::debug!("Reusing {}", out_path.display());
            report.reused.push((uid, out_path));
            continue;
        }
        match preprocess_poster(&entry.movie, loader, &out_path, size) {
            Ok(()) => {
                log::debug!("Wrote {}", out_path.display());
                report.processed.push((uid, out_path));
            }
            Err(err) => {
                log::warn!(
                    "Failed to pre-process poster of {title}: {err}",
                    title = entry.movie.title
                );
                report.failed.push((uid, err));
            }
        }
    }
    log::info!(
        "Pre-processed {processed} poster(s), reused {reused}, failed {failed}",
        processed = report.processed.len(),
        reused = report.reused.len(),
        failed = report.failed.len(),
    );
    Ok(report)
}

fn preprocess_poster(
    movie: &Movie,
    loader: &impl PosterLoader,
    out_path: &Path,
    size: PosterSize,
) -> Result<(), PreprocessFailure> {
    let PosterImage(rgba_image) = loader.load_poster(movie.image.as_ref(), size)?;
    // JPEG has no alpha channel
    let rgb_image = image::DynamicImage::ImageRgba8(rgba_image).into_rgb8();
    write_jpeg(&rgb_image, out_path).map_err(|source| PreprocessFailure::Write {
        path: out_path.to_path_buf(),
        source,
    })
}

fn write_jpeg(rgb_image: &RgbImage, path: &Path) -> image::ImageResult<()> {
    let mut writer = io::BufWriter::new(fs::File::create(path)?);
    let encoder = JpegEncoder::new_with_quality(&mut writer, PREPROCESSED_JPEG_QUALITY);
    rgb_image.write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
