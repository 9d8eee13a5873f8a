// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Application state that is independent of any particular UI technology.

use std::ops::{Add, AddAssign};

use tokio::task::JoinHandle;

/// Catalog browsing and favourites
pub mod library;

/// Settings management
pub mod settings;

/// Effect of an action on the observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionEffect {
    /// The state has not been modified.
    #[default]
    Unchanged,

    /// The state might have been modified, e.g. by replacing it with
    /// an equal value.
    MaybeChanged,

    /// The state has been modified.
    Changed,
}

impl ActionEffect {
    #[must_use]
    pub const fn changed_if(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }

    #[must_use]
    pub const fn is_unchanged(self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl Add for ActionEffect {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Changed, _) | (_, Self::Changed) => Self::Changed,
            (Self::MaybeChanged, _) | (_, Self::MaybeChanged) => Self::MaybeChanged,
            (Self::Unchanged, Self::Unchanged) => Self::Unchanged,
        }
    }
}

impl AddAssign for ActionEffect {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[derive(Debug)]
pub enum JoinedTask<T> {
    Completed(T),
    Cancelled,
    Panicked(anyhow::Error),
}

impl<T> JoinedTask<T> {
    pub async fn join(handle: JoinHandle<T>) -> Self {
        match handle.await {
            Ok(output) => Self::Completed(output),
            Err(err) => {
                if err.is_cancelled() {
                    Self::Cancelled
                } else {
                    debug_assert!(err.is_panic());
                    Self::Panicked(err.into())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
