// SPDX-FileCopyrightText: Copyright (C) 2018-2025 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Check that a string is non-empty and free of leading/trailing whitespace.
#[must_use]
pub fn is_trimmed_non_empty(s: &str) -> bool {
    !s.is_empty() && s.trim() == s
}

/// Case-insensitive substring match.
///
/// The `needle` is expected to be lowercase already. Only the
/// `haystack` is converted.
#[must_use]
pub fn contains_lowercase(haystack: &str, lowercase_needle: &str) -> bool {
    debug_assert_eq!(lowercase_needle, lowercase_needle.to_lowercase());
    haystack.to_lowercase().contains(lowercase_needle)
}
