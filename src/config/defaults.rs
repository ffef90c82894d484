// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for site configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

/// Language used when no query parameter, stored preference, or site setting
/// determines one.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// The root-path redirect is opt-in: a site must enable it explicitly.
pub const DEFAULT_REDIRECT_ENABLED: bool = false;

/// How long a stored language preference stays valid, in days.
pub const DEFAULT_PREFERENCE_TTL_DAYS: i64 = 30;
