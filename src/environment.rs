// SPDX-License-Identifier: MPL-2.0
//! Capability interface over the hosting page environment.
//!
//! The redirect logic only needs four things from its host: to know whether
//! it is running interactively at all, to read query parameters, and to read
//! and set the current navigation path. Keeping those behind a trait lets
//! the same logic run headlessly in tests.

/// The hosting environment's navigation and query capabilities.
pub trait Environment {
    /// Whether the code runs in an interactive, page-like context.
    /// When false, every entry point is a no-op.
    fn is_interactive(&self) -> bool;

    /// Value of a query parameter in the current URL, if present.
    fn query_param(&self, name: &str) -> Option<String>;

    /// The current navigation path, e.g. `/` or `/about`.
    fn current_path(&self) -> String;

    /// Navigates to `path` (a full navigation, not an in-app transition).
    fn navigate(&mut self, path: &str);
}

/// Non-interactive environment: every query is empty, navigation is ignored.
///
/// Useful for server-side rendering paths where the language logic must be
/// callable but must do nothing.
#[derive(Debug, Default)]
pub struct Headless;

impl Environment for Headless {
    fn is_interactive(&self) -> bool {
        false
    }

    fn query_param(&self, _name: &str) -> Option<String> {
        None
    }

    fn current_path(&self) -> String {
        String::new()
    }

    fn navigate(&mut self, _path: &str) {}
}
