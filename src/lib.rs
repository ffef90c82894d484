// SPDX-License-Identifier: MPL-2.0
//! `blog_lang` decides which language a visitor of a multi-language static
//! blog should see, and remembers that choice.
//!
//! It is glue, not a framework: a fixed registry of bundled translation
//! dictionaries, a three-tier fallback resolver that always backfills from
//! the English baseline, a single persisted preference with an expiry, and a
//! one-shot redirect from the root path to the language-prefixed path.
//!
//! # Overview
//!
//! ```no_run
//! use blog_lang::registry::LocaleRegistry;
//! use blog_lang::resolver::resolve;
//!
//! let registry = LocaleRegistry::from_embedded()?;
//! let dictionary = resolve(&registry, Some("zh"));
//! assert_eq!(dictionary["NAV"]["SEARCH"], "搜索");
//! # Ok::<(), blog_lang::error::Error>(())
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod redirect;
pub mod registry;
pub mod resolver;
pub mod store;
