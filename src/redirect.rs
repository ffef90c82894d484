// SPDX-License-Identifier: MPL-2.0
//! Root-path language redirect and per-page locale initialization.
//!
//! [`redirect_user_lang`] runs once on an initial page load. It decides the
//! effective language (URL query > stored preference > configured default),
//! refreshes the stored preference, and navigates to the language-prefixed
//! path. [`init_locale`] runs on generic page loads and pushes the resolved
//! language code and dictionary into the host application through two
//! explicit sink interfaces, so nothing here couples to a UI framework.

use crate::config::SiteConfig;
use crate::environment::Environment;
use crate::registry::{Dictionary, LocaleRegistry};
use crate::resolver::resolve;
use crate::store::{KvStorage, PreferenceStore};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// A 2-letter language tag with an optional 2-letter region, found anywhere
/// in the token (first match wins).
static LANG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]{2}(?:-[a-zA-Z]{2})?").expect("valid pattern"));

/// Receives the effective language code when a page initializes.
pub trait LanguageCodeSink {
    fn set_language_code(&mut self, code: &str);
}

/// Receives the effective dictionary when a page initializes.
pub trait DictionarySink {
    fn set_dictionary(&mut self, dictionary: Dictionary);
}

/// Extracts the language prefix from a `lang:page-id` site identifier.
///
/// Returns `None` when the identifier carries no prefix.
pub fn extract_lang_prefix(site_id: &str) -> Option<&str> {
    site_id.split_once(':').map(|(prefix, _)| prefix)
}

/// Redirects the visitor to their preferred language path.
///
/// Runs only in an interactive environment, with the site-level redirect
/// enabled, on the root path; otherwise it is a no-op. The language is
/// determined by, in order: the `locale` query parameter, the `lang` query
/// parameter, the stored preference, the configured default — first
/// non-empty wins. Whenever the determined language differs from the stored
/// value (including the first visit, where nothing is stored), the
/// preference is refreshed.
///
/// `page_id` may be a comma-separated list of site identifiers; the first
/// entry whose extracted prefix (via `extract_prefix`) equals the target
/// language wins the dispatch. Either way the final path is `/{lang}`.
pub fn redirect_user_lang<E, S>(
    env: &mut E,
    store: &mut PreferenceStore<S>,
    config: &SiteConfig,
    page_id: &str,
    extract_prefix: impl Fn(&str) -> Option<String>,
) where
    E: Environment,
    S: KvStorage,
{
    if !env.is_interactive() || !config.redirect_enabled {
        return;
    }
    if env.current_path() != "/" {
        return;
    }

    let stored = store.load();
    let lang = env
        .query_param("locale")
        .filter(|v| !v.is_empty())
        .or_else(|| env.query_param("lang").filter(|v| !v.is_empty()))
        .or_else(|| stored.clone())
        .unwrap_or_else(|| config.default_language.clone());

    if Some(&lang) != stored.as_ref() {
        store.save(&lang, config.preference_ttl_days);
    }

    if page_id.contains(',') {
        for site_id in page_id.split(',') {
            if extract_prefix(site_id).as_deref() == Some(lang.as_str()) {
                debug!("redirecting to matched multi-site language path /{lang}");
                env.navigate(&format!("/{lang}"));
                return;
            }
        }
    }

    debug!("redirecting to language path /{lang}");
    env.navigate(&format!("/{lang}"));
}

/// Initializes the page's language state from the router and URL.
///
/// The router-provided locale token is limited to `en`/`zh`, mapped to their
/// full codes; a `locale` or `lang` query parameter overrides it. When a
/// language tag can be extracted from the winning token, both sinks are
/// invoked; otherwise nothing happens.
pub fn init_locale<E: Environment>(
    env: &E,
    registry: &LocaleRegistry,
    router_locale: Option<&str>,
    lang_sink: &mut dyn LanguageCodeSink,
    dict_sink: &mut dyn DictionarySink,
) {
    if !env.is_interactive() {
        return;
    }

    let path_locale = match router_locale {
        Some("en") => Some("en-US"),
        Some("zh") => Some("zh-CN"),
        _ => None,
    };

    let query_lang = env
        .query_param("locale")
        .filter(|v| !v.is_empty())
        .or_else(|| env.query_param("lang").filter(|v| !v.is_empty()))
        .or_else(|| path_locale.map(str::to_string));

    let Some(token) = query_lang else {
        return;
    };
    let Some(tag) = LANG_TAG.find(&token).map(|m| m.as_str().to_string()) else {
        return;
    };

    debug!("initializing page locale to {tag}");
    lang_sink.set_language_code(&tag);
    dict_sink.set_dictionary(resolve(registry, Some(&tag)));
}
