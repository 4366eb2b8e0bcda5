// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! Environment and configuration utilities.

use chrono::Locale;
use std::env;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Locale used for timestamps when the environment names none, or names
/// one that has no locale data.
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

/// Returns the base URL used to reach the GitHub REST API.
///
/// By default, this is the public GitHub API, unless the user has defined
/// `$GITHUB_API_URL` in the environment, which is handy for GitHub Enterprise
/// installations. Any trailing slash is removed so paths can be appended.
///
/// # Examples
///
/// `api_url` will return the public API if `$GITHUB_API_URL` is not set:
///
/// ```
/// use github_activity::conf::api_url;
/// # use temp_env::with_var_unset;
/// # with_var_unset("GITHUB_API_URL", || {
/// assert_eq!(api_url(), "https://api.github.com");
/// # });
/// ```
///
/// In this example, `$GITHUB_API_URL` was set to `https://github.example.com/api/v3/`:
///
/// ```
/// use github_activity::conf::api_url;
/// # use temp_env::with_var;
/// # with_var("GITHUB_API_URL", Some("https://github.example.com/api/v3/"), || {
/// assert_eq!(api_url(), "https://github.example.com/api/v3");
/// # });
/// ```
pub fn api_url() -> String {
    let url = env::var("GITHUB_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    url.trim().trim_end_matches('/').to_string()
}

/// Returns the locale used to format timestamps.
///
/// The locale is read the way the C library reads `LC_TIME`: the first
/// non-empty variable among `$LC_ALL`, `$LC_TIME` and `$LANG` decides.
/// [`DEFAULT_LOCALE`] is used if none is set, or if the one that is set
/// names the C locale or a locale that is not known.
///
/// # Examples
///
/// ```
/// use chrono::Locale;
/// use github_activity::conf::locale;
/// # use temp_env::with_vars;
/// # with_vars([("LC_ALL", None), ("LC_TIME", Some("de_DE.UTF-8")), ("LANG", Some("en_GB.UTF-8"))], || {
/// assert_eq!(locale(), Locale::de_DE);
/// # });
/// ```
pub fn locale() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .and_then(|value| parse_locale(&value))
        .unwrap_or(DEFAULT_LOCALE)
}

/// Parses a POSIX locale name such as `de_DE.UTF-8` or `sr_RS@latin`.
///
/// Returns `None` for the C and POSIX locales and for names with no
/// locale data.
pub fn parse_locale(name: &str) -> Option<Locale> {
    let name = name.trim();
    let (base, modifier) = match name.split_once('@') {
        Some((base, modifier)) => (base, Some(modifier)),
        None => (name, None),
    };
    let base = base.split('.').next().unwrap_or_default();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    let full = match modifier {
        Some(modifier) => format!("{base}@{modifier}"),
        None => base.to_string(),
    };
    Locale::try_from(full.as_str())
        .or_else(|_| Locale::try_from(base))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env::{with_var, with_var_unset, with_vars};

    #[test]
    fn it_defaults_to_the_public_api() {
        with_var_unset("GITHUB_API_URL", || {
            assert_eq!(api_url(), DEFAULT_API_URL);
        });
    }

    #[test]
    fn it_ignores_an_empty_override() {
        with_var("GITHUB_API_URL", Some("  "), || {
            assert_eq!(api_url(), DEFAULT_API_URL);
        });
    }

    #[test]
    fn it_trims_trailing_slashes() {
        with_var("GITHUB_API_URL", Some("http://localhost:8080//"), || {
            assert_eq!(api_url(), "http://localhost:8080");
        });
    }

    #[test]
    fn it_parses_locale_names() {
        assert_eq!(parse_locale("de_DE.UTF-8"), Some(Locale::de_DE));
        assert_eq!(parse_locale("fr_FR"), Some(Locale::fr_FR));
        assert_eq!(parse_locale("en_US.utf8"), Some(Locale::en_US));
    }

    #[test]
    fn it_rejects_the_c_locale_and_unknown_names() {
        for name in ["", "C", "C.UTF-8", "POSIX", "xx_YY"] {
            assert_eq!(parse_locale(name), None, "{name}");
        }
    }

    #[test]
    fn it_prefers_lc_all_to_lc_time_and_lang() {
        with_vars(
            [
                ("LC_ALL", Some("fr_FR.UTF-8")),
                ("LC_TIME", Some("de_DE.UTF-8")),
                ("LANG", Some("ja_JP.UTF-8")),
            ],
            || assert_eq!(locale(), Locale::fr_FR),
        );
    }

    #[test]
    fn it_falls_back_to_lang() {
        with_vars(
            [
                ("LC_ALL", None),
                ("LC_TIME", None),
                ("LANG", Some("de_DE.UTF-8")),
            ],
            || assert_eq!(locale(), Locale::de_DE),
        );
    }

    #[test]
    fn it_defaults_to_us_english() {
        with_vars(
            [("LC_ALL", None::<&str>), ("LC_TIME", None), ("LANG", None)],
            || assert_eq!(locale(), DEFAULT_LOCALE),
        );
        with_vars(
            [("LC_ALL", Some("C")), ("LC_TIME", Some("de_DE.UTF-8")), ("LANG", None)],
            || assert_eq!(locale(), DEFAULT_LOCALE),
        );
    }
}
