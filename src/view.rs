// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! Draws viewable objects into a terminal window.

use crate::conf::DEFAULT_LOCALE;
use crate::event::{Action, Event, EventKind};
use chrono::{DateTime, Locale, TimeZone};
use colored::{Color, Colorize};
use serde_json::Value;

/// Format used to display timestamps: the locale's date, then its time.
pub const TIMESTAMP_FORMAT: &str = "%x %X";

/// View renderer options.
#[derive(Debug)]
pub struct ViewOptions {
    color: bool,
    locale: Locale,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            color: true,
            locale: DEFAULT_LOCALE,
        }
    }
}

impl ViewOptions {
    /// Incrementally builds a new set of view options.
    ///
    /// # Examples
    ///
    /// ```
    /// use github_activity::view::ViewOptions;
    /// let opts = ViewOptions::build()
    ///     .color(false)
    ///     .locale(chrono::Locale::de_DE)
    ///     .build();
    /// ```
    pub fn build() -> ViewOptionsBuilder {
        ViewOptionsBuilder::default()
    }
}

/// A builder for view options.
///
/// You probably don't want to use this directly; call [`ViewOptions::build()`]
/// and construct it incrementally instead.
#[derive(Debug)]
#[must_use]
pub struct ViewOptionsBuilder {
    color: bool,
    locale: Locale,
}

impl Default for ViewOptionsBuilder {
    fn default() -> Self {
        let ViewOptions { color, locale } = ViewOptions::default();
        Self { color, locale }
    }
}

impl ViewOptionsBuilder {
    /// Sets the "color" option to true or false.
    ///
    /// Even when true, colors are only emitted if the terminal supports them.
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Sets the locale timestamps are formatted in.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Finalizes the [`ViewOptions`].
    pub fn build(self) -> ViewOptions {
        ViewOptions {
            color: self.color,
            locale: self.locale,
        }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    ///
    /// Returns `None` if there is nothing worth displaying for the item.
    fn view(&self, opts: &ViewOptions) -> Option<String>;
}

/// Formats a timestamp for display in `locale`, in the time zone it carries.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .format_localized(TIMESTAMP_FORMAT, locale)
        .to_string()
}

/// The color an event is displayed in, keyed by its kind.
///
/// `None` means the event is displayed in bold instead.
pub fn color_for(kind: &EventKind) -> Option<Color> {
    match kind {
        EventKind::Push { .. } => Some(Color::Green),
        EventKind::Issues { action: Action::Closed, .. } => Some(Color::Red),
        EventKind::Issues { .. } => Some(Color::Yellow),
        EventKind::PullRequest { action: Action::Closed, .. } => Some(Color::Magenta),
        EventKind::PullRequest { .. } => Some(Color::Cyan),
        EventKind::Watch => Some(Color::Blue),
        EventKind::Fork => Some(Color::BrightBlack),
        EventKind::Create { .. } => Some(Color::Blue),
        EventKind::Other(_) => None,
    }
}

impl Event {
    /// The plain, uncolored text describing the event, in local time
    /// formatted for `locale`.
    ///
    /// Issues and pull requests that were neither opened nor closed have no
    /// description.
    pub fn describe(&self, locale: Locale) -> Option<String> {
        let who = self.actor();
        let repo = self.repo();
        let at = format_timestamp(&self.created_local(), locale);

        let text = match self.kind() {
            EventKind::Push { commits } => {
                format!("🔄 {who} pushed {commits} commit(s) to {repo} at {at}")
            }
            EventKind::Issues { action, title } => match action {
                Action::Opened => {
                    format!("📖 {who} opened an issue in {repo}: \"{title}\" at {at}")
                }
                Action::Closed => {
                    format!("🔒 {who} closed an issue in {repo}: \"{title}\" at {at}")
                }
                Action::Other(_) => return None,
            },
            EventKind::PullRequest { action, title } => match action {
                Action::Opened => {
                    format!("🔍 {who} opened a pull request in {repo}: \"{title}\" at {at}")
                }
                Action::Closed => {
                    format!("✅ {who} closed a pull request in {repo}: \"{title}\" at {at}")
                }
                Action::Other(_) => return None,
            },
            EventKind::Watch => format!("👀 {who} starred {repo} at {at}"),
            EventKind::Fork => format!("🍴 {who} forked {repo} at {at}"),
            EventKind::Create { ref_type, ref_name } => {
                let name = ref_name
                    .as_ref()
                    .map(|name| format!(" ({name})"))
                    .unwrap_or_default();
                format!("✨ {who} created a {ref_type}{name} in {repo} at {at}")
            }
            EventKind::Other(tag) => {
                format!("🔔 {who} performed an activity of type {tag} in {repo} at {at}")
            }
        };

        Some(text)
    }
}

impl Viewable for Event {
    fn view(&self, opts: &ViewOptions) -> Option<String> {
        let text = self.describe(opts.locale)?;
        if !opts.color {
            return Some(text);
        }
        let styled = match color_for(self.kind()) {
            Some(color) => text.color(color),
            None => text.bold(),
        };
        Some(styled.to_string())
    }
}

impl Viewable for Value {
    /// Pretty-prints JSON with two-space indentation.
    fn view(&self, _: &ViewOptions) -> Option<String> {
        serde_json::to_string_pretty(self).ok()
    }
}
