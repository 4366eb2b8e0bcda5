// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! github-activity is a command-line tool for quickly listing a GitHub
//! user's recent public activity in the terminal. It fetches the user's
//! latest events from the GitHub API and describes each one on a single,
//! colorized line: pushes, issues, pull requests, stars, forks, and newly
//! created repositories, branches, and tags.
//!
//! # Examples
//!
//! (In all examples, replace `octocat` with the actual username of a
//! GitHub user.)
//!
//! Display a user's recent activity:
//!
//! ```bash
//! github-activity octocat
//! ```
//!
//! Only show the user's last five pushes:
//!
//! ```bash
//! github-activity octocat --type=PushEvent --limit=5
//! ```
//!
//! Print the raw JSON returned by the GitHub API:
//!
//! ```bash
//! github-activity octocat --json
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! github-activity --help
//! ```
//!
//! # Configuration
//!
//! Requests go to the public GitHub API unless `$GITHUB_API_URL` points
//! somewhere else, such as a GitHub Enterprise server. Colors can be turned
//! off with `--color=never` or by setting `$NO_COLOR`. Use `-v` (repeatedly)
//! to see what the tool is doing.
//!
//! # License
//!
//! github-activity is licensed under the terms of the [Apache License 2.0].
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod conf;
pub mod event;
pub mod filter;
pub mod github;
pub mod http;
pub mod view;

#[cfg(test)]
mod test_utils;
