// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! Public GitHub events.
//!
//! The GitHub events API returns loosely-typed records: every event has a
//! `type` tag, an actor, a repository and a timestamp, and a `payload`
//! whose shape depends on the tag. This module parses those records into
//! an [`Event`] whose [`EventKind`] carries only the payload fields that
//! are actually displayed. Tags that are not specifically understood are
//! kept as [`EventKind::Other`].

use chrono::{DateTime, Local, Utc};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use thiserror::Error;

/// An error converting a raw GitHub event into an [`Event`].
#[derive(Debug, Error)]
pub enum Error {
    /// The payload did not have the shape expected for its event type.
    #[error("invalid payload for {tag}: {source}")]
    Payload {
        /// Type tag of the offending event.
        tag: String,

        /// Underlying deserialization error.
        source: serde_json::Error,
    },

    /// The `created_at` timestamp is not an RFC 3339 date and time.
    #[error("invalid created_at {value:?}: {source}")]
    Timestamp {
        /// The timestamp as GitHub sent it.
        value: String,

        /// Underlying parse error.
        source: chrono::ParseError,
    },
}

/// What happened to an issue or a pull request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// The issue or pull request was opened.
    Opened,

    /// The issue or pull request was closed.
    Closed,

    /// Any other action, such as `reopened` or `labeled`.
    Other(String),
}

impl From<String> for Action {
    fn from(action: String) -> Self {
        match action.as_str() {
            "opened" => Action::Opened,
            "closed" => Action::Closed,
            _ => Action::Other(action),
        }
    }
}

/// The kind of an event, along with the payload details used to display it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Commits were pushed to a repository.
    Push {
        /// Number of commits in the push.
        commits: usize,
    },

    /// An issue was acted upon.
    Issues {
        /// What happened to the issue.
        action: Action,

        /// Title of the issue; empty if GitHub did not send one.
        title: String,
    },

    /// A pull request was acted upon.
    PullRequest {
        /// What happened to the pull request.
        action: Action,

        /// Title of the pull request; empty if GitHub did not send one.
        title: String,
    },

    /// A repository was starred.
    Watch,

    /// A repository was forked.
    Fork,

    /// A repository, branch or tag was created.
    Create {
        /// `repository`, `branch` or `tag`.
        ref_type: String,

        /// Name of the branch or tag, if any.
        ref_name: Option<String>,
    },

    /// Any event type that is not displayed specially. Holds the type tag.
    Other(String),
}

/// A single unit of public activity on GitHub.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    tag: String,
    kind: EventKind,
    actor: String,
    repo: String,
    created_at: DateTime<Utc>,
}

impl Event {
    /// The raw type tag of the event, such as `PushEvent`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The kind of the event.
    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Login of the user who triggered the event.
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Full name (`owner/name`) of the repository the event happened in.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// When the event happened, in UTC.
    pub fn created_utc(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the event happened, in local time.
    pub fn created_local(&self) -> DateTime<Local> {
        self.created_at.with_timezone(&Local)
    }

    /// True if the event's type tag is exactly `tag`.
    ///
    /// The comparison is case-sensitive.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    tag: String,
    actor: Actor,
    repo: Repo,
    created_at: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Debug, Deserialize)]
struct Actor {
    login: String,
}

#[derive(Debug, Deserialize)]
struct Repo {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PushPayload {
    commits: Option<Vec<IgnoredAny>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Titled {
    title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IssuesPayload {
    action: Option<String>,
    issue: Titled,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PullRequestPayload {
    action: Option<String>,
    pull_request: Titled,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreatePayload {
    ref_type: Option<String>,
    #[serde(rename = "ref")]
    ref_name: Option<String>,
}

fn payload<T: DeserializeOwned + Default>(tag: &str, payload: Value) -> Result<T, Error> {
    if payload.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(payload).map_err(|source| Error::Payload {
        tag: tag.to_string(),
        source,
    })
}

impl TryFrom<RawEvent> for Event {
    type Error = Error;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let tag = raw.tag;
        let kind = match tag.as_str() {
            "PushEvent" => {
                let p: PushPayload = payload(&tag, raw.payload)?;
                EventKind::Push {
                    commits: p.commits.map_or(0, |commits| commits.len()),
                }
            }
            "IssuesEvent" => {
                let p: IssuesPayload = payload(&tag, raw.payload)?;
                EventKind::Issues {
                    action: p.action.unwrap_or_default().into(),
                    title: p.issue.title.unwrap_or_default(),
                }
            }
            "PullRequestEvent" => {
                let p: PullRequestPayload = payload(&tag, raw.payload)?;
                EventKind::PullRequest {
                    action: p.action.unwrap_or_default().into(),
                    title: p.pull_request.title.unwrap_or_default(),
                }
            }
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "CreateEvent" => {
                let p: CreatePayload = payload(&tag, raw.payload)?;
                EventKind::Create {
                    ref_type: p.ref_type.unwrap_or_default(),
                    ref_name: p.ref_name.filter(|name| !name.is_empty()),
                }
            }
            other => EventKind::Other(other.to_string()),
        };

        let created_at = DateTime::parse_from_rfc3339(&raw.created_at)
            .map_err(|source| Error::Timestamp {
                value: raw.created_at.clone(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(Event {
            tag,
            kind,
            actor: raw.actor.login,
            repo: raw.repo.name,
            created_at,
        })
    }
}

#[cfg(test)]
impl Event {
    /// Builds an event directly, bypassing JSON parsing.
    pub fn test(tag: &str, kind: EventKind) -> Self {
        Event {
            tag: tag.to_string(),
            kind,
            actor: String::from("octocat"),
            repo: String::from("octocat/Hello-World"),
            created_at: "2025-05-23T17:13:00Z".parse().unwrap(),
        }
    }
}
