// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! Clients for reading data from the GitHub API.

use crate::event::Event;
use crate::github::service::{GitHubService, Service};
use crate::http::HTTPError;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A GitHub user's recent public activity.
#[derive(Debug)]
pub struct Activity {
    username: String,
    raw: Value,
}

impl Activity {
    /// Fetches the recent public activity of a GitHub user.
    ///
    /// `username` should be the user's GitHub login.
    ///
    /// Returns an [`enum@Error`] if the activity cannot be retrieved or parsed.
    pub async fn fetch(username: impl Into<String>) -> Result<Self, Error> {
        let service = GitHubService::new()?;
        Self::fetch_with_service(username, &service).await
    }

    /// Fetches the recent public activity of a GitHub user.
    ///
    /// `username` should be the user's GitHub login. `service` is the
    /// actual service implementation that will be used to retrieve
    /// the user's events.
    ///
    /// Returns an [`enum@Error`] if the activity cannot be retrieved or parsed.
    pub async fn fetch_with_service<T: Service>(
        username: impl Into<String>,
        service: &T,
    ) -> Result<Self, Error> {
        let username = username.into();
        let body = service.get_events(&username).await?;
        Self::parse(username, &body)
    }

    /// Parses a response body from the GitHub events API.
    ///
    /// The body must be a JSON array. Its elements are only read as
    /// events when [`Activity::events`] is called, so a body that is
    /// valid JSON can always be shown as-is.
    pub fn parse(username: impl Into<String>, body: &str) -> Result<Self, Error> {
        let raw: Vec<Value> = serde_json::from_str(body)?;
        debug!("received {} events", raw.len());
        Ok(Self {
            username: username.into(),
            raw: Value::Array(raw),
        })
    }

    /// The user's GitHub login.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The events exactly as they were returned by the GitHub API.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The user's events, newest first.
    ///
    /// Returns [`Error::Parse`] if any element is not a well-formed event.
    /// Nothing is returned for the other elements in that case.
    pub fn events(&self) -> Result<Vec<Event>, Error> {
        Ok(Vec::<Event>::deserialize(&self.raw)?)
    }

    /// True if the user has no recent public activity.
    pub fn is_empty(&self) -> bool {
        self.raw.as_array().is_none_or(|events| events.is_empty())
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// The user does not exist.
    #[error("User not found.")]
    NotFound,

    /// The API answered with an unsuccessful status code.
    #[error("Failed to fetch activity. Status: {}", .0.as_u16())]
    Status(StatusCode),

    /// An error from the underlying HTTP service.
    #[error("Request error: {0}")]
    Service(#[source] HTTPError),

    /// An error parsing data.
    #[error("Error parsing response JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<HTTPError> for Error {
    fn from(error: HTTPError) -> Self {
        match error {
            HTTPError::Http(status) if status == StatusCode::NOT_FOUND => Error::NotFound,
            HTTPError::Http(status) => Error::Status(status),
            error => Error::Service(error),
        }
    }
}
