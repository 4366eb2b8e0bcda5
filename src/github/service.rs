// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! HTTPS connector for the GitHub REST API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the GitHub API over HTTPS, essentially a specialized HTTPS client
//! specifically for GitHub.

use crate::conf;
use crate::http::{self, HTTPError, HTTPResult, HTTPService};
use log::debug;
use reqwest::Client;

/// A service for retrieving a GitHub user's public activity.
///
/// Using this trait, clients can implement different ways of connecting
/// to the GitHub API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request for the public events of the given `username`
    /// and returns the raw body.
    fn get_events(&self, username: &str) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the GitHub API directly to retrieve information.
#[derive(Debug)]
pub struct GitHubService {
    client: Client,
    base_url: String,
}

impl HTTPService for GitHubService {
    fn accept() -> &'static str {
        "application/vnd.github.v3+json"
    }
}

impl GitHubService {
    /// Creates a new GitHub service for the API configured in the environment.
    ///
    /// See [`conf::api_url()`].
    pub fn new() -> HTTPResult<Self> {
        Self::with_base_url(conf::api_url())
    }

    /// Creates a new GitHub service for the API rooted at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> HTTPResult<Self> {
        let client = Self::client()?;
        let base_url = base_url.into();
        Ok(Self { client, base_url })
    }

    fn uri(&self, username: &str) -> String {
        format!("{}/users/{username}/events", self.base_url)
    }
}

impl Service for GitHubService {
    async fn get_events(&self, username: &str) -> HTTPResult<String> {
        let uri = self.uri(username);
        debug!("GET {uri}");

        let resp = self
            .client
            .get(&uri)
            .send()
            .await
            .map_err(HTTPError::Request)?;
        debug!("{uri} returned HTTP {}", resp.status());

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            http::expect_json(resp.headers())?;
            resp.text().await.map_err(HTTPError::Body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_returns_a_uri_for_events() {
        let service = GitHubService::with_base_url("https://api.github.com").unwrap();
        let actual_uri = service.uri("octocat");
        let expected_uri = "https://api.github.com/users/octocat/events";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_returns_a_uri_for_enterprise_hosts() {
        let service = GitHubService::with_base_url("https://github.example.com/api/v3").unwrap();
        let actual_uri = service.uri("octocat");
        let expected_uri = "https://github.example.com/api/v3/users/octocat/events";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_asks_for_the_versioned_media_type() {
        assert_eq!(GitHubService::accept(), "application/vnd.github.v3+json");
    }
}
