// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

use crate::github::Activity;
use crate::github::service::Service;
use crate::http::{HTTPError, HTTPResult};
use reqwest::StatusCode;
use std::fs;

pub fn load_data(file: &str) -> String {
    let filename = format!("tests/data/{file}.json");
    fs::read_to_string(&filename).expect(&format!("could not load test data from {filename}"))
}

/// Serves canned responses from `tests/data` instead of contacting GitHub.
pub struct TestService<'a> {
    suffix: &'a str,
    status: Option<StatusCode>,
}

impl<'a> TestService<'a> {
    /// Serves `tests/data/events_<suffix>.json`.
    pub fn new(suffix: &'a str) -> Self {
        Self {
            suffix,
            status: None,
        }
    }

    /// Fails every request with `status`.
    pub fn failing(status: StatusCode) -> Self {
        Self {
            suffix: "",
            status: Some(status),
        }
    }
}

impl<'a> Service for TestService<'a> {
    async fn get_events(&self, _username: &str) -> HTTPResult<String> {
        match self.status {
            Some(status) => Err(HTTPError::Http(status)),
            None => Ok(load_data(&format!("events_{}", self.suffix))),
        }
    }
}

impl Activity {
    /// Returns the activity of a user with one event of every displayed
    /// kind, plus a few that are not displayed specially.
    pub async fn test() -> Activity {
        Activity::fetch_with_service("octocat", &TestService::new("octocat"))
            .await
            .unwrap()
    }

    /// Returns the activity of a user with no recent events.
    pub async fn test_empty() -> Activity {
        Activity::fetch_with_service("testuserpleaseignore", &TestService::new("empty"))
            .await
            .unwrap()
    }
}
