// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! GitHub API clients and services for communicating with GitHub over HTTP.

pub mod client;
pub mod service;

pub use client::Activity;
