// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 The github-activity authors

//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, StatusCode, header};
use std::error::Error as StdError;
use thiserror::Error;

/// A general service for making HTTP calls.
///
/// It might be a bit odd to refer to this trait as a "service", since
/// it appears to be more of a _client_ implementation, but think of
/// this as a proxy for a remote _service_ (even though a _client_ is used
/// to communicate with that remote service). A service might not always
/// be remote, such as when the implementation is a deterministic service
/// used for testing.
pub trait HTTPService {
    /// Default HTTP client that can be used to make HTTP requests.
    ///
    /// Every request made with the client identifies itself with
    /// [`HTTPService::user_agent()`] and asks for [`HTTPService::accept()`].
    fn client() -> HTTPResult<Client> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(Self::accept()));
        ClientBuilder::new()
            .user_agent(Self::user_agent())
            .default_headers(headers)
            .build()
            .map_err(HTTPError::Request)
    }

    /// An appropriate user agent to use when making HTTP requests.
    fn user_agent() -> String {
        format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// The media type sent in the `Accept` header.
    fn accept() -> &'static str {
        "application/json"
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An error retrieving the body of a response.
    #[error("{}", error_chain(.0))]
    Body(#[source] reqwest::Error),

    /// An error that occurred while making an HTTP request.
    #[error("{}", error_chain(.0))]
    Request(#[source] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(StatusCode),

    /// A missing Content-Type header in a response.
    #[error("Missing Content-Type header")]
    MissingContentType,

    /// An invalid Content-Type header.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidContentType(#[from] header::ToStrError),

    /// A Content-Type that is not understood by the service.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),
}

/// Formats an error followed by each of its causes, separated by `": "`.
///
/// reqwest only describes the outermost failure ("error sending request
/// for url ..."), so the cause that a user can act on, such as a refused
/// connection, lives further down the chain.
pub fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}

/// Checks that a response declares a JSON body.
///
/// Vendor media types such as `application/vnd.github+json` count as JSON.
pub fn expect_json(headers: &header::HeaderMap) -> HTTPResult<()> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .ok_or(HTTPError::MissingContentType)?
        .to_str()?;
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let is_json = essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"));
    if is_json {
        Ok(())
    } else {
        Err(HTTPError::UnexpectedContentType(content_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    mod http_service {
        use crate::http::HTTPService;
        use regex::Regex;

        #[allow(dead_code)]
        struct UserAgentTestService {}
        impl HTTPService for UserAgentTestService {}

        #[test]
        fn it_returns_user_agent_with_version_number() {
            let user_agent = UserAgentTestService::user_agent();
            let version_re = Regex::new(r"^[a-z-]+ v\d+\.\d+\.\d+(-(alpha|beta)\.\d+)?$").unwrap();
            assert!(
                version_re.is_match(&user_agent),
                "{} does not match {}",
                user_agent,
                version_re,
            );
        }

        #[test]
        fn it_accepts_json_by_default() {
            assert_eq!(UserAgentTestService::accept(), "application/json");
        }

        #[test]
        fn it_builds_a_client() {
            assert!(UserAgentTestService::client().is_ok());
        }
    }

    mod error_chain {
        use crate::http::error_chain;
        use std::io;
        use thiserror::Error;

        #[derive(Debug, Error)]
        #[error("error sending request")]
        struct Outer(#[source] Middle);

        #[derive(Debug, Error)]
        #[error("tcp connect error")]
        struct Middle(#[source] io::Error);

        #[test]
        fn it_formats_a_lone_error() {
            let err = io::Error::other("boom");
            assert_eq!(error_chain(&err), "boom");
        }

        #[test]
        fn it_appends_every_cause() {
            let err = Outer(Middle(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "Connection refused",
            )));
            assert_eq!(
                error_chain(&err),
                "error sending request: tcp connect error: Connection refused"
            );
        }
    }

    mod expect_json {
        use crate::http::{HTTPError, expect_json};
        use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

        fn headers(content_type: &'static str) -> HeaderMap {
            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
            headers
        }

        #[test]
        fn it_accepts_json() {
            assert!(expect_json(&headers("application/json; charset=utf-8")).is_ok());
        }

        #[test]
        fn it_accepts_vendor_json() {
            assert!(expect_json(&headers("application/vnd.github+json")).is_ok());
        }

        #[test]
        fn it_rejects_html() {
            let err = expect_json(&headers("text/html")).unwrap_err();
            assert!(matches!(err, HTTPError::UnexpectedContentType(ct) if ct == "text/html"));
        }

        #[test]
        fn it_rejects_a_missing_content_type() {
            let err = expect_json(&HeaderMap::new()).unwrap_err();
            assert!(matches!(err, HTTPError::MissingContentType));
        }
    }
}
