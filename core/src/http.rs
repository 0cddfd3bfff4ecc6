//! HTTP request and response-metadata types for the transport boundary.
//!
//! # Design
//! Requests and response metadata are plain data. The core builds
//! `HttpRequest` values and classifies transport completions without ever
//! touching the network — a [`Transport`](crate::transport::Transport)
//! implementation executes the actual I/O. All fields use owned types so
//! values can cross task and thread boundaries without lifetime concerns.

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

/// Query/body parameters. `BTreeMap` fixes the iteration order, so encoded
/// queries and multipart bodies are byte-for-byte deterministic.
pub type Params = BTreeMap<String, String>;

/// Header name to value mapping. Names are lowercased when a request is
/// assembled, so overrides are case-insensitive.
pub type Headers = BTreeMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built HTTP request described as plain data.
///
/// Produced by `FetchClient`; executed by a `Transport` implementation.
/// For GET requests the encoded query string is already attached to `url`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Metadata of an HTTP response, minus the body (which the transport
/// materializes to a temporary file).
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}
