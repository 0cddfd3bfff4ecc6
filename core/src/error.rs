//! Error types and the status-reason table for the fetch client.
//!
//! # Design
//! Every way a request can fail travels through `FetchError`; the client
//! never panics across the public boundary and never drops a completion
//! silently. The status-reason table is a static lookup rather than a
//! conditional chain, so the classifier's range logic stays separable
//! from the table contents.

use std::fmt;

use crate::http::ResponseMeta;

/// Reason phrases for the closed set of status codes the client names
/// explicitly. Any other code renders as plain "HTTP Error".
// 406/407 phrases are historical; kept for message compatibility.
const STATUS_REASONS: &[(u16, &str)] = &[
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Proxy Authentication Required"),
    (407, "Request Timeout"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
];

/// Look up the reason phrase for a status code.
pub fn reason_for_status(code: u16) -> &'static str {
    STATUS_REASONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, reason)| *reason)
        .unwrap_or("HTTP Error")
}

/// Errors raised by the transport layer, before any HTTP response exists.
#[derive(Debug)]
pub enum TransportError {
    /// The operation was cancelled before it completed.
    Cancelled,

    /// The transport failed to produce a response (DNS, connect, TLS, I/O).
    Failed(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Cancelled => write!(f, "operation cancelled"),
            TransportError::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Errors returned by `FetchClient` operations.
#[derive(Debug)]
pub enum FetchError {
    /// The path could not be resolved into a parseable request URL.
    InvalidUrl(String),

    /// The transport failed before delivering an HTTP response.
    Transport(TransportError),

    /// The transport completed without an error but delivered no usable
    /// HTTP response.
    NoResponse,

    /// The server answered with a status outside 200..300.
    Status { code: u16, response: ResponseMeta },

    /// The body of a successful response was not the JSON object the
    /// caller asked for.
    JsonDecode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(what) => write!(f, "invalid URL: {what}"),
            FetchError::Transport(err) => write!(f, "transport failure: {err}"),
            FetchError::NoResponse => write!(f, "no HTTP response received"),
            FetchError::Status { code, .. } => {
                write!(f, "{} ({code})", reason_for_status(*code))
            }
            FetchError::JsonDecode(msg) => write!(f, "JSON decode failed: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}
