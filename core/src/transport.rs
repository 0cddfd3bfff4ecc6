//! The asynchronous transport boundary.
//!
//! # Design
//! The core never opens sockets. A [`Transport`] executes a built
//! [`HttpRequest`] as a download-to-temporary-file operation and reports a
//! three-slot completion (body location / response metadata / transport
//! error) exactly once. Interpreting that completion is the classifier's
//! job ([`classify`](crate::classify::classify)); the transport itself
//! never looks at status codes.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpRequest, ResponseMeta};

/// Completion of one download operation.
///
/// At most one of `response` / `error` is meaningful: a transport that got
/// an HTTP response sets `response` (and `location` when a body was
/// written); one that failed before any response sets `error`.
#[derive(Debug)]
pub struct TransportCompletion {
    pub location: Option<PathBuf>,
    pub response: Option<ResponseMeta>,
    pub error: Option<TransportError>,
}

/// A successfully downloaded response: where the body landed plus the
/// response metadata. The file at `location` belongs to the caller.
#[derive(Debug)]
pub struct Download {
    pub location: PathBuf,
    pub response: ResponseMeta,
}

/// Executes built requests against the real network (or a test double).
///
/// Implementations start the request as soon as the future is polled and
/// deliver exactly one completion. Dropping the future is the cancellation
/// path; a transport that observes its own cancellation reports
/// [`TransportError::Cancelled`] through the completion when it can.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn download(&self, request: HttpRequest) -> TransportCompletion;
}
