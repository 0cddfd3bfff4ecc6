//! Asynchronous HTTP client core for a single backend root.
//!
//! # Overview
//! Resolves relative or absolute paths against a fixed root URL, builds
//! GET/PUT/POST requests (query-string, form-encoded, JSON-decoding, or
//! multipart file upload), hands them to a [`Transport`] for execution,
//! and classifies every completion into one uniform result.
//!
//! # Design
//! - `FetchClient` owns the root URL and the extra-header map; the
//!   transport is injected, so the core performs no socket I/O itself.
//! - Request construction and response classification are synchronous;
//!   the only await point is the transport completion.
//! - Every verb resolves exactly once — success, HTTP status error,
//!   transport failure, or a typed no-response/decode error. Nothing is
//!   silently dropped.

pub mod classify;
pub mod client;
pub mod encode;
pub mod error;
pub mod http;
pub mod json;
pub mod multipart;
pub mod resolve;
pub mod transport;

pub use classify::classify;
pub use client::FetchClient;
pub use error::{FetchError, reason_for_status, TransportError};
pub use http::{Headers, HttpRequest, Method, Params, ResponseMeta};
pub use json::JsonObject;
pub use multipart::{BOUNDARY, encode_multipart, MultipartBody};
pub use transport::{Download, Transport, TransportCompletion};
