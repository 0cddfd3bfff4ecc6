//! RFC 3986 percent-encoding and form encoding of request parameters.

use std::borrow::Cow;

use crate::http::Params;

/// Percent-encode a single query or form value.
///
/// Every byte of the value's UTF-8 form is escaped except alphanumerics
/// and `-`, `_`, `.`, `~`. A `&str` is guaranteed valid UTF-8, so there is
/// no failure path: inputs with unpaired surrogates cannot be constructed.
pub fn percent_encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Encode parameters as `key=value` pairs joined by `&`, in map order.
///
/// Values are percent-encoded; keys pass through raw.
pub fn form_encode(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
