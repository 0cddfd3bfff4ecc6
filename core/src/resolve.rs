//! Resolution of caller-supplied paths against the client's root URL.

use url::Url;

use crate::error::FetchError;

/// True when `path` is already an absolute `http:`/`https:` URL.
/// The prefix match is case-sensitive.
fn is_absolute(path: &str) -> bool {
    path.starts_with("http:") || path.starts_with("https:")
}

/// Resolve `path` into the request URL.
///
/// An absolute path is parsed verbatim; anything else is appended to the
/// root as `/`-separated path segments (empty segments skipped, segment
/// percent-escaping per standard path rules). Either way, a string that
/// does not form a valid URL is an `InvalidUrl` error.
pub fn resolve(root: &Url, path: &str) -> Result<Url, FetchError> {
    if is_absolute(path) {
        return Url::parse(path).map_err(|err| {
            tracing::warn!(path, %err, "invalid request URL");
            FetchError::InvalidUrl(format!("{path}: {err}"))
        });
    }

    let mut url = root.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            tracing::warn!(root = %root, "root URL cannot be a base");
            FetchError::InvalidUrl(format!("{root}: cannot be a base"))
        })?;
        segments.pop_if_empty();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            segments.push(segment);
        }
    }
    Ok(url)
}
