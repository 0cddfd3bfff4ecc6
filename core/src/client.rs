//! The fetch client: request building and the public verb surface.
//!
//! # Design
//! `FetchClient` holds the fixed root URL, the mutable extra-header map,
//! and an injected [`Transport`]. Building a request performs no I/O; the
//! only await point in a verb is the transport completion, and each call
//! resolves exactly once — the returned future is the completion callback.
//! Exclusive `&mut self` access to the extra headers rules out mutation
//! racing an in-flight build.

use url::Url;

use crate::classify::classify;
use crate::encode::form_encode;
use crate::error::FetchError;
use crate::http::{Headers, HttpRequest, Method, Params, ResponseMeta};
use crate::json::{decode_object, JsonObject};
use crate::multipart::encode_multipart;
use crate::resolve::resolve;
use crate::transport::{Download, Transport};

/// Asynchronous HTTP client rooted at one backend URL.
#[derive(Debug)]
pub struct FetchClient<T: Transport> {
    root: Url,
    extra_headers: Headers,
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    /// Create a client rooted at `root`.
    ///
    /// Fails with `InvalidUrl` when `root` does not parse as an absolute
    /// URL. The root is fixed for the client's lifetime.
    pub fn new(root: &str, transport: T) -> Result<Self, FetchError> {
        let root =
            Url::parse(root).map_err(|err| FetchError::InvalidUrl(format!("{root}: {err}")))?;
        Ok(Self {
            root,
            extra_headers: Headers::new(),
            transport,
        })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Set a header sent with every request. Per-call headers with the
    /// same name (case-insensitive) take precedence.
    pub fn set_extra_header(&mut self, name: &str, value: &str) {
        self.extra_headers
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn remove_extra_header(&mut self, name: &str) {
        self.extra_headers.remove(&name.to_ascii_lowercase());
    }

    pub fn extra_headers(&self) -> &Headers {
        &self.extra_headers
    }

    /// GET `path`. Parameters are percent-encoded and appended to the URL
    /// as a query string.
    pub async fn get(
        &self,
        path: &str,
        params: Option<&Params>,
        headers: Option<&Headers>,
    ) -> Result<Download, FetchError> {
        let request = self.build_request(Method::Get, path, params, headers)?;
        self.dispatch(request).await
    }

    /// GET `path` and decode the response body as a JSON object.
    ///
    /// The downloaded file is consumed by the decode step. A body that is
    /// not a JSON object fails with `JsonDecode`.
    pub async fn get_json(
        &self,
        path: &str,
        params: Option<&Params>,
        headers: Option<&Headers>,
    ) -> Result<(JsonObject, ResponseMeta), FetchError> {
        let download = self.get(path, params, headers).await?;
        let object = decode_object(&download.location)?;
        Ok((object, download.response))
    }

    /// PUT `path`. Parameters are form-encoded into the request body with
    /// `application/x-www-form-urlencoded` content headers.
    pub async fn put(
        &self,
        path: &str,
        params: Option<&Params>,
        headers: Option<&Headers>,
    ) -> Result<Download, FetchError> {
        let request = self.build_request(Method::Put, path, params, headers)?;
        self.dispatch(request).await
    }

    /// POST `file_data` to `path` as a `multipart/form-data` upload, with
    /// `params` as the accompanying form fields.
    pub async fn post(
        &self,
        path: &str,
        file_data: &[u8],
        params: &Params,
    ) -> Result<Download, FetchError> {
        let url = resolve(&self.root, path)?;
        let multipart = encode_multipart(params, file_data);

        let mut assembled = Headers::new();
        assembled.insert(
            "content-length".to_string(),
            multipart.body.len().to_string(),
        );
        assembled.insert("content-type".to_string(), multipart.content_type);
        for (name, value) in &self.extra_headers {
            assembled.insert(name.clone(), value.clone());
        }

        let request = HttpRequest {
            method: Method::Post,
            url,
            headers: assembled.into_iter().collect(),
            body: Some(multipart.body),
        };
        self.dispatch(request).await
    }

    /// Assemble a request: resolve the URL, encode parameters, and apply
    /// headers (content headers, then client extra headers, then per-call
    /// headers — last write wins).
    fn build_request(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        headers: Option<&Headers>,
    ) -> Result<HttpRequest, FetchError> {
        let mut url = resolve(&self.root, path)?;
        let mut assembled = Headers::new();
        let mut body = None;

        match params.map(form_encode) {
            Some(query) if method == Method::Get => {
                url.set_query(Some(&query));
            }
            Some(query) => {
                assembled.insert("content-length".to_string(), query.len().to_string());
                assembled.insert(
                    "content-type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                );
                body = Some(query.into_bytes());
            }
            None => {}
        }

        for (name, value) in &self.extra_headers {
            assembled.insert(name.clone(), value.clone());
        }
        if let Some(headers) = headers {
            for (name, value) in headers {
                assembled.insert(name.to_ascii_lowercase(), value.clone());
            }
        }

        Ok(HttpRequest {
            method,
            url,
            headers: assembled.into_iter().collect(),
            body,
        })
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<Download, FetchError> {
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");
        let completion = self.transport.download(request).await;
        let result = classify(completion);
        match &result {
            Err(FetchError::Transport(error)) => tracing::warn!(%error, "transport error"),
            Err(FetchError::Status { code, .. }) => tracing::warn!(code = *code, "http error"),
            _ => {}
        }
        result
    }
}
