//! `multipart/form-data` framing for file uploads.
//!
//! # Design
//! One fixed boundary token delimits every upload body this client
//! produces. Field values and file bytes are not scanned for boundary
//! collisions; keeping the token out of uploaded content is the caller's
//! responsibility.

use crate::http::Params;

/// Boundary token separating the parts of an upload body.
pub const BOUNDARY: &str = "x-fetch-core-9c41d7aa02e8-boundary";

/// An assembled multipart body plus the content type that describes it.
#[derive(Debug)]
pub struct MultipartBody {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Frame `params` and a raw file payload into a `multipart/form-data` body.
///
/// Each parameter becomes its own part, in map order. The payload follows
/// as a part named `file`, carrying no filename and no per-part content
/// type, with the bytes appended raw rather than text-encoded.
pub fn encode_multipart(params: &Params, file_data: &[u8]) -> MultipartBody {
    let mut body = Vec::with_capacity(file_data.len() + 256);
    for (name, value) in params {
        body.extend_from_slice(format!("\r\n--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
    }
    body.extend_from_slice(format!("\r\n--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"file\"\r\n\r\n");
    body.extend_from_slice(file_data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    MultipartBody {
        body,
        content_type: format!("multipart/form-data; boundary={BOUNDARY}"),
    }
}
