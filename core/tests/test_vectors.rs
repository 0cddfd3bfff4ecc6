//! Verify request building and status classification against JSON test
//! vectors stored in `test-vectors/`.
//!
//! Each vector names its inputs and the exact request (or classified
//! outcome) they must produce. Comparing against the built request rather
//! than wire bytes keeps the vectors transport-independent.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fetch_core::{
    classify, FetchClient, FetchError, Headers, HttpRequest, Method, Params, ResponseMeta,
    Transport, TransportCompletion,
};

/// Records every built request and never produces a response, so verbs
/// resolve with `NoResponse` once the request is captured.
#[derive(Clone, Default)]
struct CaptureTransport {
    seen: Arc<Mutex<Option<HttpRequest>>>,
}

#[async_trait]
impl Transport for CaptureTransport {
    async fn download(&self, request: HttpRequest) -> TransportCompletion {
        *self.seen.lock().unwrap() = Some(request);
        TransportCompletion {
            location: None,
            response: None,
            error: None,
        }
    }
}

fn parse_method(s: &str) -> Method {
    match s {
        "GET" => Method::Get,
        "PUT" => Method::Put,
        "POST" => Method::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn string_map(value: &serde_json::Value) -> Params {
    value
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
        .collect()
}

#[tokio::test]
async fn request_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let capture = CaptureTransport::default();
        let seen = capture.seen.clone();
        let mut client = FetchClient::new("http://localhost:3000", capture).unwrap();

        if let Some(extra) = case.get("extra_headers") {
            for (header_name, value) in extra.as_object().unwrap() {
                client.set_extra_header(header_name, value.as_str().unwrap());
            }
        }

        let params = case.get("params").map(string_map);
        let headers: Option<Headers> = case.get("headers").map(string_map);
        let path = case["path"].as_str().unwrap();

        let result = match parse_method(case["method"].as_str().unwrap()) {
            Method::Get => client.get(path, params.as_ref(), headers.as_ref()).await,
            Method::Put => client.put(path, params.as_ref(), headers.as_ref()).await,
            Method::Post => panic!("{name}: POST is not driven by request vectors"),
        };
        assert!(
            matches!(result.unwrap_err(), FetchError::NoResponse),
            "{name}: capture transport should resolve with NoResponse"
        );

        let request = seen.lock().unwrap().take().expect("request not captured");

        assert_eq!(
            request.url.as_str(),
            case["expected_url"].as_str().unwrap(),
            "{name}: url"
        );

        match case.get("expected_body") {
            Some(body) => assert_eq!(
                request.body.as_deref(),
                Some(body.as_str().unwrap().as_bytes()),
                "{name}: body"
            ),
            None => assert!(request.body.is_none(), "{name}: body should be none"),
        }

        if let Some(expected) = case.get("expected_headers") {
            let expected: Vec<(String, String)> = expected
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let pair = h.as_array().unwrap();
                    (
                        pair[0].as_str().unwrap().to_string(),
                        pair[1].as_str().unwrap().to_string(),
                    )
                })
                .collect();
            assert_eq!(request.headers, expected, "{name}: headers");
        }
    }
}

#[test]
fn status_vectors() {
    let raw = include_str!("../../test-vectors/status.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;

        let completion = TransportCompletion {
            location: Some(PathBuf::from("/tmp/vector.body")),
            response: Some(ResponseMeta {
                status,
                headers: Vec::new(),
            }),
            error: None,
        };

        match case["outcome"].as_str().unwrap() {
            "success" => {
                let download = classify(completion).unwrap();
                assert_eq!(download.response.status, status, "{name}: status");
            }
            "error" => {
                let err = classify(completion).unwrap_err();
                assert_eq!(
                    err.to_string(),
                    case["message"].as_str().unwrap(),
                    "{name}: message"
                );
            }
            other => panic!("{name}: unknown outcome: {other}"),
        }
    }
}
