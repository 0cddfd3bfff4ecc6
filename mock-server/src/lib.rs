use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// A stored multipart upload: the form fields plus the file part's size.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Upload {
    pub id: Uuid,
    pub fields: HashMap<String, String>,
    pub file_size: usize,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Upload>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/echo/query", get(echo_query))
        .route("/echo/headers", get(echo_headers))
        .route("/echo/form", put(echo_form).post(echo_form))
        .route("/status/{code}", get(status_code))
        .route("/json/object", get(json_object))
        .route("/json/array", get(json_array))
        .route("/json/garbage", get(json_garbage))
        .route("/uploads", post(create_upload))
        .route("/uploads/{id}", get(get_upload))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reflect the decoded query parameters back as a JSON object.
async fn echo_query(Query(params): Query<HashMap<String, String>>) -> Json<HashMap<String, String>> {
    Json(params)
}

/// Reflect the request headers back as a JSON object.
async fn echo_headers(headers: HeaderMap) -> Json<serde_json::Value> {
    let map: HashMap<String, String> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    Json(json!(map))
}

/// Reflect the request body and its content headers back as JSON.
async fn echo_form(headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    let content_length = headers
        .get(header::CONTENT_LENGTH)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    Json(json!({
        "content_type": content_type,
        "content_length": content_length,
        "body": body,
    }))
}

/// Respond with the requested status code and an empty body.
async fn status_code(Path(code): Path<u16>) -> Result<StatusCode, StatusCode> {
    StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)
}

async fn json_object() -> Json<serde_json::Value> {
    Json(json!({"name": "fetch", "ok": true, "count": 3}))
}

async fn json_array() -> Json<serde_json::Value> {
    Json(json!([1, 2, 3]))
}

/// An `application/json` content type over a body that is not JSON.
async fn json_garbage() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "application/json")], "not json {{{")
}

/// Accept a multipart upload: every field except `file` is stored as a
/// form field; the `file` part is measured, not kept.
async fn create_upload(
    State(db): State<Db>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Upload>), StatusCode> {
    let mut fields = HashMap::new();
    let mut file_size = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        if name == "file" {
            file_size = Some(bytes.len());
        } else {
            fields.insert(name, String::from_utf8_lossy(&bytes).into_owned());
        }
    }

    let file_size = file_size.ok_or(StatusCode::BAD_REQUEST)?;
    let upload = Upload {
        id: Uuid::new_v4(),
        fields,
        file_size,
    };
    db.write().await.insert(upload.id, upload.clone());
    Ok((StatusCode::CREATED, Json(upload)))
}

async fn get_upload(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Upload>, StatusCode> {
    let uploads = db.read().await;
    uploads.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_serializes_to_json() {
        let upload = Upload {
            id: Uuid::nil(),
            fields: HashMap::from([("kind".to_string(), "avatar".to_string())]),
            file_size: 64,
        };
        let json = serde_json::to_value(&upload).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["fields"]["kind"], "avatar");
        assert_eq!(json["file_size"], 64);
    }

    #[test]
    fn upload_roundtrips_through_json() {
        let upload = Upload {
            id: Uuid::new_v4(),
            fields: HashMap::from([("a".to_string(), "1".to_string())]),
            file_size: 9,
        };
        let json = serde_json::to_string(&upload).unwrap();
        let back: Upload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, upload.id);
        assert_eq!(back.fields, upload.fields);
        assert_eq!(back.file_size, upload.file_size);
    }

    #[test]
    fn upload_rejects_missing_file_size() {
        let result: Result<Upload, _> = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000000","fields":{}}"#,
        );
        assert!(result.is_err());
    }
}
