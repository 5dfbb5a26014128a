//! Request and response types for the preloading layer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum PreloadError {
    #[error("preloaded data must be a JSON object")]
    NotAnObject,
    #[error("`OPTIONS` entry must be a JSON object of preloaded responses")]
    InvalidOptionsTable,
    #[error("invalid preloaded response at `{path}`: {reason}")]
    InvalidEntry { path: String, reason: String },
}

// ── Method ────────────────────────────────────────────────────────────────

/// HTTP method of a request descriptor.
///
/// Only [`Method::Options`] changes lookup behaviour (it selects the nested
/// `OPTIONS` sub-table); the other verbs all share the top-level table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    pub fn is_options(&self) -> bool {
        matches!(self, Method::Options)
    }
}

// ── Request ───────────────────────────────────────────────────────────────

/// An in-process request descriptor.
///
/// `parse` mirrors the upstream option of the same name: when `true` (the
/// default) a preloaded hit yields only the response body, when `false` it
/// yields the whole stored record including headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub method: Method,
    pub path: String,
    #[serde(default = "default_parse")]
    pub parse: bool,
}

fn default_parse() -> bool {
    true
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Request {
            method,
            path: path.into(),
            parse: true,
        }
    }

    /// A `GET` request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Request::new(Method::Get, path)
    }

    /// An `OPTIONS` request for `path`.
    pub fn options(path: impl Into<String>) -> Self {
        Request::new(Method::Options, path)
    }

    /// Set the `parse` flag.
    pub fn with_parse(mut self, parse: bool) -> Self {
        self.parse = parse;
        self
    }
}

// ── Preloaded response record ─────────────────────────────────────────────

/// A single preloaded response as embedded by the server.
///
/// `extra` keeps any fields beyond `body` and `headers` so that a
/// `parse: false` request receives the record exactly as it was stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreloadedResponse {
    pub body: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PreloadedResponse {
    pub fn new(body: Value) -> Self {
        PreloadedResponse {
            body,
            headers: None,
            extra: Map::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), value.into());
        self
    }
}

// ── Fetch response ────────────────────────────────────────────────────────

/// What a request resolves to, whether preloaded or produced by the next
/// handler.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// The parsed body only (`parse: true`).
    Body(Value),
    /// The full stored record (`parse: false`).
    Raw(PreloadedResponse),
}

impl FetchResponse {
    /// The body carried by either variant.
    pub fn body(&self) -> &Value {
        match self {
            FetchResponse::Body(body) => body,
            FetchResponse::Raw(record) => &record.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_serializes_upper_case() {
        assert_eq!(serde_json::to_value(Method::Options).unwrap(), json!("OPTIONS"));
        assert_eq!(
            serde_json::from_value::<Method>(json!("GET")).unwrap(),
            Method::Get
        );
    }

    #[test]
    fn test_request_parse_defaults_to_true() {
        let request: Request =
            serde_json::from_value(json!({ "method": "GET", "path": "wp/v2/posts" })).unwrap();
        assert!(request.parse);
        assert_eq!(request, Request::get("wp/v2/posts"));
    }

    #[test]
    fn test_record_round_trips_extra_fields() {
        let raw = json!({
            "body": { "ok": true },
            "headers": { "Allow": "GET, POST" },
            "status": 200,
        });
        let record: PreloadedResponse = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.extra["status"], json!(200));
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_record_requires_body() {
        let result: Result<PreloadedResponse, _> =
            serde_json::from_value(json!({ "headers": {} }));
        assert!(result.is_err());
    }

    #[test]
    fn test_fetch_response_body_accessor() {
        let record = PreloadedResponse::new(json!(1)).with_header("Allow", "GET");
        assert_eq!(FetchResponse::Raw(record).body(), &json!(1));
        assert_eq!(FetchResponse::Body(json!(2)).body(), &json!(2));
    }
}
