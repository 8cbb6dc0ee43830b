use std::collections::BTreeMap;

use axum::body::Body;
use http::{request::Parts, Method};
use micrograph_engine::NormalizedQuery;

/// A request body that was already read and parsed upstream.
///
/// When present in the extensions of a POST request it takes precedence
/// over reading the body again, so middleware that had to buffer the body
/// (multipart handling, signature checks) does not force a second parse.
#[derive(Debug, Clone)]
pub struct BufferedPayload(pub serde_json::Value);

/// Extracts the GraphQL query from an incoming request.
///
/// POST requests are read as JSON bodies, every other method falls back
/// to the URL query string. Malformed input of either kind yields `None`
/// rather than an error: the engine answers a missing query with its own
/// protocol error, which keeps this layer free of protocol judgments.
pub(crate) async fn normalized_query(parts: &Parts, body: Body, limit: usize) -> Option<NormalizedQuery> {
    if parts.method == Method::POST {
        if let Some(BufferedPayload(payload)) = parts.extensions.get::<BufferedPayload>() {
            return Some(NormalizedQuery::Json(payload.clone()));
        }

        let bytes = match axum::body::to_bytes(body, limit).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!("discarding unreadable request body: {err}");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(payload) => Some(NormalizedQuery::Json(payload)),
            Err(err) => {
                tracing::debug!("discarding malformed request body: {err}");
                None
            }
        }
    } else {
        let query = parts.uri.query().unwrap_or_default();

        match serde_urlencoded::from_str::<BTreeMap<String, String>>(query) {
            Ok(params) => Some(NormalizedQuery::Params(params)),
            Err(err) => {
                tracing::debug!("discarding malformed query string: {err}");
                None
            }
        }
    }
}
