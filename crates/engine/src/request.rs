use std::{collections::BTreeMap, sync::Arc};

/// The GraphQL request payload extracted from an HTTP request.
///
/// GET-style requests carry their parameters in the URL query string,
/// POST-style requests in a JSON body. Extraction failures never surface
/// here; the adapter passes `None` instead and lets the engine answer
/// with its own protocol error for a missing query.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedQuery {
    /// Key-value pairs parsed from the URL query string.
    Params(BTreeMap<String, String>),
    /// A JSON document parsed from the request body.
    Json(serde_json::Value),
}

/// Everything the engine needs to execute one HTTP-borne GraphQL request.
pub struct EngineRequest<O> {
    pub method: http::Method,
    /// Engine configuration for this request, opaque to the adapter.
    pub options: Arc<O>,
    /// `None` when no query could be extracted from the request.
    pub query: Option<NormalizedQuery>,
    /// The head of the incoming HTTP request: URI, headers, extensions.
    pub parts: http::request::Parts,
}
