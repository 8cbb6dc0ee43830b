/// A successfully executed query: the serialized response document plus
/// the headers the engine wants on the HTTP response.
#[derive(Debug, Clone, Default)]
pub struct EngineResponse {
    pub graphql_response: String,
    pub headers: http::HeaderMap,
}
