use std::sync::Arc;

use axum::body::Body;
use http::{Response, StatusCode};
use micrograph_engine::{EngineError, EngineErrorKind, EngineRequest, EngineResponse, QueryEngine};

use crate::{extract, headers::set_headers, ConfigSource, ConfigurationError};

/// Default cap on request body size, matching common gateway defaults.
pub const DEFAULT_REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// The per-request entry point: extracts the query, resolves the engine
/// options, invokes the engine and maps the outcome onto a complete HTTP
/// response.
///
/// Handlers are cheap to clone and hold no per-request state; the only
/// thing shared across requests is the engine and its configuration
/// source, both captured at construction time.
pub struct GraphqlHandler<E: QueryEngine> {
    engine: Arc<E>,
    options: ConfigSource<E::Options>,
    request_body_limit: usize,
}

impl<E: QueryEngine> Clone for GraphqlHandler<E> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            options: self.options.clone(),
            request_body_limit: self.request_body_limit,
        }
    }
}

impl<E: QueryEngine> GraphqlHandler<E> {
    pub fn builder(engine: Arc<E>) -> GraphqlHandlerBuilder<E> {
        GraphqlHandlerBuilder {
            engine,
            options: None,
            options_supplied: 0,
            request_body_limit: DEFAULT_REQUEST_BODY_LIMIT,
        }
    }

    /// Serves one GraphQL request.
    ///
    /// Never fails: every per-request error becomes an HTTP response with
    /// the engine-provided status code, or 500 when it carries none.
    pub async fn execute(&self, request: axum::extract::Request) -> axum::response::Response {
        let (parts, body) = request.into_parts();

        let query = extract::normalized_query(&parts, body, self.request_body_limit).await;

        let options = match self.options.resolve(&parts).await {
            Ok(options) => options,
            Err(err) => return error_response(err),
        };

        let request = EngineRequest {
            method: parts.method.clone(),
            options,
            query,
            parts,
        };

        match self.engine.run_http_query(request).await {
            Ok(EngineResponse {
                graphql_response,
                headers,
            }) => {
                let mut response = Response::new(Body::from(graphql_response));
                set_headers(response.headers_mut(), &headers);
                response
            }
            Err(err) => error_response(err),
        }
    }
}

fn error_response(error: EngineError) -> axum::response::Response {
    tracing::debug!("engine rejected the request: {error}");

    let EngineError {
        message,
        status_code,
        headers,
        kind,
    } = error;

    let mut response = Response::new(Body::from(message));
    *response.status_mut() = status_code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    // Only protocol-level errors get to shape the response headers.
    if kind == EngineErrorKind::HttpQuery {
        if let Some(headers) = headers {
            set_headers(response.headers_mut(), &headers);
        }
    }

    response
}

/// Builds a [`GraphqlHandler`], validating its configuration before any
/// request is accepted.
pub struct GraphqlHandlerBuilder<E: QueryEngine> {
    engine: Arc<E>,
    options: Option<ConfigSource<E::Options>>,
    options_supplied: usize,
    request_body_limit: usize,
}

impl<E: QueryEngine> GraphqlHandlerBuilder<E> {
    /// Supplies the engine options. Must be called exactly once;
    /// [`build`] reports the exact number of values received otherwise.
    ///
    /// [`build`]: GraphqlHandlerBuilder::build
    pub fn options(mut self, options: impl Into<ConfigSource<E::Options>>) -> Self {
        self.options_supplied += 1;
        self.options = Some(options.into());
        self
    }

    pub fn request_body_limit(mut self, bytes: usize) -> Self {
        self.request_body_limit = bytes;
        self
    }

    pub fn build(self) -> Result<GraphqlHandler<E>, ConfigurationError> {
        match (self.options, self.options_supplied) {
            (Some(options), 1) => Ok(GraphqlHandler {
                engine: self.engine,
                options,
                request_body_limit: self.request_body_limit,
            }),
            (Some(_), supplied) => Err(ConfigurationError::ExtraOptions(supplied)),
            (None, _) => Err(ConfigurationError::MissingOptions),
        }
    }
}
