//! Adapts a [`QueryEngine`] to axum.
//!
//! The adapter extracts a GraphQL query from the incoming request (URL
//! query string for GET-style requests, JSON body for POST), hands it to
//! the engine together with the resolved engine options, and maps the
//! engine's outcome onto a complete HTTP response. It contains no GraphQL
//! semantics of its own.
//!
//! [`QueryEngine`]: micrograph_engine::QueryEngine

mod error;
mod extract;
mod handler;
mod headers;
mod options;

pub use error::ConfigurationError;
pub use extract::BufferedPayload;
pub use handler::{GraphqlHandler, GraphqlHandlerBuilder, DEFAULT_REQUEST_BODY_LIMIT};
pub use headers::set_headers;
pub use options::ConfigSource;
