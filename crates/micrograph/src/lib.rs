//! One import surface for serving GraphQL over HTTP: the engine boundary
//! contract, the axum adapter, and a small server wiring them together.
//!
//! Forwarded symbols are enumerated explicitly so additions to the
//! underlying crates never collide silently.

mod error;
mod server;

pub use error::Error;
pub use server::{serve, ServerConfig};

// Engine boundary contract.
pub use micrograph_engine::{
    EngineError, EngineErrorKind, EngineRequest, EngineResponse, NormalizedQuery, QueryEngine,
};

// Adapter surface.
pub use micrograph_engine_axum::{
    set_headers, BufferedPayload, ConfigSource, ConfigurationError, GraphqlHandler,
    GraphqlHandlerBuilder, DEFAULT_REQUEST_BODY_LIMIT,
};
