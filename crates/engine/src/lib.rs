//! The boundary contract between the HTTP adapter and a GraphQL
//! query-processing engine.
//!
//! The engine itself lives elsewhere; this crate only fixes the shape of
//! what crosses the boundary: a request descriptor going in, a payload
//! with response headers (or an error) coming out.

mod error;
mod request;
mod response;

pub use error::{EngineError, EngineErrorKind};
pub use request::{EngineRequest, NormalizedQuery};
pub use response::EngineResponse;

use async_trait::async_trait;

/// A GraphQL query-processing engine.
///
/// Implementations parse, validate and execute the query carried by the
/// descriptor. GraphQL-level errors are expected to surface inside a
/// successful [`EngineResponse`] payload; [`EngineError`] is reserved for
/// failures that prevent producing a response document at all.
#[async_trait]
pub trait QueryEngine: Send + Sync + 'static {
    /// Engine-specific configuration, resolved per request by the adapter
    /// and passed through opaquely.
    type Options: Send + Sync + 'static;

    async fn run_http_query(
        &self,
        request: EngineRequest<Self::Options>,
    ) -> Result<EngineResponse, EngineError>;
}
