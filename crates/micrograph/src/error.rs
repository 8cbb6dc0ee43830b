use micrograph_engine_axum::ConfigurationError;

/// Errors that can prevent the server from starting. Per-request
/// failures never surface here; they are answered over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The handler was misconfigured
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// Cannot start the HTTP server
    #[error("starting server: {0}")]
    Server(#[source] std::io::Error),
}
