use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{extract::State, response::IntoResponse, routing::any, Router};
use micrograph_engine::QueryEngine;
use micrograph_engine_axum::{ConfigSource, GraphqlHandler, DEFAULT_REQUEST_BODY_LIMIT};
use tokio::signal;

use crate::Error;

const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000);
const DEFAULT_PATH: &str = "/graphql";

/// Start parameters for the GraphQL endpoint.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// The GraphQL endpoint listen address, `127.0.0.1:5000` by default.
    pub listen_addr: Option<SocketAddr>,
    /// Route of the GraphQL endpoint, `/graphql` by default.
    pub path: Option<String>,
    /// Maximum size of request bodies in bytes, 2 MiB by default.
    pub request_body_limit: Option<usize>,
}

/// Builds the handler, binds the listen address and serves incoming
/// GraphQL requests until a termination signal arrives.
///
/// The route accepts any HTTP method; the adapter reads POST bodies and
/// treats everything else as query-string requests.
///
/// # Errors
///
/// Fails when the handler configuration is invalid or the address cannot
/// be bound. Nothing that happens on a request afterwards is reported
/// here.
pub async fn serve<E: QueryEngine>(
    config: ServerConfig,
    engine: Arc<E>,
    options: impl Into<ConfigSource<E::Options>>,
) -> Result<(), Error> {
    let path = config.path.as_deref().unwrap_or(DEFAULT_PATH);

    let handler = GraphqlHandler::builder(engine)
        .options(options)
        .request_body_limit(config.request_body_limit.unwrap_or(DEFAULT_REQUEST_BODY_LIMIT))
        .build()?;

    let router = Router::new().route(path, any(execute::<E>)).with_state(handler);

    let addr = config.listen_addr.unwrap_or(DEFAULT_LISTEN_ADDRESS);

    bind(addr, path, router).await
}

async fn bind(addr: SocketAddr, path: &str, router: Router<()>) -> Result<(), Error> {
    let app = router.into_make_service();

    let handle = axum_server::Handle::new();

    // Spawn a task to gracefully shutdown server.
    tokio::spawn(graceful_shutdown(handle.clone()));

    tracing::info!("GraphQL endpoint exposed at http://{addr}{path}");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app)
        .await
        .map_err(Error::Server)
}

async fn execute<E: QueryEngine>(
    State(handler): State<GraphqlHandler<E>>,
    request: axum::extract::Request,
) -> impl IntoResponse {
    handler.execute(request).await
}

/// Waits for a termination signal (Ctrl+C or SIGTERM) and initiates a
/// graceful shutdown, letting in-flight requests finish.
async fn graceful_shutdown(handle: axum_server::Handle) {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down gracefully...");
    handle.graceful_shutdown(Some(std::time::Duration::from_secs(3)));
}
