use std::{future::Future, sync::Arc};

use futures_util::future::BoxFuture;
use http::request::Parts;
use micrograph_engine::EngineError;

type OptionsFn<O> = dyn Fn(&Parts) -> BoxFuture<'static, Result<O, EngineError>> + Send + Sync;

/// Where the engine options for a request come from: a fixed value shared
/// by every request, or a function of the request head evaluated once per
/// request.
pub enum ConfigSource<O> {
    Static(Arc<O>),
    PerRequest(Arc<OptionsFn<O>>),
}

impl<O> Clone for ConfigSource<O> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(options) => Self::Static(options.clone()),
            Self::PerRequest(f) => Self::PerRequest(f.clone()),
        }
    }
}

impl<O> ConfigSource<O> {
    /// Derives the options from the incoming request head. The function
    /// may resolve immediately or suspend; a failure takes the same path
    /// as an engine error.
    pub fn per_request<F, Fut>(f: F) -> Self
    where
        F: Fn(&Parts) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<O, EngineError>> + Send + 'static,
    {
        Self::PerRequest(Arc::new(
            move |parts: &Parts| -> BoxFuture<'static, Result<O, EngineError>> { Box::pin(f(parts)) },
        ))
    }

    pub(crate) async fn resolve(&self, parts: &Parts) -> Result<Arc<O>, EngineError> {
        match self {
            Self::Static(options) => Ok(options.clone()),
            Self::PerRequest(f) => f(parts).await.map(Arc::new),
        }
    }
}

impl<O> From<O> for ConfigSource<O> {
    fn from(options: O) -> Self {
        Self::Static(Arc::new(options))
    }
}

impl<O> From<Arc<O>> for ConfigSource<O> {
    fn from(options: Arc<O>) -> Self {
        Self::Static(options)
    }
}
