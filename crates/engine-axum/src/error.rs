/// Handler construction failures.
///
/// These are the only errors the adapter surfaces as `Err`; everything
/// that happens while serving a request is converted into an HTTP
/// response instead.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No engine options were supplied to the builder.
    #[error("the GraphQL handler requires engine options")]
    MissingOptions,
    /// The builder received more than one options value.
    #[error("the GraphQL handler expects exactly one options value, got {0}")]
    ExtraOptions(usize),
}
