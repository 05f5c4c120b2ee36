use thiserror::Error;

/// Errors crossing the network boundary. Both kinds are caught at the
/// call site, logged, and swallowed; the view keeps its last known-good
/// data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("search request failed: {0}")]
    SearchFetch(String),

    #[error("player directory request failed: {0}")]
    DirectoryFetch(String),
}
