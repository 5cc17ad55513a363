use thiserror::Error;

/// Failure to resolve a string to a [`NamedColor`](crate::NamedColor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseNamedColorError {
    #[error("empty color name")]
    Empty,
    #[error("unknown color name")]
    Unknown,
}
