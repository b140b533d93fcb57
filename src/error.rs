use thiserror::Error;

/// Errors surfaced by the popup menu API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopupMenuError {
    /// A caller-supplied value failed validation. The call site must be
    /// fixed; nothing is retried.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
