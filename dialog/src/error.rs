use thiserror::Error;

/// Errors that can occur when presenting dialogs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    /// The dialog was dismissed without a button although it is not cancelable.
    #[error("Operation cancelled")]
    Cancelled,

    /// An error occurred in the underlying platform implementation.
    #[error("Platform error: {0}")]
    PlatformError(String),

    /// The requested feature is not supported on this platform.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// The presenter reported a button that the dialog does not have.
    #[error("Invalid button index: {0}")]
    InvalidChoice(usize),
}
