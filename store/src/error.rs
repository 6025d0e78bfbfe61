use permkit_permission::{Permission, PermissionError};
use thiserror::Error;

/// Errors surfaced by [`PermissionStore`](crate::PermissionStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The OS permission request failed.
    #[error("requesting {permission} permission failed: {source}")]
    Request {
        /// The permission being requested.
        permission: Permission,
        /// The broker's error.
        #[source]
        source: PermissionError,
    },
}
