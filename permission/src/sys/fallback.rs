//! Targets without a built-in broker.

use log::debug;

use crate::{PermissionError, PermissionId, PermissionStatus};

pub(super) async fn check(id: PermissionId) -> Result<PermissionStatus, PermissionError> {
    debug!("no system broker for {id}, reporting unavailable");
    Ok(PermissionStatus::Unavailable)
}

pub(super) async fn request(_id: PermissionId) -> Result<PermissionStatus, PermissionError> {
    Err(PermissionError::NotSupported)
}

#[cfg(target_os = "macos")]
pub(super) fn open_settings() -> Result<(), PermissionError> {
    super::launch(
        "open",
        &["x-apple.systempreferences:com.apple.preference.security?Privacy"],
    )
}

#[cfg(not(target_os = "macos"))]
pub(super) fn open_settings() -> Result<(), PermissionError> {
    Err(PermissionError::NotSupported)
}
