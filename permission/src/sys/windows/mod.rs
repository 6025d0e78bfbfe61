//! Windows permission implementation.

use crate::{PermissionError, PermissionId, PermissionStatus};

pub(super) async fn check(_id: PermissionId) -> Result<PermissionStatus, PermissionError> {
    // Desktop apps are not gated by the privacy toggles the way packaged apps are
    Ok(PermissionStatus::Granted)
}

pub(super) async fn request(id: PermissionId) -> Result<PermissionStatus, PermissionError> {
    check(id).await
}

pub(super) fn open_settings() -> Result<(), PermissionError> {
    super::launch("cmd", &["/C", "start", "", "ms-settings:privacy"])
}
