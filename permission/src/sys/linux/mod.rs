//! Linux permission implementation.
//!
//! On Linux, camera and notification access is handled at the system level:
//! - File permissions on `/dev/video*` (usually the `video` group)
//! - Desktop portals for Flatpak/Snap sandboxes
//!
//! There is no runtime prompt to drive, so both tracked permissions read as granted.

use crate::{PermissionError, PermissionId, PermissionStatus};

pub(super) async fn check(_id: PermissionId) -> Result<PermissionStatus, PermissionError> {
    Ok(PermissionStatus::Granted)
}

pub(super) async fn request(_id: PermissionId) -> Result<PermissionStatus, PermissionError> {
    // Sandboxed apps go through portals, which prompt on first device access.
    Ok(PermissionStatus::Granted)
}

pub(super) fn open_settings() -> Result<(), PermissionError> {
    super::launch("gnome-control-center", &["privacy"])
}
