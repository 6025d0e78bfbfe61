//! Platform-specific permission implementations.
//!
//! Desktop targets are served here. Mobile hosts bridge their native
//! permission library through [`PermissionBroker`] and [`SettingsLauncher`]
//! and hand those to the store instead.

use async_trait::async_trait;

use crate::{PermissionBroker, PermissionError, PermissionId, PermissionStatus, SettingsLauncher};

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        mod windows;
        use self::windows as platform;
    } else if #[cfg(target_os = "linux")] {
        mod linux;
        use self::linux as platform;
    } else {
        mod fallback;
        use self::fallback as platform;
    }
}

/// The permission broker for the current desktop platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBroker;

#[async_trait]
impl PermissionBroker for SystemBroker {
    async fn check(&self, id: PermissionId) -> Result<PermissionStatus, PermissionError> {
        platform::check(id).await
    }

    async fn request(&self, id: PermissionId) -> Result<PermissionStatus, PermissionError> {
        platform::request(id).await
    }
}

/// Opens the platform's privacy settings screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSettings;

#[async_trait]
impl SettingsLauncher for SystemSettings {
    async fn open_settings(&self) -> Result<(), PermissionError> {
        platform::open_settings()
    }
}

/// Spawn `program`, mapping launch failures to platform errors.
///
/// The child is reaped on a helper thread once it exits.
#[cfg_attr(
    not(any(target_os = "windows", target_os = "linux", target_os = "macos")),
    allow(dead_code)
)]
fn launch(program: &str, args: &[&str]) -> Result<(), PermissionError> {
    std::process::Command::new(program)
        .args(args)
        .spawn()
        .map(|mut child| {
            std::thread::spawn(move || child.wait());
        })
        .map_err(|e| PermissionError::Platform(format!("failed to launch {program}: {e}")))
}
