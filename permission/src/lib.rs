//! Camera and notification permission handling.
//!
//! This crate names the two permissions an app tracks, maps each one to the
//! identifier the host OS understands, and defines the broker traits that
//! check, request and escalate to the system settings screen.

#![warn(missing_docs)]

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Platform-specific implementations.
pub mod sys;

pub use sys::{SystemBroker, SystemSettings};

/// Permissions tracked by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Access to device camera.
    Camera,
    /// Ability to deliver notifications.
    Notification,
}

impl Permission {
    /// Every tracked permission, camera first.
    pub const ALL: [Self; 2] = [Self::Camera, Self::Notification];

    /// Short name used by UI layers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Camera => "camera",
            Self::Notification => "notification",
        }
    }

    /// The OS-level identifier of this permission on `platform`.
    #[must_use]
    pub const fn id(self, platform: PlatformFamily) -> PermissionId {
        match (self, platform) {
            (Self::Camera, PlatformFamily::Android) => PermissionId::ANDROID_CAMERA,
            (Self::Camera, PlatformFamily::Ios) => PermissionId::IOS_CAMERA,
            (Self::Notification, PlatformFamily::Android) => PermissionId::ANDROID_RECEIVE_WAP_PUSH,
            (Self::Notification, PlatformFamily::Ios) => PermissionId::IOS_BLUETOOTH,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camera" => Ok(Self::Camera),
            "notification" => Ok(Self::Notification),
            _ => Err(PermissionError::UnknownPermission(s.to_string())),
        }
    }
}

/// The current status of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    /// Permission has been granted by the user.
    Granted,
    /// Permission was denied but can still be requested.
    Denied,
    /// Permission was denied and the OS will no longer prompt for it.
    /// Only the system settings screen can change it.
    Blocked,
    /// The feature is unavailable on this device, or it has not been read yet.
    #[default]
    Unavailable,
    /// Partial access (e.g. a limited photo selection on iOS).
    Limited,
}

impl PermissionStatus {
    /// Whether this status counts as granted.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Lowercase name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
            Self::Blocked => "blocked",
            Self::Unavailable => "unavailable",
            Self::Limited => "limited",
        }
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionStatus {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            "blocked" => Ok(Self::Blocked),
            "unavailable" => Ok(Self::Unavailable),
            "limited" => Ok(Self::Limited),
            other => Err(PermissionError::Platform(format!(
                "unrecognized permission status: {other}"
            ))),
        }
    }
}

/// The OS family whose identifier set is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    /// Android.
    Android,
    /// iOS.
    Ios,
}

impl PlatformFamily {
    /// The family this binary was compiled for.
    ///
    /// Anything that is not Android uses the iOS identifier set.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Ios
        }
    }
}

/// An OS-level permission identifier, as understood by the platform broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionId(&'static str);

impl PermissionId {
    /// `android.permission.CAMERA`
    pub const ANDROID_CAMERA: Self = Self("android.permission.CAMERA");
    /// `android.permission.RECEIVE_WAP_PUSH`
    pub const ANDROID_RECEIVE_WAP_PUSH: Self = Self("android.permission.RECEIVE_WAP_PUSH");
    /// `ios.permission.CAMERA`
    pub const IOS_CAMERA: Self = Self("ios.permission.CAMERA");
    /// `ios.permission.BLUETOOTH`
    pub const IOS_BLUETOOTH: Self = Self("ios.permission.BLUETOOTH");

    /// The raw identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PermissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Errors that can occur when checking or requesting permissions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The operation is not supported on this platform.
    #[error("permission not supported on this platform")]
    NotSupported,
    /// A permission name did not match any tracked permission.
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
    /// The underlying platform call failed.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Reads and requests permissions from the OS.
#[async_trait]
pub trait PermissionBroker: Send + Sync {
    /// Check the current status of a permission without prompting.
    ///
    /// # Errors
    /// Returns a `PermissionError` if the platform cannot be queried.
    async fn check(&self, id: PermissionId) -> Result<PermissionStatus, PermissionError>;

    /// Request a permission, which may show an OS dialog.
    ///
    /// If the permission has already been granted or blocked, this returns
    /// the current status without showing a prompt.
    ///
    /// # Errors
    /// Returns a `PermissionError` if the request cannot be made.
    async fn request(&self, id: PermissionId) -> Result<PermissionStatus, PermissionError>;
}

/// Navigates the user to this app's page in the system settings.
#[async_trait]
pub trait SettingsLauncher: Send + Sync {
    /// Open the settings screen.
    ///
    /// # Errors
    /// Returns a `PermissionError` if the screen could not be opened.
    async fn open_settings(&self) -> Result<(), PermissionError>;
}
