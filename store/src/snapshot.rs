use permkit_permission::{Permission, PermissionStatus};
use serde::{Deserialize, Serialize};

/// The status of every tracked permission at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    /// Camera status.
    pub camera: PermissionStatus,
    /// Notification status.
    pub notification: PermissionStatus,
}

impl PermissionSnapshot {
    /// Status of `permission`.
    #[must_use]
    pub const fn get(&self, permission: Permission) -> PermissionStatus {
        match permission {
            Permission::Camera => self.camera,
            Permission::Notification => self.notification,
        }
    }

    /// Replace the status of `permission`, returning whether it changed.
    pub fn set(&mut self, permission: Permission, status: PermissionStatus) -> bool {
        let slot = match permission {
            Permission::Camera => &mut self.camera,
            Permission::Notification => &mut self.notification,
        };
        let changed = *slot != status;
        *slot = status;
        changed
    }

    /// Number of tracked permissions not yet granted.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        Permission::ALL
            .into_iter()
            .filter(|p| !self.get(*p).is_granted())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unavailable() {
        let snapshot = PermissionSnapshot::default();
        assert_eq!(snapshot.camera, PermissionStatus::Unavailable);
        assert_eq!(snapshot.notification, PermissionStatus::Unavailable);
        assert_eq!(snapshot.pending_count(), 2);
    }

    #[test]
    fn pending_count_counts_non_granted() {
        let mut snapshot = PermissionSnapshot::default();
        snapshot.set(Permission::Camera, PermissionStatus::Granted);
        snapshot.set(Permission::Notification, PermissionStatus::Denied);
        assert_eq!(snapshot.pending_count(), 1);

        snapshot.set(Permission::Notification, PermissionStatus::Granted);
        assert_eq!(snapshot.pending_count(), 0);

        snapshot.set(Permission::Camera, PermissionStatus::Limited);
        assert_eq!(snapshot.pending_count(), 1);
    }

    #[test]
    fn set_reports_changes() {
        let mut snapshot = PermissionSnapshot::default();
        assert!(snapshot.set(Permission::Camera, PermissionStatus::Blocked));
        assert!(!snapshot.set(Permission::Camera, PermissionStatus::Blocked));
        assert_eq!(snapshot.get(Permission::Camera), PermissionStatus::Blocked);
        assert_eq!(
            snapshot.get(Permission::Notification),
            PermissionStatus::Unavailable
        );
    }

    #[test]
    fn serializes_for_ui_bridges() {
        let snapshot = PermissionSnapshot {
            camera: PermissionStatus::Granted,
            notification: PermissionStatus::Blocked,
        };
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "camera": "granted", "notification": "blocked" })
        );
    }
}
