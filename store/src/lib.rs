//! Observable camera and notification permission state.
//!
//! [`PermissionStore`] holds the last status read from the OS for each
//! tracked permission, drives permission requests, and sends the user to
//! system settings when a permission can no longer be changed in-app.
//!
//! ```no_run
//! use permkit_lifecycle::LifecycleEmitter;
//! use permkit_permission::Permission;
//! use permkit_store::{Backend, PermissionStore, StoreOptions};
//!
//! # async fn run() {
//! let lifecycle = LifecycleEmitter::new();
//! let store = PermissionStore::new(Backend::system(), StoreOptions::new());
//! let (task, subscription) = store.start(&lifecycle);
//! # let _ = task;
//!
//! // Host: forward platform callbacks.
//! lifecycle.emit_name("active");
//!
//! if store.pending_count() > 0 {
//!     let _ = store.toggle_permission(Permission::Camera).await;
//! }
//! subscription.stop();
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod options;
mod snapshot;
mod store;

pub use error::StoreError;
pub use options::{PromptText, StoreOptions};
pub use snapshot::PermissionSnapshot;
pub use store::{
    Backend, LifecycleTask, PermissionStore, SettingsPromptOutcome, Subscription, ToggleOutcome,
};

pub use permkit_lifecycle::AppState;
pub use permkit_permission::{Permission, PermissionStatus, PlatformFamily};
