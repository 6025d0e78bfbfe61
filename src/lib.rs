//! # Permkit
//!
//! Observable camera and notification permission state for mobile apps.
//!
//! Permkit keeps the last status the OS reported for each tracked permission,
//! re-reads it whenever the app returns to the foreground, drives permission
//! requests, and prompts the user to open system settings once a permission
//! can no longer be changed in-app.
//!
//! ## Features
//!
//! - `permission`: Permission types, OS identifiers and broker traits.
//! - `dialog`: Native confirmation dialogs.
//! - `lifecycle`: App foreground/background signal.
//! - `store`: The observable permission store (default, enables the rest).
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! permkit = { version = "0.1", features = ["store"] }
//! ```
//!
//! ```rust,no_run
//! use permkit::store::{Backend, Permission, PermissionStore, StoreOptions};
//!
//! async fn enable_camera() {
//!     let store = PermissionStore::new(Backend::system(), StoreOptions::new());
//!     store.refresh_all().await;
//!     if let Err(err) = store.toggle_permission(Permission::Camera).await {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

#[cfg(feature = "dialog")]
pub use permkit_dialog as dialog;

#[cfg(feature = "lifecycle")]
pub use permkit_lifecycle as lifecycle;

#[cfg(feature = "permission")]
pub use permkit_permission as permission;

#[cfg(feature = "store")]
pub use permkit_store as store;
