use std::fmt;
use std::sync::{Arc, Mutex};

use async_channel::{Receiver, Sender, unbounded};
use futures::future::{AbortHandle, Abortable, BoxFuture};
use futures::FutureExt;
use log::{debug, warn};
use permkit_dialog::{ConfirmDialog, DialogButton, DialogPresenter, DialogType, NativePresenter};
use permkit_lifecycle::{AppState, LifecycleSource};
use permkit_permission::{
    Permission, PermissionBroker, PermissionId, PermissionStatus, SettingsLauncher, SystemBroker,
    SystemSettings,
};

use crate::{PermissionSnapshot, StoreError, StoreOptions};

/// Position of the open-settings button on the settings prompt; cancel comes first.
const OPEN_SETTINGS_BUTTON: usize = 1;

/// The OS collaborators a [`PermissionStore`] talks to.
#[derive(Clone)]
pub struct Backend {
    /// Checks and requests permissions.
    pub broker: Arc<dyn PermissionBroker>,
    /// Opens the system settings screen.
    pub settings: Arc<dyn SettingsLauncher>,
    /// Shows the settings prompt.
    pub presenter: Arc<dyn DialogPresenter>,
}

impl Backend {
    /// Bundle the given collaborators.
    #[must_use]
    pub fn new(
        broker: Arc<dyn PermissionBroker>,
        settings: Arc<dyn SettingsLauncher>,
        presenter: Arc<dyn DialogPresenter>,
    ) -> Self {
        Self {
            broker,
            settings,
            presenter,
        }
    }

    /// The built-in brokers and native dialogs of the current platform.
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            Arc::new(SystemBroker),
            Arc::new(SystemSettings),
            Arc::new(NativePresenter),
        )
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend").finish_non_exhaustive()
    }
}

/// What the user did with the settings prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPromptOutcome {
    /// The user closed the prompt.
    Cancelled,
    /// The user chose to open settings.
    OpenSettings,
    /// The prompt could not be shown.
    NotShown,
}

/// What a toggle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The permission was already granted, so the settings prompt was shown.
    Prompted(SettingsPromptOutcome),
    /// The permission was requested from the OS with this result.
    Requested(PermissionStatus),
}

/// Future that keeps a store in sync with the app lifecycle.
///
/// Returned by [`PermissionStore::start`]; the host spawns it on its executor.
pub type LifecycleTask = BoxFuture<'static, ()>;

/// Disposer for a running [`LifecycleTask`].
#[derive(Debug, Clone)]
pub struct Subscription {
    handle: AbortHandle,
}

impl Subscription {
    /// Stop listening for lifecycle events.
    ///
    /// An in-flight refresh is abandoned at its next suspension point.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether [`stop`](Self::stop) has been called.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.handle.is_aborted()
    }
}

struct Shared {
    backend: Backend,
    options: StoreOptions,
    snapshot: Mutex<PermissionSnapshot>,
    observers: Mutex<Vec<Sender<PermissionSnapshot>>>,
}

/// Observable camera and notification permission state.
///
/// Both statuses start out [`PermissionStatus::Unavailable`] and are read
/// from the OS by [`refresh_all`](Self::refresh_all). Clones share state.
#[derive(Clone)]
pub struct PermissionStore {
    shared: Arc<Shared>,
}

impl fmt::Debug for PermissionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionStore")
            .field("snapshot", &self.snapshot())
            .field("options", &self.shared.options)
            .finish_non_exhaustive()
    }
}

impl PermissionStore {
    /// Create a store. Nothing is read from the OS until
    /// [`start`](Self::start) or [`refresh_all`](Self::refresh_all).
    #[must_use]
    pub fn new(backend: Backend, options: StoreOptions) -> Self {
        Self {
            shared: Arc::new(Shared {
                backend,
                options,
                snapshot: Mutex::new(PermissionSnapshot::default()),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Current status of `permission`.
    #[must_use]
    pub fn status(&self, permission: Permission) -> PermissionStatus {
        self.snapshot().get(permission)
    }

    /// Current status of every tracked permission.
    #[must_use]
    pub fn snapshot(&self) -> PermissionSnapshot {
        *self
            .shared
            .snapshot
            .lock()
            .expect("permission snapshot mutex poisoned")
    }

    /// Number of tracked permissions that are not granted.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.snapshot().pending_count()
    }

    /// Receive a snapshot every time a status changes.
    pub fn subscribe(&self) -> Receiver<PermissionSnapshot> {
        let (sender, receiver) = unbounded();
        self.shared
            .observers
            .lock()
            .expect("permission observer mutex poisoned")
            .push(sender);
        receiver
    }

    /// Re-read both statuses from the OS.
    ///
    /// The two checks run concurrently and are applied together. A failed
    /// check leaves its status untouched.
    pub async fn refresh_all(&self) {
        let (camera, notification) = futures::join!(
            self.check(Permission::Camera),
            self.check(Permission::Notification)
        );

        let updates = [
            (Permission::Camera, camera),
            (Permission::Notification, notification),
        ];
        self.apply(updates.into_iter().filter_map(|(p, s)| Some((p, s?))));
    }

    /// Request `permission` from the OS.
    ///
    /// A blocked result shows the settings prompt and leaves the stored
    /// statuses alone. Any other result resynchronizes both statuses.
    ///
    /// # Errors
    /// Returns [`StoreError::Request`] if the broker's request fails.
    pub async fn request_permission(
        &self,
        permission: Permission,
    ) -> Result<PermissionStatus, StoreError> {
        let id = self.id(permission);
        debug!("requesting {permission} permission ({id})");

        let result = self
            .shared
            .backend
            .broker
            .request(id)
            .await
            .map_err(|source| StoreError::Request { permission, source })?;

        if result == PermissionStatus::Blocked {
            self.prompt_open_settings().await;
        } else {
            self.refresh_all().await;
        }
        Ok(result)
    }

    /// Open the system settings screen, logging any failure.
    pub async fn open_app_settings(&self) {
        if let Err(err) = self.shared.backend.settings.open_settings().await {
            warn!("cannot open settings: {err}");
        }
    }

    /// Entry point for a UI toggle on `permission`.
    ///
    /// Granted permissions can only be revoked in settings, so those get the
    /// settings prompt; anything else is requested.
    ///
    /// # Errors
    /// Returns [`StoreError::Request`] if the broker's request fails.
    pub async fn toggle_permission(
        &self,
        permission: Permission,
    ) -> Result<ToggleOutcome, StoreError> {
        if self.status(permission).is_granted() {
            Ok(ToggleOutcome::Prompted(self.prompt_open_settings().await))
        } else {
            self.request_permission(permission)
                .await
                .map(ToggleOutcome::Requested)
        }
    }

    /// Ask the user whether to open the system settings screen.
    ///
    /// The prompt cannot be dismissed without picking a button.
    pub async fn prompt_open_settings(&self) -> SettingsPromptOutcome {
        let dialog = self.settings_dialog();
        let choice = self
            .shared
            .backend
            .presenter
            .present(dialog.clone())
            .await
            .and_then(|choice| dialog.validate_choice(choice));

        match choice {
            Ok(Some(OPEN_SETTINGS_BUTTON)) => {
                self.open_app_settings().await;
                SettingsPromptOutcome::OpenSettings
            }
            Ok(_) => SettingsPromptOutcome::Cancelled,
            Err(err) => {
                warn!("cannot show settings prompt: {err}");
                SettingsPromptOutcome::NotShown
            }
        }
    }

    /// React to an app state transition. Returns whether a refresh ran.
    pub async fn handle_app_state_change(&self, state: &AppState) -> bool {
        if !state.is_active() {
            return false;
        }
        debug!("app became active, refreshing permissions");
        self.refresh_all().await;
        true
    }

    /// Start tracking the app lifecycle.
    ///
    /// The returned task refreshes once, then refreshes again on every
    /// transition to the foreground. It runs until the source closes or the
    /// [`Subscription`] is stopped.
    pub fn start(&self, source: &dyn LifecycleSource) -> (LifecycleTask, Subscription) {
        let events = source.subscribe();
        let (handle, registration) = AbortHandle::new_pair();
        let store = self.clone();

        let run = async move {
            store.refresh_all().await;
            while let Ok(state) = events.recv().await {
                store.handle_app_state_change(&state).await;
            }
            debug!("lifecycle source closed");
        };

        let task = Abortable::new(run, registration).map(|_| ()).boxed();
        (task, Subscription { handle })
    }

    fn id(&self, permission: Permission) -> PermissionId {
        permission.id(self.shared.options.platform)
    }

    async fn check(&self, permission: Permission) -> Option<PermissionStatus> {
        let id = self.id(permission);
        match self.shared.backend.broker.check(id).await {
            Ok(status) => Some(status),
            Err(err) => {
                warn!("checking {permission} permission ({id}) failed: {err}");
                None
            }
        }
    }

    fn settings_dialog(&self) -> ConfirmDialog {
        let prompt = &self.shared.options.prompt;
        ConfirmDialog::new(&prompt.title, &prompt.message)
            .with_type(DialogType::Warning)
            .with_button(DialogButton::cancel(&prompt.cancel_label))
            .with_button(DialogButton::new(&prompt.open_settings_label))
            .cancelable(false)
    }

    fn apply(&self, updates: impl IntoIterator<Item = (Permission, PermissionStatus)>) {
        let snapshot = {
            let mut snapshot = self
                .shared
                .snapshot
                .lock()
                .expect("permission snapshot mutex poisoned");
            let mut changed = false;
            for (permission, status) in updates {
                changed |= snapshot.set(permission, status);
            }
            if !changed {
                return;
            }
            *snapshot
        };

        debug!(
            "permissions updated: camera={}, notification={}",
            snapshot.camera, snapshot.notification
        );
        self.notify(snapshot);
    }

    fn notify(&self, snapshot: PermissionSnapshot) {
        let mut observers = self
            .shared
            .observers
            .lock()
            .expect("permission observer mutex poisoned");
        observers.retain(|sender| match sender.try_send(snapshot) {
            Ok(()) => true,
            Err(err) if err.is_closed() => false,
            Err(err) => {
                warn!("dropping permission snapshot: {err}");
                true
            }
        });
    }
}
