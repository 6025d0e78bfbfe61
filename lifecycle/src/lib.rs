//! App lifecycle signal.
//!
//! Mobile platforms report foreground/background transitions through a
//! callback on the host side. The host forwards each one to a
//! [`LifecycleEmitter`], which fans the event out to every subscriber.

#![warn(missing_docs)]

use std::fmt;
use std::sync::{Arc, Mutex};

use async_channel::{Receiver, Sender, unbounded};
use log::{debug, warn};

/// The state an app can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppState {
    /// The app is in the foreground and receiving events.
    Active,
    /// The app is running in the background.
    Background,
    /// The app is transitioning, or obscured by a system overlay.
    Inactive,
    /// A platform state this crate does not know about.
    Other(String),
}

impl AppState {
    /// Whether the app is in the foreground.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// The platform's name for this state.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Background => "background",
            Self::Inactive => "inactive",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for AppState {
    fn from(name: &str) -> Self {
        match name {
            "active" => Self::Active,
            "background" => Self::Background,
            "inactive" => Self::Inactive,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that reports app state transitions.
pub trait LifecycleSource: Send + Sync {
    /// Open a new stream of state transitions.
    ///
    /// The stream ends when the source is dropped.
    fn subscribe(&self) -> Receiver<AppState>;
}

/// An in-process lifecycle source fed by the host's platform callback.
#[derive(Clone, Default)]
pub struct LifecycleEmitter {
    subscribers: Arc<Mutex<Vec<Sender<AppState>>>>,
}

impl fmt::Debug for LifecycleEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleEmitter")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl LifecycleEmitter {
    /// Create an emitter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a transition to every live subscriber.
    ///
    /// Subscribers whose receiver was dropped are removed.
    pub fn emit(&self, state: AppState) {
        let mut subscribers = self
            .subscribers
            .lock()
            .expect("lifecycle subscriber mutex poisoned");

        debug!("app state changed to {state}");
        subscribers.retain(|sender| match sender.try_send(state.clone()) {
            Ok(()) => true,
            Err(err) if err.is_closed() => false,
            Err(err) => {
                warn!("dropping app state event: {err}");
                true
            }
        });
    }

    /// Deliver a transition given by its platform name, e.g. `"active"`.
    pub fn emit_name(&self, name: &str) {
        self.emit(AppState::from(name));
    }

    /// Number of subscribers that were live at the last emit.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .expect("lifecycle subscriber mutex poisoned")
            .len()
    }

    /// Drop every subscriber, ending their streams.
    pub fn close(&self) {
        self.subscribers
            .lock()
            .expect("lifecycle subscriber mutex poisoned")
            .clear();
    }
}

impl LifecycleSource for LifecycleEmitter {
    fn subscribe(&self) -> Receiver<AppState> {
        let (sender, receiver) = unbounded();
        self.subscribers
            .lock()
            .expect("lifecycle subscriber mutex poisoned")
            .push(sender);
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_platform_names() {
        assert_eq!(AppState::from("active"), AppState::Active);
        assert_eq!(AppState::from("background"), AppState::Background);
        assert_eq!(AppState::from("inactive"), AppState::Inactive);
        assert_eq!(
            AppState::from("extension"),
            AppState::Other("extension".into())
        );
        assert!(AppState::Active.is_active());
        assert!(!AppState::Other("active-ish".into()).is_active());
    }

    #[tokio::test]
    async fn fans_out_to_every_subscriber() {
        let emitter = LifecycleEmitter::new();
        let first = emitter.subscribe();
        let second = emitter.subscribe();

        emitter.emit_name("active");

        assert_eq!(first.recv().await.unwrap(), AppState::Active);
        assert_eq!(second.recv().await.unwrap(), AppState::Active);
    }

    #[test]
    fn prunes_dropped_subscribers() {
        let emitter = LifecycleEmitter::new();
        let kept = emitter.subscribe();
        drop(emitter.subscribe());
        assert_eq!(emitter.subscriber_count(), 2);

        emitter.emit(AppState::Background);

        assert_eq!(emitter.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), AppState::Background);
    }

    #[tokio::test]
    async fn close_ends_streams() {
        let emitter = LifecycleEmitter::new();
        let receiver = emitter.subscribe();
        emitter.close();
        assert!(receiver.recv().await.is_err());
    }
}
