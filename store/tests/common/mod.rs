#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use permkit_dialog::{ConfirmDialog, DialogError, DialogPresenter};
use permkit_permission::{
    PermissionBroker, PermissionError, PermissionId, PermissionStatus, PlatformFamily,
    SettingsLauncher,
};
use permkit_store::{Backend, PermissionStore, StoreOptions};

/// A broker over an in-memory OS permission table.
///
/// Requests answer with the scripted result and, when they succeed, write it
/// back into the table the way a real OS would.
#[derive(Debug, Default)]
pub struct FakeBroker {
    os: Mutex<HashMap<PermissionId, Result<PermissionStatus, PermissionError>>>,
    requests: Mutex<HashMap<PermissionId, Result<PermissionStatus, PermissionError>>>,
    checked: Mutex<Vec<PermissionId>>,
    requested: Mutex<Vec<PermissionId>>,
}

impl FakeBroker {
    pub fn set_os(&self, id: PermissionId, status: PermissionStatus) {
        self.os.lock().unwrap().insert(id, Ok(status));
    }

    pub fn fail_check(&self, id: PermissionId, message: &str) {
        self.os
            .lock()
            .unwrap()
            .insert(id, Err(PermissionError::Platform(message.to_string())));
    }

    pub fn answer_request(&self, id: PermissionId, result: Result<PermissionStatus, PermissionError>) {
        self.requests.lock().unwrap().insert(id, result);
    }

    pub fn checked(&self) -> Vec<PermissionId> {
        self.checked.lock().unwrap().clone()
    }

    pub fn requested(&self) -> Vec<PermissionId> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PermissionBroker for FakeBroker {
    async fn check(&self, id: PermissionId) -> Result<PermissionStatus, PermissionError> {
        self.checked.lock().unwrap().push(id);
        self.os
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or(Ok(PermissionStatus::Unavailable))
    }

    async fn request(&self, id: PermissionId) -> Result<PermissionStatus, PermissionError> {
        self.requested.lock().unwrap().push(id);
        let result = self
            .requests
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or(Ok(PermissionStatus::Denied));
        if let Ok(status) = &result {
            self.set_os(id, *status);
        }
        result
    }
}

#[derive(Debug, Default)]
pub struct FakeSettings {
    opened: Mutex<usize>,
    fail: Mutex<bool>,
}

impl FakeSettings {
    pub fn fail(&self) {
        *self.fail.lock().unwrap() = true;
    }

    pub fn opened(&self) -> usize {
        *self.opened.lock().unwrap()
    }
}

#[async_trait]
impl SettingsLauncher for FakeSettings {
    async fn open_settings(&self) -> Result<(), PermissionError> {
        *self.opened.lock().unwrap() += 1;
        if *self.fail.lock().unwrap() {
            Err(PermissionError::Platform("no settings activity".into()))
        } else {
            Ok(())
        }
    }
}

/// Records every dialog and answers with a scripted button.
#[derive(Debug)]
pub struct FakePresenter {
    answer: Mutex<Result<Option<usize>, DialogError>>,
    shown: Mutex<Vec<ConfirmDialog>>,
}

impl Default for FakePresenter {
    fn default() -> Self {
        Self {
            answer: Mutex::new(Ok(Some(0))),
            shown: Mutex::new(Vec::new()),
        }
    }
}

impl FakePresenter {
    pub fn answer(&self, answer: Result<Option<usize>, DialogError>) {
        *self.answer.lock().unwrap() = answer;
    }

    pub fn shown(&self) -> Vec<ConfirmDialog> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl DialogPresenter for FakePresenter {
    async fn present(&self, dialog: ConfirmDialog) -> Result<Option<usize>, DialogError> {
        self.shown.lock().unwrap().push(dialog);
        self.answer.lock().unwrap().clone()
    }
}

pub struct Harness {
    pub store: PermissionStore,
    pub broker: Arc<FakeBroker>,
    pub settings: Arc<FakeSettings>,
    pub presenter: Arc<FakePresenter>,
}

impl Harness {
    pub fn new(platform: PlatformFamily) -> Self {
        let broker = Arc::new(FakeBroker::default());
        let settings = Arc::new(FakeSettings::default());
        let presenter = Arc::new(FakePresenter::default());
        let backend = Backend::new(broker.clone(), settings.clone(), presenter.clone());
        let store = PermissionStore::new(backend, StoreOptions::new().with_platform(platform));

        Self {
            store,
            broker,
            settings,
            presenter,
        }
    }

    pub fn android() -> Self {
        Self::new(PlatformFamily::Android)
    }
}
