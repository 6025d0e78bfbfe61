//! Native confirmation dialogs with labelled buttons.

#![warn(missing_docs)]

use async_trait::async_trait;

mod error;
/// Platform-specific implementations.
pub mod sys;

pub use error::DialogError;

/// Types of dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogType {
    /// Information dialog.
    #[default]
    Info,
    /// Warning dialog.
    Warning,
    /// Error dialog.
    Error,
}

/// How a button is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonRole {
    /// Backs out of the dialog.
    Cancel,
    /// A regular action.
    #[default]
    Default,
}

/// A button shown on a [`ConfirmDialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    /// Label of the button.
    pub label: String,
    /// Rendering role of the button.
    pub role: ButtonRole,
}

impl DialogButton {
    /// Create a button with the default role.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Default,
        }
    }

    /// Create a cancel button.
    pub fn cancel(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            role: ButtonRole::Cancel,
        }
    }
}

/// A modal dialog offering an ordered list of buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    /// Title of the dialog.
    pub title: String,
    /// Message content of the dialog.
    pub message: String,
    /// Type/Icon of the dialog.
    pub type_: DialogType,
    /// Buttons, in display order.
    pub buttons: Vec<DialogButton>,
    /// Whether a tap outside the buttons may dismiss the dialog.
    pub cancelable: bool,
}

impl ConfirmDialog {
    /// Create a cancelable Info dialog without buttons.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            type_: DialogType::Info,
            buttons: Vec::new(),
            cancelable: true,
        }
    }

    /// Set the dialog type.
    #[must_use]
    pub const fn with_type(mut self, type_: DialogType) -> Self {
        self.type_ = type_;
        self
    }

    /// Append a button.
    #[must_use]
    pub fn with_button(mut self, button: DialogButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Set whether the dialog can be dismissed without pressing a button.
    #[must_use]
    pub const fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Index of the first button with the given role.
    #[must_use]
    pub fn position_of(&self, role: ButtonRole) -> Option<usize> {
        self.buttons.iter().position(|b| b.role == role)
    }

    /// Index of the button labelled `label`.
    #[must_use]
    pub fn position_of_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Check a presenter's answer against this dialog.
    ///
    /// # Errors
    /// Returns [`DialogError::InvalidChoice`] if the index is out of range, and
    /// [`DialogError::Cancelled`] if a non-cancelable dialog was dismissed.
    pub fn validate_choice(&self, choice: Option<usize>) -> Result<Option<usize>, DialogError> {
        match choice {
            Some(index) if index >= self.buttons.len() => Err(DialogError::InvalidChoice(index)),
            None if !self.cancelable => Err(DialogError::Cancelled),
            choice => Ok(choice),
        }
    }
}

/// Shows [`ConfirmDialog`]s to the user.
#[async_trait]
pub trait DialogPresenter: Send + Sync {
    /// Present the dialog and wait for the user.
    ///
    /// Returns the index of the pressed button, or `None` if a cancelable
    /// dialog was dismissed without one.
    ///
    /// # Errors
    /// Returns an error if the dialog could not be shown.
    async fn present(&self, dialog: ConfirmDialog) -> Result<Option<usize>, DialogError>;
}

/// Presents dialogs with the platform's native message box.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePresenter;

#[async_trait]
impl DialogPresenter for NativePresenter {
    async fn present(&self, dialog: ConfirmDialog) -> Result<Option<usize>, DialogError> {
        let choice = sys::show_confirm(dialog.clone()).await?;
        dialog.validate_choice(choice)
    }
}
