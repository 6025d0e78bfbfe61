use permkit_permission::PlatformFamily;
use serde::{Deserialize, Serialize};

/// Text of the dialog that sends the user to system settings.
///
/// Deserializes with defaults for missing fields, so a host can localize
/// only some of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptText {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the button that closes the dialog.
    pub cancel_label: String,
    /// Label of the button that opens settings.
    pub open_settings_label: String,
}

impl Default for PromptText {
    fn default() -> Self {
        Self {
            title: "Permission Required".to_string(),
            message: "The app permissions can only be changed from the app settings.".to_string(),
            cancel_label: "Cancel".to_string(),
            open_settings_label: "Open App Settings".to_string(),
        }
    }
}

/// Configuration of a [`PermissionStore`](crate::PermissionStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Which identifier set to use when talking to the broker.
    pub platform: PlatformFamily,
    /// Settings prompt text.
    pub prompt: PromptText,
}

impl StoreOptions {
    /// Options for the current platform with the default prompt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform: PlatformFamily::current(),
            prompt: PromptText::default(),
        }
    }

    /// Override the platform family.
    #[must_use]
    pub const fn with_platform(mut self, platform: PlatformFamily) -> Self {
        self.platform = platform;
        self
    }

    /// Replace the settings prompt text.
    #[must_use]
    pub fn with_prompt(mut self, prompt: PromptText) -> Self {
        self.prompt = prompt;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_prompt_keeps_defaults() {
        let prompt: PromptText =
            serde_json::from_str(r#"{ "title": "Berechtigung erforderlich" }"#).unwrap();
        assert_eq!(prompt.title, "Berechtigung erforderlich");
        assert_eq!(prompt.cancel_label, "Cancel");
        assert_eq!(prompt.open_settings_label, "Open App Settings");
    }

    #[test]
    fn builder_overrides_platform() {
        let options = StoreOptions::new().with_platform(PlatformFamily::Android);
        assert_eq!(options.platform, PlatformFamily::Android);
        assert_eq!(options.prompt, PromptText::default());
    }
}
