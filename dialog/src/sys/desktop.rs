use crate::{ButtonRole, ConfirmDialog, DialogError, DialogType};
use futures::channel::oneshot;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Show a confirmation dialog and report which button was pressed.
///
/// Message boxes offer at most three buttons. The first non-cancel button
/// takes the affirmative slot and the first cancel button the negative one.
///
/// # Errors
/// Returns an error if the native dialog fails to show or has too many buttons.
pub async fn show_confirm(dialog: ConfirmDialog) -> Result<Option<usize>, DialogError> {
    let buttons = message_buttons(&dialog)?;
    let (tx, rx) = oneshot::channel();

    std::thread::spawn(move || {
        let level = match dialog.type_ {
            DialogType::Info => MessageLevel::Info,
            DialogType::Warning => MessageLevel::Warning,
            DialogType::Error => MessageLevel::Error,
        };

        let result = MessageDialog::new()
            .set_level(level)
            .set_title(&dialog.title)
            .set_description(&dialog.message)
            .set_buttons(buttons)
            .show();

        let _ = tx.send(choice_from_result(&dialog, result));
    });

    rx.await
        .map_err(|_| DialogError::PlatformError("Dialog panicked or channel closed".into()))
}

fn affirmative(dialog: &ConfirmDialog) -> Option<usize> {
    dialog
        .buttons
        .iter()
        .position(|b| b.role != ButtonRole::Cancel)
}

fn negative(dialog: &ConfirmDialog) -> Option<usize> {
    dialog.position_of(ButtonRole::Cancel)
}

fn message_buttons(dialog: &ConfirmDialog) -> Result<MessageButtons, DialogError> {
    let label = |index: usize| dialog.buttons[index].label.clone();

    match dialog.buttons.len() {
        0 => Ok(MessageButtons::Ok),
        1 => Ok(MessageButtons::OkCustom(label(0))),
        2 => {
            let ok = affirmative(dialog).unwrap_or(0);
            let cancel = usize::from(ok == 0);
            Ok(MessageButtons::OkCancelCustom(label(ok), label(cancel)))
        }
        3 => Ok(MessageButtons::YesNoCancelCustom(label(0), label(1), label(2))),
        n => Err(DialogError::NotSupported(format!(
            "native message boxes hold at most 3 buttons, got {n}"
        ))),
    }
}

fn choice_from_result(dialog: &ConfirmDialog, result: MessageDialogResult) -> Option<usize> {
    match result {
        MessageDialogResult::Custom(label) => dialog.position_of_label(&label),
        MessageDialogResult::Ok | MessageDialogResult::Yes => {
            affirmative(dialog).or_else(|| (!dialog.buttons.is_empty()).then_some(0))
        }
        MessageDialogResult::Cancel | MessageDialogResult::No => negative(dialog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DialogButton;

    fn dialog() -> ConfirmDialog {
        ConfirmDialog::new("Title", "Message")
            .with_button(DialogButton::cancel("Cancel"))
            .with_button(DialogButton::new("Open App Settings"))
    }

    #[test]
    fn cancel_button_takes_negative_slot() {
        let buttons = message_buttons(&dialog()).unwrap();
        assert!(matches!(
            buttons,
            MessageButtons::OkCancelCustom(ok, cancel)
                if ok == "Open App Settings" && cancel == "Cancel"
        ));
    }

    #[test]
    fn results_map_back_to_button_indices() {
        let dialog = dialog();
        assert_eq!(
            choice_from_result(&dialog, MessageDialogResult::Custom("Cancel".into())),
            Some(0)
        );
        assert_eq!(choice_from_result(&dialog, MessageDialogResult::Ok), Some(1));
        assert_eq!(choice_from_result(&dialog, MessageDialogResult::Cancel), Some(0));
    }

    #[test]
    fn rejects_too_many_buttons() {
        let dialog = (0..4).fold(ConfirmDialog::new("t", "m"), |d, i| {
            d.with_button(DialogButton::new(format!("b{i}")))
        });
        assert!(matches!(
            message_buttons(&dialog),
            Err(DialogError::NotSupported(_))
        ));
    }
}
