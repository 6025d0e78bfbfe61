#[cfg(not(any(target_os = "android", target_os = "ios")))]
mod desktop;
#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub use desktop::show_confirm;

/// Mobile hosts present dialogs through their own [`DialogPresenter`](crate::DialogPresenter).
#[cfg(any(target_os = "android", target_os = "ios"))]
pub async fn show_confirm(
    _: crate::ConfirmDialog,
) -> Result<Option<usize>, crate::DialogError> {
    Err(crate::DialogError::NotSupported(
        "native dialogs are presented by the host app on mobile".to_string(),
    ))
}
