use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

pub fn confirm_reset() -> bool {
    let confirmed = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Reset report")
        .set_description("Are you sure you want to reset the report? This will clear all saved data.")
        .set_buttons(MessageButtons::YesNo)
        .show();
    confirmed == MessageDialogResult::Yes
}
