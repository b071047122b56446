/// Blocking user notifications
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Shows a message the user has to acknowledge
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str);
}

/// Native modal dialog. Blocks the UI until dismissed.
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&self, title: &str, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
