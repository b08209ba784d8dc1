//! Account settings screen: the password change form.

use std::rc::Rc;

use contracts::system::settings::PasswordChangeDraft;

use crate::shared::form::FormSession;
use crate::shared::surfaces::{Notifier, NotifyKind};

/// The form never edits an existing record, so the id slot is unit
pub struct SettingsPage {
    form: FormSession<(), PasswordChangeDraft>,
    notifier: Rc<dyn Notifier>,
}

impl SettingsPage {
    pub fn new(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            form: FormSession::new(),
            notifier,
        }
    }

    pub fn open(&mut self) {
        self.form.open_create(PasswordChangeDraft::default());
    }

    pub fn form(&self) -> &FormSession<(), PasswordChangeDraft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut PasswordChangeDraft> {
        self.form.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn submit(&mut self) -> bool {
        match self.form.submit() {
            Some(_) => {
                self.notifier
                    .notify(NotifyKind::Success, "Password updated successfully!");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::surfaces::RecordingNotifier;

    fn page() -> (SettingsPage, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let page = SettingsPage::new(notifier.clone());
        (page, notifier)
    }

    #[test]
    fn mismatched_confirmation_keeps_form_open() {
        let (mut page, notifier) = page();
        page.open();
        *page.draft_mut().unwrap() = PasswordChangeDraft {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "other-secret".into(),
        };
        assert!(!page.submit());
        assert!(page.form().is_open());
        assert_eq!(
            page.form().errors().unwrap().message_for("confirmPassword"),
            Some("Passwords don't match")
        );
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn matching_passwords_commit_and_confirm() {
        let (mut page, notifier) = page();
        page.open();
        *page.draft_mut().unwrap() = PasswordChangeDraft {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "new-secret".into(),
        };
        assert!(page.submit());
        assert!(!page.form().is_open());
        assert_eq!(
            notifier.last(),
            Some((NotifyKind::Success, "Password updated successfully!".into()))
        );
    }
}
