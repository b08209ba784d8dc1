use serde::{Deserialize, Serialize};

use crate::domain::common::{rules, Validate, ValidationErrors};

/// Черновик формы смены пароля (экран настроек)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeDraft {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl Validate for PasswordChangeDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        rules::required(
            &mut errors,
            "currentPassword",
            &self.current_password,
            "Current password is required",
        );
        rules::min_len(
            &mut errors,
            "newPassword",
            &self.new_password,
            6,
            "Password must be at least 6 characters",
        );
        rules::min_len(
            &mut errors,
            "confirmPassword",
            &self.confirm_password,
            6,
            "Password confirmation is required",
        );
        // Межполевое правило: подтверждение должно совпадать с новым паролем
        if errors.message_for("confirmPassword").is_none()
            && self.new_password != self.confirm_password
        {
            errors.push("confirmPassword", "Passwords don't match");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_passwords_pass() {
        let draft = PasswordChangeDraft {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "new-secret".into(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn mismatch_is_attached_to_confirm_field() {
        let draft = PasswordChangeDraft {
            current_password: "old-secret".into(),
            new_password: "new-secret".into(),
            confirm_password: "other-secret".into(),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.message_for("confirmPassword"), Some("Passwords don't match"));
        assert!(errors.message_for("newPassword").is_none());
    }

    #[test]
    fn short_new_password_rejected() {
        let draft = PasswordChangeDraft {
            current_password: "old-secret".into(),
            new_password: "abc".into(),
            confirm_password: "abc".into(),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.message_for("newPassword"),
            Some("Password must be at least 6 characters")
        );
    }
}
