//! Registration form state machine.
//!
//! The form owns the raw field values; per-field validity is recomputed from
//! them on every change and is never stored independently of its inputs.
//! Submission re-checks the password pair even though the validity flags
//! already cover it, keeping both layers intact.

use crate::domain::{FieldValidity, PasswordStrength, RegistrationRequest};

pub const MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters";

/// The four editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Password,
            FormField::Password => FormField::ConfirmPassword,
            FormField::ConfirmPassword => FormField::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FormField::Name => FormField::ConfirmPassword,
            FormField::Email => FormField::Name,
            FormField::Password => FormField::Email,
            FormField::ConfirmPassword => FormField::Password,
        }
    }
}

#[derive(Debug, Default)]
pub struct RegistrationForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    show_password: bool,
    validity: FieldValidity,
    submit_message: Option<String>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one field's value and synchronously recomputes validity.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
        self.validity =
            FieldValidity::evaluate(&self.name, &self.email, &self.password, &self.confirm_password);
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_valid(&self, field: FormField) -> bool {
        match field {
            FormField::Name => self.validity.name,
            FormField::Email => self.validity.email,
            FormField::Password => self.validity.password,
            FormField::ConfirmPassword => self.validity.confirm_password,
        }
    }

    pub fn validity(&self) -> FieldValidity {
        self.validity
    }

    /// Display-only indicator; independent of the password validity rule.
    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::of(&self.password)
    }

    /// Affects only how the password fields are rendered, never the values.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn submit_message(&self) -> Option<&str> {
        self.submit_message.as_deref()
    }

    /// Attempts submission against the current fields.
    ///
    /// The password pair is re-checked first, independently of the validity
    /// flags: a mismatch or a short password sets `submit_message` and
    /// blocks delegation. With both checks passed, the remaining validity
    /// flags gate the submission silently. On success the message is cleared
    /// and the payload to delegate is returned; the in-flight gate belongs
    /// to the caller.
    pub fn submit(&mut self) -> Option<RegistrationRequest> {
        if self.password != self.confirm_password {
            self.submit_message = Some(MISMATCH_MESSAGE.to_string());
            return None;
        }
        if self.password.chars().count() < 6 {
            self.submit_message = Some(TOO_SHORT_MESSAGE.to_string());
            return None;
        }
        if !self.validity.all() {
            return None;
        }

        self.submit_message = None;
        Some(RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.set_field(FormField::Name, "Jo".to_string());
        form.set_field(FormField::Email, "jo@x.com".to_string());
        form.set_field(FormField::Password, "secret1".to_string());
        form.set_field(FormField::ConfirmPassword, "secret1".to_string());
        form
    }

    #[test]
    fn test_new_form_is_empty_and_invalid() {
        let form = RegistrationForm::new();
        assert!(!form.validity().all());
        assert!(!form.show_password());
        assert!(form.submit_message().is_none());
        assert_eq!(form.password_strength(), PasswordStrength::None);
    }

    #[test]
    fn test_set_field_updates_exactly_one_field() {
        let mut form = RegistrationForm::new();
        form.set_field(FormField::Email, "jo@x.com".to_string());
        assert_eq!(form.field(FormField::Email), "jo@x.com");
        assert_eq!(form.field(FormField::Name), "");
        assert_eq!(form.field(FormField::Password), "");
    }

    #[test]
    fn test_validity_tracks_current_values_with_no_residue() {
        let mut form = RegistrationForm::new();
        form.set_field(FormField::Email, "a@b.com".to_string());
        assert!(form.validity().email);

        form.set_field(FormField::Email, "bad".to_string());
        assert!(!form.validity().email);
    }

    #[test]
    fn test_confirm_validity_follows_password_edits() {
        let mut form = filled_form();
        assert!(form.validity().confirm_password);

        // Editing the password invalidates the existing confirmation.
        form.set_field(FormField::Password, "secret2".to_string());
        assert!(!form.validity().confirm_password);
    }

    #[test]
    fn test_toggle_visibility_never_touches_values() {
        let mut form = filled_form();
        form.toggle_password_visibility();
        assert!(form.show_password());
        assert_eq!(form.field(FormField::Password), "secret1");
        form.toggle_password_visibility();
        assert!(!form.show_password());
    }

    #[test]
    fn test_submit_rejects_mismatched_passwords() {
        let mut form = filled_form();
        form.set_field(FormField::Password, "abc123".to_string());
        form.set_field(FormField::ConfirmPassword, "abc124".to_string());

        assert!(form.submit().is_none());
        assert_eq!(form.submit_message(), Some(MISMATCH_MESSAGE));
    }

    #[test]
    fn test_submit_rejects_short_password() {
        let mut form = filled_form();
        form.set_field(FormField::Password, "ab".to_string());
        form.set_field(FormField::ConfirmPassword, "ab".to_string());

        assert!(form.submit().is_none());
        assert_eq!(form.submit_message(), Some(TOO_SHORT_MESSAGE));
    }

    #[test]
    fn test_submit_blocks_silently_on_invalid_name_or_email() {
        let mut form = filled_form();
        form.set_field(FormField::Email, "bad".to_string());

        assert!(form.submit().is_none());
        assert!(form.submit_message().is_none());
    }

    #[test]
    fn test_submit_delegates_payload_and_clears_message() {
        let mut form = filled_form();

        // Leave a stale message behind, then fix the fields.
        form.set_field(FormField::ConfirmPassword, "different".to_string());
        assert!(form.submit().is_none());
        assert!(form.submit_message().is_some());

        form.set_field(FormField::ConfirmPassword, "secret1".to_string());
        let request = form.submit().expect("valid form should delegate");
        assert_eq!(
            request,
            RegistrationRequest {
                name: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                password: "secret1".to_string(),
            }
        );
        assert!(form.submit_message().is_none());
    }

    #[test]
    fn test_all_validity_flags_true_for_complete_form() {
        let form = filled_form();
        let validity = form.validity();
        assert!(validity.name && validity.email && validity.password && validity.confirm_password);
    }
}
