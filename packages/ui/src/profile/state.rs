use store::UserRecord;

use super::feedback::Feedback;

/// Input fields of the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

/// Ephemeral form values, seeded from the user record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::CurrentPassword => self.current_password = value,
            Field::NewPassword => self.new_password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn clear_passwords(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

/// Transient view flags. Never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub editing_name: bool,
    pub editing_password: bool,
    /// A name or password request is in flight.
    pub saving: bool,
    pub uploading_photo: bool,
    /// `data:` URI of a photo that is being uploaded.
    pub photo_preview: Option<String>,
    pub feedback: Feedback,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            loading: true,
            editing_name: false,
            editing_password: false,
            saving: false,
            uploading_photo: false,
            photo_preview: None,
            feedback: Feedback::default(),
        }
    }
}

/// Everything the profile screen renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub user: Option<UserRecord>,
    pub form: FormState,
    pub ui: UiState,
}

impl ProfileState {
    /// Local preview while an upload is pending, otherwise the stored photo.
    pub fn displayed_photo(&self) -> Option<&str> {
        self.ui
            .photo_preview
            .as_deref()
            .or_else(|| self.user.as_ref()?.photo.as_deref())
            .filter(|p| !p.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Name not provided")
    }

    pub fn display_email(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.email.as_str())
            .filter(|e| !e.is_empty())
            .unwrap_or("Email not provided")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading() {
        let state = ProfileState::default();
        assert!(state.ui.loading);
        assert!(state.user.is_none());
        assert_eq!(state.display_name(), "Name not provided");
        assert!(state.displayed_photo().is_none());
    }

    #[test]
    fn test_preview_wins_over_stored_photo() {
        let mut state = ProfileState {
            user: Some(UserRecord {
                photo: Some("https://cdn/old.png".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(state.displayed_photo(), Some("https://cdn/old.png"));

        state.ui.photo_preview = Some("data:image/png;base64,AA==".into());
        assert_eq!(state.displayed_photo(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn test_form_set_and_clear() {
        let mut form = FormState::default();
        form.set(Field::Name, "Ana".into());
        form.set(Field::CurrentPassword, "a".into());
        form.set(Field::NewPassword, "b".into());
        form.set(Field::ConfirmPassword, "c".into());

        form.clear_passwords();
        assert_eq!(
            form,
            FormState {
                name: "Ana".into(),
                ..Default::default()
            }
        );
    }
}
