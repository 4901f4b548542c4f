//! # Reducer
//!
//! Every change to [`ProfileState`] is a [`ProfileAction`] applied by [`reduce`].
//! User input maps to actions directly; async handlers in
//! [`super::handlers`] return the action describing their outcome. Keeping the
//! transition pure lets the whole screen be tested without a renderer.

use store::UserRecord;

use super::feedback::DismissTicket;
use super::state::{Field, ProfileState};
use super::validate::ValidationError;

pub const NAME_UPDATED: &str = "Name updated successfully!";
pub const PASSWORD_UPDATED: &str = "Password updated successfully!";
pub const PHOTO_UPDATED: &str = "Photo updated successfully!";

#[derive(Clone, Debug, PartialEq)]
pub enum ProfileAction {
    /// The loader produced the record to show.
    Loaded(UserRecord),
    Input(Field, String),
    EditName,
    CancelEditName,
    EditPassword,
    CancelEditPassword,
    /// A submission passed validation and its request is about to be sent.
    Submitting,
    Invalid(ValidationError),
    NameUpdated(String),
    PasswordUpdated,
    /// A valid photo was picked; its preview is shown while it uploads.
    PhotoSelected { preview: String },
    PhotoUploaded { photo_url: String },
    PhotoUploadFailed(String),
    /// A request failed; the message is shown as an error banner.
    Failed(String),
    DismissError,
    DismissSuccess,
    SuccessExpired(DismissTicket),
}

pub fn reduce(mut state: ProfileState, action: ProfileAction) -> ProfileState {
    let ui = &mut state.ui;
    match action {
        ProfileAction::Loaded(user) => {
            state.form.name = user.name.clone();
            state.user = Some(user);
            ui.loading = false;
        }
        ProfileAction::Input(field, value) => state.form.set(field, value),
        ProfileAction::EditName => ui.editing_name = true,
        ProfileAction::CancelEditName => {
            ui.editing_name = false;
            state.form.name = state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
        }
        ProfileAction::EditPassword => ui.editing_password = true,
        ProfileAction::CancelEditPassword => {
            ui.editing_password = false;
            state.form.clear_passwords();
        }
        ProfileAction::Submitting => {
            ui.saving = true;
            ui.feedback.dismiss_error();
        }
        ProfileAction::Invalid(err) => {
            ui.saving = false;
            ui.feedback.show_error(err.to_string());
        }
        ProfileAction::NameUpdated(name) => {
            if let Some(user) = state.user.as_mut() {
                user.name = name.clone();
            }
            state.form.name = name;
            ui.saving = false;
            ui.editing_name = false;
            ui.feedback.show_success(NAME_UPDATED);
        }
        ProfileAction::PasswordUpdated => {
            ui.saving = false;
            ui.editing_password = false;
            state.form.clear_passwords();
            ui.feedback.show_success(PASSWORD_UPDATED);
        }
        ProfileAction::PhotoSelected { preview } => {
            ui.feedback.dismiss_error();
            ui.photo_preview = Some(preview);
            ui.uploading_photo = true;
        }
        ProfileAction::PhotoUploaded { photo_url } => {
            if let Some(user) = state.user.as_mut() {
                user.photo = Some(photo_url);
            }
            ui.photo_preview = None;
            ui.uploading_photo = false;
            ui.feedback.show_success(PHOTO_UPDATED);
        }
        ProfileAction::PhotoUploadFailed(message) => {
            ui.photo_preview = None;
            ui.uploading_photo = false;
            ui.feedback.show_error(message);
        }
        ProfileAction::Failed(message) => {
            ui.saving = false;
            ui.feedback.show_error(message);
        }
        ProfileAction::DismissError => ui.feedback.dismiss_error(),
        ProfileAction::DismissSuccess => ui.feedback.dismiss_success(),
        ProfileAction::SuccessExpired(ticket) => ui.feedback.expire(ticket),
    }
    state
}
