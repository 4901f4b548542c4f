use std::time::Duration;

use dioxus::prelude::*;

use api::{mime_from_name, SelectedFile};

use crate::icons::{
    FaArrowLeft, FaCamera, FaCircleCheck, FaCircleXmark, FaEnvelope, FaHourglassStart, FaKey,
    FaLock, FaPen, FaUser, FaXmark,
};
use crate::profile::handlers::PHOTO_FAILED;
use crate::profile::validate::validate_photo_meta;
use crate::profile::{
    reduce, wait_for_dismissal, Destination, Field, LoadOutcome, ProfileAction, ProfileState,
};
use crate::provider::use_profile_service;
use crate::Icon;

const PROFILE_CSS: Asset = asset!("/src/views/profile.css");

/// Applies actions to the profile state and schedules success banner expiry.
///
/// Expiry tasks are spawned in the component scope, so they are dropped with the
/// component and never write to an unmounted view.
#[derive(Clone, Copy)]
struct Dispatcher {
    state: Signal<ProfileState>,
    banner_delay: Duration,
}

impl Dispatcher {
    fn send(self, action: ProfileAction) {
        let mut state = self.state;
        let before = state.peek().ui.feedback.success_ticket();
        let next = reduce(state.peek().clone(), action);
        let after = next.ui.feedback.success_ticket();
        state.set(next);

        if let Some(ticket) = after.filter(|t| Some(*t) != before) {
            spawn(async move {
                let due = wait_for_dismissal(ticket, self.banner_delay).await;
                self.send(ProfileAction::SuccessExpired(due));
            });
        }
    }
}

/// The signed-in user's profile: photo, name, email and password.
///
/// Navigation is left to the host router through `on_navigate`.
#[component]
pub fn ProfileView(on_navigate: EventHandler<Destination>) -> Element {
    let service = use_profile_service();
    let state = use_signal(ProfileState::default);
    let dispatcher = Dispatcher {
        state,
        banner_delay: service.limits().success_banner_delay(),
    };

    // Guard + load on mount
    let loader_service = service.clone();
    let _loader = use_resource(move || {
        let service = loader_service.clone();
        async move {
            match service.load().await {
                LoadOutcome::Ready(user) => dispatcher.send(ProfileAction::Loaded(user)),
                LoadOutcome::Redirect(to) => on_navigate.call(to),
            }
        }
    });

    let name_service = service.clone();
    let handle_save_name = move |_| {
        let service = name_service.clone();
        async move {
            dispatcher.send(ProfileAction::Submitting);
            let form = state.peek().form.clone();
            let action = service.submit_name(&form).await;
            dispatcher.send(action);
        }
    };

    let password_service = service.clone();
    let handle_save_password = move |_| {
        let service = password_service.clone();
        async move {
            dispatcher.send(ProfileAction::Submitting);
            let form = state.peek().form.clone();
            let action = service.submit_password(&form).await;
            dispatcher.send(action);
        }
    };

    let photo_service = service.clone();
    let handle_photo = move |evt: FormEvent| {
        let service = photo_service.clone();
        async move {
            let Some(engine) = evt.files() else {
                return;
            };
            let Some(name) = engine.files().into_iter().next() else {
                return;
            };
            if let Some(size) = engine.file_size(&name).await {
                if let Err(err) = validate_photo_meta(mime_from_name(&name), size, service.limits()) {
                    dispatcher.send(ProfileAction::Invalid(err));
                    return;
                }
            }
            let Some(bytes) = engine.read_file(&name).await else {
                dispatcher.send(ProfileAction::Failed(PHOTO_FAILED.to_string()));
                return;
            };
            let file = SelectedFile::new(name.clone(), mime_from_name(&name), bytes);

            let action = service.select_photo(&file);
            let selected = matches!(action, ProfileAction::PhotoSelected { .. });
            dispatcher.send(action);
            if selected {
                let action = service.upload_photo(&file).await;
                dispatcher.send(action);
            }
        }
    };

    let current = state();

    if current.ui.loading {
        return rsx! {
            document::Link { rel: "stylesheet", href: PROFILE_CSS }
            div {
                class: "profile-container",
                div {
                    class: "profile-loading",
                    Icon { icon: FaHourglassStart, width: 32, height: 32 }
                    h2 { "Loading profile..." }
                }
            }
        };
    }

    let uploading = current.ui.uploading_photo;
    let saving = current.ui.saving;
    let max_mb = service.limits().max_photo_bytes / (1024 * 1024);

    rsx! {
        document::Link { rel: "stylesheet", href: PROFILE_CSS }
        div {
            class: "profile-container",

            div {
                class: "profile-header",
                button {
                    class: "profile-back",
                    onclick: move |_| on_navigate.call(Destination::Dashboard),
                    Icon { icon: FaArrowLeft, width: 16, height: 16 }
                    span { "Back" }
                }
                h1 { class: "profile-title", "My Profile" }
            }

            // Banners
            if let Some(error) = current.ui.feedback.error.clone() {
                div {
                    class: "profile-alert profile-alert-error",
                    Icon { icon: FaCircleXmark, width: 14, height: 14 }
                    span { "{error}" }
                    button {
                        class: "profile-alert-close",
                        onclick: move |_| dispatcher.send(ProfileAction::DismissError),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            if let Some(success) = current.ui.feedback.success.clone() {
                div {
                    class: "profile-alert profile-alert-success",
                    Icon { icon: FaCircleCheck, width: 14, height: 14 }
                    span { "{success}" }
                    button {
                        class: "profile-alert-close",
                        onclick: move |_| dispatcher.send(ProfileAction::DismissSuccess),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }

            // Photo
            div {
                class: "profile-section",
                h2 { class: "profile-section-title", "Profile Photo" }
                label {
                    class: if uploading { "photo-container photo-container-busy" } else { "photo-container" },
                    r#for: "profile-photo-input",
                    if let Some(src) = current.displayed_photo() {
                        img { class: "profile-photo", src: "{src}", alt: "Profile photo" }
                    } else {
                        div {
                            class: "photo-placeholder",
                            Icon { icon: FaUser, width: 48, height: 48 }
                        }
                    }
                    if uploading {
                        div {
                            class: "photo-loading",
                            Icon { icon: FaHourglassStart, width: 32, height: 32 }
                        }
                    } else {
                        div {
                            class: "photo-overlay",
                            Icon { icon: FaCamera, width: 20, height: 20 }
                            span { "Change photo" }
                        }
                    }
                }
                input {
                    id: "profile-photo-input",
                    class: "photo-input",
                    r#type: "file",
                    accept: "image/*",
                    disabled: uploading,
                    onchange: handle_photo,
                }
                p {
                    class: "profile-muted",
                    "Click the photo to change it. JPG, PNG or GIF, up to {max_mb}MB."
                }
            }

            // Name
            div {
                class: "profile-section",
                h2 { class: "profile-section-title", "Name" }
                if current.ui.editing_name {
                    div {
                        class: "profile-form",
                        input {
                            class: "profile-input",
                            r#type: "text",
                            placeholder: "Your name",
                            autofocus: true,
                            value: current.form.name.clone(),
                            oninput: move |evt: FormEvent| {
                                dispatcher.send(ProfileAction::Input(Field::Name, evt.value()))
                            },
                        }
                        div {
                            class: "profile-actions",
                            button {
                                class: "profile-btn profile-btn-outline",
                                onclick: move |_| dispatcher.send(ProfileAction::CancelEditName),
                                "Cancel"
                            }
                            button {
                                class: "profile-btn profile-btn-primary",
                                disabled: saving,
                                onclick: handle_save_name,
                                if saving { "Saving..." } else { "Save" }
                            }
                        }
                    }
                } else {
                    div {
                        class: "profile-info",
                        span { class: "profile-value", "{current.display_name()}" }
                        button {
                            class: "profile-btn profile-btn-outline",
                            onclick: move |_| dispatcher.send(ProfileAction::EditName),
                            Icon { icon: FaPen, width: 12, height: 12 }
                            span { "Edit" }
                        }
                    }
                }
            }

            // Email
            div {
                class: "profile-section",
                h2 { class: "profile-section-title", "Email" }
                div {
                    class: "profile-info",
                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                    span { class: "profile-value", "{current.display_email()}" }
                }
                p {
                    class: "profile-muted",
                    Icon { icon: FaLock, width: 12, height: 12 }
                    " The email address cannot be changed."
                }
            }

            // Password
            div {
                class: "profile-section",
                h2 { class: "profile-section-title", "Password" }
                if current.ui.editing_password {
                    div {
                        class: "profile-form",
                        PasswordInput {
                            id: "current-password",
                            label: "Current password",
                            value: current.form.current_password.clone(),
                            on_input: move |v| dispatcher.send(ProfileAction::Input(Field::CurrentPassword, v)),
                        }
                        PasswordInput {
                            id: "new-password",
                            label: "New password",
                            value: current.form.new_password.clone(),
                            on_input: move |v| dispatcher.send(ProfileAction::Input(Field::NewPassword, v)),
                        }
                        PasswordInput {
                            id: "confirm-password",
                            label: "Confirm new password",
                            value: current.form.confirm_password.clone(),
                            on_input: move |v| dispatcher.send(ProfileAction::Input(Field::ConfirmPassword, v)),
                        }
                        div {
                            class: "profile-actions",
                            button {
                                class: "profile-btn profile-btn-outline",
                                onclick: move |_| dispatcher.send(ProfileAction::CancelEditPassword),
                                "Cancel"
                            }
                            button {
                                class: "profile-btn profile-btn-primary",
                                disabled: saving,
                                onclick: handle_save_password,
                                if saving { "Saving..." } else { "Change password" }
                            }
                        }
                    }
                } else {
                    div {
                        class: "profile-info",
                        span { class: "profile-value", "••••••••" }
                        button {
                            class: "profile-btn profile-btn-outline",
                            onclick: move |_| dispatcher.send(ProfileAction::EditPassword),
                            Icon { icon: FaKey, width: 12, height: 12 }
                            span { "Change password" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PasswordInput(id: String, label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "profile-field",
            label { class: "profile-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: "profile-input",
                r#type: "password",
                value: value,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
    }
}
