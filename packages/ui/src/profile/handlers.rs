//! # Profile handlers
//!
//! [`ProfileService`] bundles the collaborators of the profile screen (a
//! [`Session`] over the injected key-value store, a [`ProfileApi`], and the
//! configured [`ProfileLimits`]) and exposes one method per user intent. Each
//! method validates, talks to the collaborators, and returns the
//! [`ProfileAction`] to feed into [`super::reduce`]. None of them touch
//! component state.
//!
//! ## Loading
//!
//! [`ProfileService::load`] reconciles three sources into one record:
//!
//! 1. drop corrupted cached values, require an authenticated session;
//! 2. take the cached user, or synthesize one from the token's claims (and cache
//!    it) when nothing is cached;
//! 3. refresh from the server, merging over the local record and caching the
//!    result. A failed refresh keeps the local record and is only logged.
//!
//! Any step that leaves no usable record yields a redirect to the login screen.

use api::{ProfileApi, SelectedFile, Session, TokenClaims};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use store::config::ProfileLimits;
use store::{KeyValueStore, UserRecord};

use super::action::ProfileAction;
use super::state::FormState;
use super::validate::{validate_name, validate_password, validate_photo};

pub const NAME_FAILED: &str = "Could not update your name. Please try again.";
pub const PASSWORD_FAILED: &str = "Could not update your password. Please try again.";
pub const PHOTO_FAILED: &str = "Could not update your photo. Please try again.";
pub const PHOTO_MISSING_URL: &str = "The photo was sent but the server did not return its address. Please try again.";

/// Screens the profile screen can send the user to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Auth,
    Dashboard,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Ready(UserRecord),
    Redirect(Destination),
}

/// Collaborators of the profile screen.
#[derive(Clone, Debug)]
pub struct ProfileService<S, A> {
    session: Session<S>,
    api: A,
    limits: ProfileLimits,
}

impl<S, A> ProfileService<S, A>
where
    S: KeyValueStore + Clone,
    A: ProfileApi,
{
    pub fn new(session: Session<S>, api: A, limits: ProfileLimits) -> Self {
        Self {
            session,
            api,
            limits,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn limits(&self) -> &ProfileLimits {
        &self.limits
    }

    pub async fn load(&self) -> LoadOutcome {
        self.session.clear_corrupted_data();

        if !self.session.is_authenticated() {
            tracing::info!("No active session, redirecting to login");
            return self.redirect_to_auth();
        }

        let local = match self.session.get_user() {
            Some(user) => user,
            None => match self.session.extract_user_from_token().and_then(user_from_claims) {
                Some(user) => {
                    tracing::debug!("Cache empty, using user from token claims");
                    self.session.cache().save(&user);
                    user
                }
                None => {
                    tracing::info!("No cached user and no usable token claims, redirecting to login");
                    return self.redirect_to_auth();
                }
            },
        };

        if !local.is_valid() {
            tracing::info!("Cached user is missing name or email, redirecting to login");
            return self.redirect_to_auth();
        }

        match self.api.get_current_user().await {
            Ok(server) => {
                let user = UserRecord::reconcile(&local, server);
                self.session.cache().save(&user);
                LoadOutcome::Ready(user)
            }
            Err(e) => {
                tracing::warn!("Could not refresh profile from server, showing cached data: {}", e);
                LoadOutcome::Ready(local)
            }
        }
    }

    /// Leaving for the login screen discards the session and cached user.
    fn redirect_to_auth(&self) -> LoadOutcome {
        self.session.sign_out();
        LoadOutcome::Redirect(Destination::Auth)
    }

    /// Submit the name field. On success only the cached record's name changes,
    /// so an upload finishing meanwhile keeps its photo.
    pub async fn submit_name(&self, form: &FormState) -> ProfileAction {
        let name = match validate_name(&form.name) {
            Ok(name) => name,
            Err(err) => return ProfileAction::Invalid(err),
        };

        match self.api.update_profile(name).await {
            Ok(update) => {
                let applied = update
                    .name
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| name.to_string());
                self.session.cache().update(|u| u.name = applied.clone());
                ProfileAction::NameUpdated(applied)
            }
            Err(e) => {
                tracing::error!("Failed to update name: {}", e);
                ProfileAction::Failed(NAME_FAILED.to_string())
            }
        }
    }

    pub async fn submit_password(&self, form: &FormState) -> ProfileAction {
        if let Err(err) = validate_password(form, &self.limits) {
            return ProfileAction::Invalid(err);
        }

        match self
            .api
            .update_password(&form.current_password, &form.new_password)
            .await
        {
            Ok(()) => ProfileAction::PasswordUpdated,
            Err(e) => {
                tracing::error!("Failed to update password: {}", e);
                let message = e.server_message().unwrap_or(PASSWORD_FAILED).to_string();
                ProfileAction::Failed(message)
            }
        }
    }

    /// Validate a picked file and build its local preview. The caller applies the
    /// returned action and, on [`ProfileAction::PhotoSelected`], starts
    /// [`ProfileService::upload_photo`].
    pub fn select_photo(&self, file: &SelectedFile) -> ProfileAction {
        match validate_photo(file, &self.limits) {
            Ok(()) => ProfileAction::PhotoSelected {
                preview: data_uri(file),
            },
            Err(err) => ProfileAction::Invalid(err),
        }
    }

    pub async fn upload_photo(&self, file: &SelectedFile) -> ProfileAction {
        match self.api.upload_photo(file).await {
            Ok(upload) => match upload.photo_url.filter(|url| !url.is_empty()) {
                Some(photo_url) => {
                    self.session.cache().update(|u| u.photo = Some(photo_url.clone()));
                    ProfileAction::PhotoUploaded { photo_url }
                }
                None => {
                    tracing::warn!("Photo upload response carried no URL");
                    ProfileAction::PhotoUploadFailed(PHOTO_MISSING_URL.to_string())
                }
            },
            Err(e) => {
                tracing::error!("Failed to upload photo: {}", e);
                ProfileAction::PhotoUploadFailed(PHOTO_FAILED.to_string())
            }
        }
    }
}

/// A displayable record from token claims. Email is required; id and name get
/// placeholders.
fn user_from_claims(claims: TokenClaims) -> Option<UserRecord> {
    let email = claims.email.filter(|e| !e.trim().is_empty())?;
    Some(UserRecord {
        id: claims.id.unwrap_or_else(|| "temp-user".to_string()),
        name: claims.name.unwrap_or_else(|| "User".to_string()),
        email,
        photo: claims.photo,
    })
}

fn data_uri(file: &SelectedFile) -> String {
    format!("data:{};base64,{}", file.mime, STANDARD.encode(&file.bytes))
}
