//! # Profile API client
//!
//! [`ProfileApi`] is the contract the profile screen consumes; [`HttpClient`] is the
//! production implementation over `reqwest`, and tests provide their own doubles.
//!
//! ## Endpoints
//!
//! | Method | Path | Request | Response |
//! |--------|------|---------|----------|
//! | `GET` | `/users/me` | none | [`UserRecord`], bare or wrapped as `{"user": ...}` |
//! | `PUT` | `/users/profile` | `{"name"}` | [`ProfileUpdate`] |
//! | `PUT` | `/users/password` | `{"currentPassword", "newPassword"}` | empty |
//! | `POST` | `/users/photo` | multipart, field `photo` | [`PhotoUpload`] |
//!
//! Every request carries `Authorization: Bearer <token>` when the [`Session`] has a
//! token. Non-success statuses become [`ApiError`] via [`ApiError::from_status`].

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::KeyValueStore;

use crate::auth::Session;
use crate::error::ApiError;
use crate::models::{PhotoUpload, ProfileUpdate, SelectedFile, UserRecord};

/// Async contract of the remote profile service.
pub trait ProfileApi {
    fn get_current_user(&self) -> impl Future<Output = Result<UserRecord, ApiError>>;

    fn update_profile(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<ProfileUpdate, ApiError>>;

    /// Fails with [`ApiError::Auth`] when `current` is wrong.
    fn update_password(
        &self,
        current: &str,
        new: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn upload_photo(
        &self,
        file: &SelectedFile,
    ) -> impl Future<Output = Result<PhotoUpload, ApiError>>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CurrentUserBody {
    Wrapped { user: UserRecord },
    Bare(UserRecord),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// `reqwest`-backed [`ProfileApi`].
#[derive(Clone, Debug)]
pub struct HttpClient<S> {
    base_url: String,
    http: reqwest::Client,
    session: Session<S>,
}

impl<S: KeyValueStore + Clone> HttpClient<S> {
    pub fn new(base_url: impl Into<String>, session: Session<S>) -> Self {
        Self {
            base_url: resolve_base(base_url.into()),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::debug!("Request failed with {}: {}", status, err);
        Err(err)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        Ok(self.send(request).await?.json::<T>().await?)
    }
}

impl<S: KeyValueStore + Clone> ProfileApi for HttpClient<S> {
    async fn get_current_user(&self) -> Result<UserRecord, ApiError> {
        let body: CurrentUserBody = self.send_json(self.http.get(self.url("users/me"))).await?;
        Ok(match body {
            CurrentUserBody::Wrapped { user } => user,
            CurrentUserBody::Bare(user) => user,
        })
    }

    async fn update_profile(&self, name: &str) -> Result<ProfileUpdate, ApiError> {
        let request = self
            .http
            .put(self.url("users/profile"))
            .json(&serde_json::json!({ "name": name }));
        self.send_json(request).await
    }

    async fn update_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        let request = self.http.put(self.url("users/password")).json(&PasswordChange {
            current_password: current,
            new_password: new,
        });
        self.send(request).await?;
        Ok(())
    }

    async fn upload_photo(&self, file: &SelectedFile) -> Result<PhotoUpload, ApiError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)?;
        let form = Form::new().part("photo", part);
        self.send_json(self.http.post(self.url("users/photo")).multipart(form))
            .await
    }
}

/// Relative bases like `/api` are resolved against the page origin in the browser.
#[cfg(target_arch = "wasm32")]
fn resolve_base(base: String) -> String {
    if !base.starts_with('/') {
        return base;
    }
    match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => format!("{origin}{base}"),
        None => base,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_base(base: String) -> String {
    base
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
