//! # API crate: collaborators consumed by the profile screen
//!
//! The profile screen does not talk to browser storage or HTTP directly; it goes
//! through the two collaborators defined here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`Session`]: bearer token and cached user on top of an injected [`store::KeyValueStore`]; JWT claim decoding ([`TokenClaims`]) |
//! | [`client`] | [`ProfileApi`] contract and its `reqwest` implementation [`HttpClient`] |
//! | [`error`] | [`ApiError`] |
//! | [`models`] | Request/response payloads and the [`SelectedFile`] upload input |

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use auth::{Session, TokenClaims};
pub use client::{HttpClient, ProfileApi};
pub use error::ApiError;
pub use models::{mime_from_name, PhotoUpload, ProfileUpdate, SelectedFile, UserRecord};
