//! Data models for the application.

mod profile;

pub use profile::{mime_from_name, PhotoUpload, ProfileUpdate, SelectedFile};
pub use store::UserRecord;
