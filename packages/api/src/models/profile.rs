//! # Request and response payloads of the profile endpoints
//!
//! - [`ProfileUpdate`]: body returned by `PUT /users/profile`. The server may echo
//!   the stored name; when it does not, callers fall back to what they sent.
//! - [`PhotoUpload`]: body returned by `POST /users/photo`, carrying the URL the
//!   uploaded image is now served from.
//! - [`SelectedFile`]: a file picked by the user, already read into memory, with
//!   the MIME type the picker reported (or that was guessed from its extension).

use serde::{Deserialize, Serialize};

/// Response of a display-name update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of a photo upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoUpload {
    #[serde(default, rename = "photoUrl", alias = "photo_url")]
    pub photo_url: Option<String>,
}

/// A user-selected file ready to validate, preview and upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Best-effort MIME type from a file name, for pickers that only report names.
pub fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_upload_field_names() {
        let camel: PhotoUpload = serde_json::from_str(r#"{"photoUrl": "https://cdn/p.png"}"#).unwrap();
        let snake: PhotoUpload = serde_json::from_str(r#"{"photo_url": "https://cdn/p.png"}"#).unwrap();
        let empty: PhotoUpload = serde_json::from_str("{}").unwrap();

        assert_eq!(camel.photo_url.as_deref(), Some("https://cdn/p.png"));
        assert_eq!(camel, snake);
        assert!(empty.photo_url.is_none());
    }

    #[test]
    fn test_mime_from_name() {
        assert_eq!(mime_from_name("me.PNG"), "image/png");
        assert_eq!(mime_from_name("holiday.photo.jpeg"), "image/jpeg");
        assert_eq!(mime_from_name("notes.txt"), "application/octet-stream");
        assert_eq!(mime_from_name("README"), "application/octet-stream");
    }

    #[test]
    fn test_selected_file() {
        let file = SelectedFile::new("a.gif", mime_from_name("a.gif"), vec![0; 10]);
        assert!(file.is_image());
        assert_eq!(file.size(), 10);
    }
}
