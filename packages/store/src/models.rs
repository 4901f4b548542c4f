//! # User record
//!
//! [`UserRecord`] is the canonical profile data shown and edited by the profile
//! screen. The same shape is cached locally (as JSON under the `"user"` key),
//! synthesized from bearer-token claims, and returned by the remote API, so the
//! deserializer accepts the field spellings those sources use:
//!
//! | Field | Accepted aliases |
//! |-------|------------------|
//! | `id` | `_id` |
//! | `photo` | `photoUrl`, `avatar_url` |
//!
//! A record is only usable when both `name` and `email` are non-empty
//! ([`UserRecord::is_valid`]).

use serde::{Deserialize, Deserializer, Serialize};

/// Profile data for the signed-in user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Remote URL or `data:` URI of the profile photo.
    #[serde(default, alias = "photoUrl", alias = "avatar_url")]
    pub photo: Option<String>,
}

impl UserRecord {
    /// A record can be displayed only when it has a name and an email.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Merge a fresh server record over a locally known one.
    ///
    /// Server fields win; blank server `id`/`name`/`email` fall back to the local
    /// values so a partial response never invalidates a good cache entry.
    pub fn reconcile(local: &UserRecord, server: UserRecord) -> UserRecord {
        let pick = |fresh: String, known: &str| {
            if fresh.trim().is_empty() {
                known.to_string()
            } else {
                fresh
            }
        };
        UserRecord {
            id: pick(server.id, &local.id),
            name: pick(server.name, &local.name),
            email: pick(server.email, &local.email),
            photo: server
                .photo
                .filter(|p| !p.is_empty())
                .or_else(|| local.photo.clone()),
        }
    }
}

/// Ids come back as strings from some backends and as integers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
        Missing(()),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
        Id::Missing(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_aliases() {
        let user: UserRecord = serde_json::from_str(
            r#"{"_id": 42, "name": "Ana", "email": "ana@x.io", "photoUrl": "https://cdn/a.png"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.name, "Ana");
        assert_eq!(user.photo.as_deref(), Some("https://cdn/a.png"));
        assert!(user.is_valid());
    }

    #[test]
    fn test_missing_fields_default() {
        let user: UserRecord = serde_json::from_str(r#"{"email": "a@b.com", "id": null}"#).unwrap();
        assert_eq!(user.id, "");
        assert_eq!(user.name, "");
        assert!(user.photo.is_none());
        assert!(!user.is_valid());
    }

    #[test]
    fn test_reconcile_prefers_server() {
        let local = UserRecord {
            id: "temp-user".into(),
            name: "User".into(),
            email: "a@b.com".into(),
            photo: Some("data:image/png;base64,AAAA".into()),
        };
        let server = UserRecord {
            id: "7".into(),
            name: "Alice".into(),
            email: "alice@b.com".into(),
            photo: Some("https://cdn/alice.png".into()),
        };

        let merged = UserRecord::reconcile(&local, server.clone());
        assert_eq!(merged, server);
    }

    #[test]
    fn test_reconcile_keeps_local_for_blank_fields() {
        let local = UserRecord {
            id: "1".into(),
            name: "Alice".into(),
            email: "a@b.com".into(),
            photo: Some("https://cdn/old.png".into()),
        };
        let server = UserRecord {
            id: "1".into(),
            name: "  ".into(),
            email: String::new(),
            photo: None,
        };

        let merged = UserRecord::reconcile(&local, server);
        assert_eq!(merged, local);
    }
}
