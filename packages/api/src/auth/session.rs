//! # Session: authentication state kept on the client
//!
//! [`Session`] answers "who is signed in?" from local state only. It sits on top of
//! an injected [`KeyValueStore`] and owns two keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | Bearer token (JWT) issued at login |
//! | `store::user_cache::USER_KEY` (`"user"`) | Serialized [`UserRecord`] |
//!
//! Values that were written as the literals `"undefined"` / `"null"`, or left
//! blank, are treated as absent; [`Session::clear_corrupted_data`] removes them.
//!
//! A session is authenticated when a token is present and, if it carries an
//! `exp` claim, that claim lies in the future. Opaque (non-JWT) tokens are
//! accepted as-is; the server is the authority on their validity.

use store::{is_corrupted, KeyValueStore, UserCache, UserRecord};

use super::token::TokenClaims;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Client-side authentication state backed by a key-value store.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
    cache: UserCache<S>,
}

impl<S: KeyValueStore + Clone> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            cache: UserCache::new(store.clone()),
            store,
        }
    }

    pub fn cache(&self) -> &UserCache<S> {
        &self.cache
    }

    /// The stored bearer token, ignoring corrupted values.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !is_corrupted(t))
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    /// Forget the token and the cached user.
    pub fn sign_out(&self) {
        self.store.remove(TOKEN_KEY);
        self.cache.clear();
    }

    /// Remove `"undefined"` / `"null"` / blank leftovers for the token and user keys.
    pub fn clear_corrupted_data(&self) {
        if self.cache.clear_corrupted() {
            tracing::debug!("Removed corrupted cached user");
        }
        if self.store.get(TOKEN_KEY).is_some_and(|t| is_corrupted(&t)) {
            tracing::debug!("Removed corrupted session token");
            self.store.remove(TOKEN_KEY);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(current_timestamp())
    }

    /// [`Session::is_authenticated`] against an explicit clock.
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        match TokenClaims::decode(&token) {
            Some(claims) => !claims.is_expired_at(now),
            None => true,
        }
    }

    /// The cached user record, if one is stored and parses.
    pub fn get_user(&self) -> Option<UserRecord> {
        self.cache.load()
    }

    /// Claims embedded in the stored token, if it is a decodable JWT.
    pub fn extract_user_from_token(&self) -> Option<TokenClaims> {
        TokenClaims::decode(&self.token()?)
    }
}

/// Seconds since the Unix epoch.
pub fn current_timestamp() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::make_token;
    use store::user_cache::USER_KEY;
    use store::MemoryStore;

    #[test]
    fn test_no_token_is_unauthenticated() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_authenticated());
        assert!(session.extract_user_from_token().is_none());
    }

    #[test]
    fn test_corrupted_token_is_unauthenticated() {
        for literal in ["undefined", "null", " "] {
            let session = Session::new(MemoryStore::with_entries([(TOKEN_KEY, literal)]));
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn test_expiry_is_checked() {
        let session = Session::new(MemoryStore::new());
        session.set_token(&make_token(r#"{"email": "a@b.com", "exp": 1000}"#));

        assert!(session.is_authenticated_at(999));
        assert!(!session.is_authenticated_at(1000));
    }

    #[test]
    fn test_opaque_token_is_authenticated() {
        let session = Session::new(MemoryStore::with_entries([(TOKEN_KEY, "opaque-session-id")]));
        assert!(session.is_authenticated());
        assert!(session.extract_user_from_token().is_none());
    }

    #[test]
    fn test_clear_corrupted_data() {
        let store = MemoryStore::with_entries([(TOKEN_KEY, "null"), (USER_KEY, "undefined")]);
        let session = Session::new(store.clone());

        session.clear_corrupted_data();
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn test_clear_corrupted_data_keeps_good_values() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, "opaque"),
            (USER_KEY, r#"{"id":"1","name":"Ana","email":"a@b.com"}"#),
        ]);
        let session = Session::new(store.clone());

        session.clear_corrupted_data();
        assert_eq!(session.token().as_deref(), Some("opaque"));
        assert_eq!(session.get_user().map(|u| u.name), Some("Ana".to_string()));
    }

    #[test]
    fn test_extract_user_from_token() {
        let session = Session::new(MemoryStore::new());
        session.set_token(&make_token(r#"{"email": "a@b.com", "name": "Ana"}"#));

        let claims = session.extract_user_from_token().unwrap();
        assert_eq!(claims.email.as_deref(), Some("a@b.com"));
        assert_eq!(claims.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_sign_out() {
        let store = MemoryStore::with_entries([
            (TOKEN_KEY, "opaque"),
            (USER_KEY, r#"{"name":"Ana","email":"a@b.com"}"#),
        ]);
        let session = Session::new(store.clone());

        session.sign_out();
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }
}
