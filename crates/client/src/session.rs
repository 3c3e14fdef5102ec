//! Auth/session state manager.
//!
//! The backend emits the same user fields under two casings depending on the
//! endpoint (`email` on some, `Email` on others), so every inbound record -
//! login response, stored session, profile update - passes through a single
//! alias-table normalization before it is adopted. The manager owns the
//! current session exclusively and persists it under [`keys::USER`] on every
//! change.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pawly_core::UserRole;

use crate::api::{ApiClient, ApiError};
use crate::store::{StateStore, keys};

/// Canonical session field -> ordered list of accepted source keys.
///
/// The lower-camel key is preferred; the capitalized alternate is the
/// fallback. Empty strings count as absent.
const FIELD_ALIASES: &[(&str, [&str; 2])] = &[
    ("email", ["email", "Email"]),
    ("name", ["name", "Name"]),
    ("username", ["username", "Username"]),
    ("profilePictureUrl", ["profilePictureUrl", "ProfilePictureUrl"]),
    ("phoneNumber", ["phoneNumber", "PhoneNumber"]),
    ("role", ["role", "Role"]),
    ("token", ["token", "Token"]),
];

/// The authenticated user's identity and token, post-normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    /// Account email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Profile picture reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Role string as the backend sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Opaque session token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserSession {
    /// Build a session from a raw backend record, resolving field casing
    /// through the alias table. Unknown keys are dropped.
    #[must_use]
    pub fn normalize(raw: &Value) -> Self {
        let mut session = Self::default();
        let Some(obj) = raw.as_object() else {
            return session;
        };
        for (canonical, aliases) in FIELD_ALIASES {
            let value = aliases.iter().find_map(|key| {
                obj.get(*key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
            });
            if value.is_some() {
                *session.field_mut(canonical) = value;
            }
        }
        session
    }

    /// Overwrite this session's fields with the present fields of `other`.
    /// Absent fields keep their current value.
    fn merge_from(&mut self, other: Self) {
        for (canonical, _) in FIELD_ALIASES {
            let incoming = other.field(canonical).clone();
            if incoming.is_some() {
                *self.field_mut(canonical) = incoming;
            }
        }
    }

    /// The parsed role, defaulting to a regular user.
    #[must_use]
    pub fn user_role(&self) -> UserRole {
        self.role
            .as_deref()
            .map_or_else(UserRole::default, UserRole::from_str_lossy)
    }

    fn field(&self, canonical: &str) -> &Option<String> {
        match canonical {
            "email" => &self.email,
            "name" => &self.name,
            "username" => &self.username,
            "profilePictureUrl" => &self.profile_picture_url,
            "phoneNumber" => &self.phone_number,
            "role" => &self.role,
            _ => &self.token,
        }
    }

    fn field_mut(&mut self, canonical: &str) -> &mut Option<String> {
        match canonical {
            "email" => &mut self.email,
            "name" => &mut self.name,
            "username" => &mut self.username,
            "profilePictureUrl" => &mut self.profile_picture_url,
            "phoneNumber" => &mut self.phone_number,
            "role" => &mut self.role,
            _ => &mut self.token,
        }
    }
}

/// Callback invoked with the current session after every change.
type Subscriber = Box<dyn Fn(Option<&UserSession>) + Send + Sync>;

/// The auth/session state manager.
pub struct SessionManager<S: StateStore> {
    store: S,
    api: ApiClient,
    session: Option<UserSession>,
    subscribers: Vec<Subscriber>,
}

impl<S: StateStore> SessionManager<S> {
    /// Create a session manager. Call [`Self::restore`] before treating
    /// startup as finished.
    #[must_use]
    pub const fn new(store: S, api: ApiClient) -> Self {
        Self {
            store,
            api,
            session: None,
            subscribers: Vec::new(),
        }
    }

    /// Register a callback invoked with the session after every change.
    pub fn subscribe(
        &mut self,
        subscriber: impl Fn(Option<&UserSession>) + Send + Sync + 'static,
    ) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Adopt the persisted session record, if any. Idempotent; a missing or
    /// corrupt record leaves the session empty.
    pub fn restore(&mut self) {
        if let Some(raw) = self.store.load::<Value>(keys::USER) {
            self.session = Some(UserSession::normalize(&raw));
            self.notify();
        }
    }

    /// Exchange credentials for a session via the API gateway.
    ///
    /// On success the returned record is normalized, adopted, and persisted.
    /// On failure the gateway error is surfaced untransformed and no state
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] when the backend rejects the
    /// login, or any other [`ApiError`] the gateway raises.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserSession, ApiError> {
        let raw = self.api.login(email, password).await?;
        let session = UserSession::normalize(&raw);
        self.store.save(keys::USER, &session);
        self.session = Some(session.clone());
        self.notify();
        Ok(session)
    }

    /// Clear the session from memory and storage. Always succeeds.
    pub fn logout(&mut self) {
        self.session = None;
        self.store.clear(keys::USER);
        self.notify();
    }

    /// Merge a partial record (normalized) over the existing session and
    /// persist the result.
    ///
    /// With no active session this is a silent no-op: callers only reach it
    /// from behind an auth guard, and invalid mutations are absorbed rather
    /// than raised throughout the client.
    pub fn update_session(&mut self, partial: &Value) {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!("ignoring session update with no active session");
            return;
        };
        session.merge_from(UserSession::normalize(partial));
        self.store.save(keys::USER, session);
        self.notify();
    }

    /// The current session, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(self.session.as_ref());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::MemoryStore;

    fn manager(store: MemoryStore) -> SessionManager<MemoryStore> {
        // The gateway is never reached by these tests.
        SessionManager::new(store, ApiClient::new("http://localhost:1"))
    }

    #[test]
    fn test_normalize_prefers_lower_camel() {
        let session = UserSession::normalize(&json!({"email": "x", "Email": "y"}));
        assert_eq!(session.email.as_deref(), Some("x"));
    }

    #[test]
    fn test_normalize_falls_back_to_capitalized() {
        let session = UserSession::normalize(&json!({"Email": "a@b.com", "name": "A"}));
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
        assert_eq!(session.name.as_deref(), Some("A"));
        assert_eq!(session.username, None);
        assert_eq!(session.token, None);
    }

    #[test]
    fn test_normalize_treats_empty_as_absent() {
        let session = UserSession::normalize(&json!({"email": "", "Email": "a@b.com"}));
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_normalize_non_object_is_empty() {
        assert_eq!(UserSession::normalize(&json!(null)), UserSession::default());
    }

    #[test]
    fn test_restore_adopts_stored_record() {
        let store = MemoryStore::new();
        store.save(keys::USER, &json!({"Email": "a@b.com", "Token": "t"}));

        let mut sessions = manager(store);
        sessions.restore();
        assert!(sessions.is_authenticated());
        let session = sessions.current().unwrap();
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
        assert_eq!(session.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_restore_with_nothing_stored_leaves_none() {
        let mut sessions = manager(MemoryStore::new());
        sessions.restore();
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_logout_then_restore_yields_no_session() {
        let store = MemoryStore::new();
        store.save(keys::USER, &json!({"email": "a@b.com"}));

        let mut sessions = manager(store);
        sessions.restore();
        sessions.logout();
        assert!(!sessions.is_authenticated());

        sessions.restore();
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_update_session_merges_and_persists() {
        let store = MemoryStore::new();
        store.save(keys::USER, &json!({"email": "a@b.com", "name": "Old"}));

        let mut sessions = manager(store);
        sessions.restore();
        sessions.update_session(&json!({"Name": "New", "PhoneNumber": "555"}));

        let session = sessions.current().unwrap();
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
        assert_eq!(session.name.as_deref(), Some("New"));
        assert_eq!(session.phone_number.as_deref(), Some("555"));
    }

    #[test]
    fn test_update_session_without_session_is_noop() {
        let mut sessions = manager(MemoryStore::new());
        sessions.update_session(&json!({"name": "Nobody"}));
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn test_user_role_parsing() {
        let session = UserSession::normalize(&json!({"Role": "Admin"}));
        assert_eq!(session.user_role(), UserRole::Admin);
        assert!(session.user_role().is_admin());

        let session = UserSession::normalize(&json!({}));
        assert_eq!(session.user_role(), UserRole::User);
    }

    #[test]
    fn test_subscribers_see_changes() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicU32, Ordering};

        let notified = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&notified);

        let store = MemoryStore::new();
        store.save(keys::USER, &json!({"email": "a@b.com"}));
        let mut sessions = manager(store);
        sessions.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        sessions.restore();
        sessions.logout();
        assert_eq!(notified.load(Ordering::SeqCst), 2);
    }
}
