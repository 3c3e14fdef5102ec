//! Login, restore, and logout against a mocked backend.

use httpmock::prelude::*;
use serde_json::json;

use pawly_client::{ApiClient, ApiError, JsonFileStore, SessionManager};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.base_url()))
}

#[tokio::test]
async fn login_persists_session_across_restart() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(json!({"email": "a@b.com", "password": "pw"}));
        // Mixed casing on purpose: that is what the backend actually does.
        then.status(200).json_body(json!({
            "Email": "a@b.com",
            "name": "Ada",
            "Role": "admin",
            "Token": "session-token"
        }));
    });

    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = JsonFileStore::new(dir.path().to_path_buf());
        let mut sessions = SessionManager::new(store, client_for(&server));
        sessions.restore();
        assert!(!sessions.is_authenticated());

        let session = sessions.login("a@b.com", "pw").await.expect("login");
        assert_eq!(session.email.as_deref(), Some("a@b.com"));
        assert_eq!(session.name.as_deref(), Some("Ada"));
        assert!(session.user_role().is_admin());
        assert_eq!(session.token.as_deref(), Some("session-token"));
    }

    // Fresh manager over the same directory simulates a reload.
    let store = JsonFileStore::new(dir.path().to_path_buf());
    let mut sessions = SessionManager::new(store, client_for(&server));
    sessions.restore();

    assert!(sessions.is_authenticated());
    let session = sessions.current().expect("restored session");
    assert_eq!(session.email.as_deref(), Some("a@b.com"));
    assert_eq!(session.token.as_deref(), Some("session-token"));
}

#[tokio::test]
async fn rejected_login_changes_nothing() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401);
    });

    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf());
    let mut sessions = SessionManager::new(store, client_for(&server));
    sessions.restore();

    let err = sessions.login("a@b.com", "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidCredentials));
    assert!(!sessions.is_authenticated());
    assert!(!dir.path().join("user.json").exists());
}

#[tokio::test]
async fn logout_then_restore_yields_no_session() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(200).json_body(json!({"email": "a@b.com"}));
    });

    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf());
    let mut sessions = SessionManager::new(store, client_for(&server));
    sessions.login("a@b.com", "pw").await.expect("login");
    sessions.logout();
    assert!(!sessions.is_authenticated());

    let store = JsonFileStore::new(dir.path().to_path_buf());
    let mut sessions = SessionManager::new(store, client_for(&server));
    sessions.restore();
    assert!(!sessions.is_authenticated());
}
