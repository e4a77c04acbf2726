//! Session-based authentication module.
//!
//! Sign-in checks the configured admin credential pair with constant-time
//! comparison to mitigate timing attacks, then issues an opaque bearer token.
//! Sessions live in process memory and expire after the configured TTL.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::AppError;

/// An issued admin session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

/// In-memory session store. Tokens survive until sign-out, expiry, or restart.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Issue a fresh session for the given email.
    pub fn issue(&self, email: &str) -> Session {
        let session = Session {
            token: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            expires_at: Utc::now()
                + chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::hours(24)),
        };

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.insert(session.token.clone(), session.clone());
        session
    }

    /// Look up a session by token. Expired entries are purged on lookup and
    /// reported as absent.
    pub fn get(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Remove a session. Idempotent.
    pub fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(token);
    }
}

/// Check a sign-in attempt against the configured admin credentials.
///
/// Fails closed when no credentials are configured. Both values are compared
/// even when the email already mismatched, so timing does not reveal which
/// half was wrong.
pub fn check_credentials(config: &Config, email: &str, password: &str) -> bool {
    let (Some(expected_email), Some(expected_password)) =
        (&config.admin_email, &config.admin_password)
    else {
        return false;
    };

    let email_ok = constant_time_compare(email, expected_email);
    let password_ok = constant_time_compare(password, expected_password);
    email_ok && password_ok
}

/// Extract the bearer token from a request's headers.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Middleware guarding mutation routes: the request must carry a bearer token
/// naming a live session.
pub async fn session_auth_layer(store: SessionStore, request: Request, next: Next) -> Response {
    match bearer_token(request.headers()) {
        Some(token) if store.get(&token).is_some() => next.run(request).await,
        Some(_) => unauthorized_response("Session expired or unknown"),
        None => unauthorized_response("Missing bearer token"),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    AppError::Unauthorized(message.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_creds(email: Option<&str>, password: Option<&str>) -> Config {
        Config {
            admin_email: email.map(|s| s.to_string()),
            admin_password: password.map(|s| s.to_string()),
            session_ttl: Duration::from_secs(3600),
            db_path: "./data/app.sqlite".into(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
        }
    }

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("hunter2-secret", "hunter2-secret"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("hunter2-secret", "hunter2-secreT"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-value"));
    }

    #[test]
    fn test_check_credentials_match() {
        let config = config_with_creds(Some("admin@wgwlawfirm.com"), Some("hunter2"));
        assert!(check_credentials(&config, "admin@wgwlawfirm.com", "hunter2"));
        assert!(!check_credentials(&config, "admin@wgwlawfirm.com", "wrong"));
        assert!(!check_credentials(&config, "other@wgwlawfirm.com", "hunter2"));
    }

    #[test]
    fn test_check_credentials_fail_closed_when_unconfigured() {
        let config = config_with_creds(None, None);
        assert!(!check_credentials(&config, "", ""));
        assert!(!check_credentials(&config, "admin@wgwlawfirm.com", "hunter2"));
    }

    #[test]
    fn test_session_round_trip() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let session = store.issue("admin@wgwlawfirm.com");

        let found = store.get(&session.token).expect("session should exist");
        assert_eq!(found.email, "admin@wgwlawfirm.com");

        store.revoke(&session.token);
        assert!(store.get(&session.token).is_none());
        // Revoking again is a no-op
        store.revoke(&session.token);
    }

    #[test]
    fn test_expired_session_purged_on_lookup() {
        let store = SessionStore::new(Duration::from_secs(0));
        let session = store.issue("admin@wgwlawfirm.com");
        assert!(store.get(&session.token).is_none());
    }

    #[test]
    fn test_unknown_token_absent() {
        let store = SessionStore::new(Duration::from_secs(3600));
        assert!(store.get("not-a-token").is_none());
    }
}
