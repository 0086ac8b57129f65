// src/auth/sessions.rs
use crate::auth::identity::Traveler;
use base64::Engine;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

pub const SESSION_COOKIE: &str = "session";
/// Seconds a session stays valid after sign-in.
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days
const TOKEN_BYTES: usize = 32;

type TokenKey = [u8; 32];

#[derive(Debug)]
struct Session {
    traveler: Traveler,
    expires_at: i64,
}

/// In-memory sessions keyed by token hash. Lost on restart.
/// `now` is a unix timestamp in seconds.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<TokenKey, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session and return the raw token for the cookie.
    /// Expired sessions are dropped on the way.
    pub fn create(&self, traveler: Traveler, now: i64) -> String {
        let token = new_token(&mut OsRng);
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);

        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(
            token_key(&token),
            Session {
                traveler,
                expires_at: now + SESSION_TTL_SECS,
            },
        );
        token
    }

    pub fn load(&self, raw_token: &str, now: i64) -> Option<Traveler> {
        let key = token_key(raw_token);
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);

        let session = sessions.get(&key)?;
        if session.expires_at > now {
            return Some(session.traveler.clone());
        }

        sessions.remove(&key);
        None
    }

    pub fn revoke(&self, raw_token: &str) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&token_key(raw_token))
            .is_some()
    }

    /// Sessions currently held, expired ones included until pruned.
    pub fn count(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Random URL-safe base64 token, unpadded so it sits in a cookie as-is.
fn new_token<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Sessions are stored under the SHA-256 of the token, never the token itself.
fn token_key(token: &str) -> TokenKey {
    Sha256::digest(token.as_bytes()).into()
}

/// Value of the session cookie in a `Cookie` header, if any.
pub fn session_token(cookie_header: &str) -> Option<String> {
    Cookie::split_parse(cookie_header)
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value_trimmed().to_owned())
        .filter(|v| !v.is_empty())
}

fn base_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn session_cookie(token: &str) -> String {
    let mut c = base_cookie(token.to_owned());
    c.set_max_age(Duration::seconds(SESSION_TTL_SECS));
    c.to_string()
}

pub fn expired_session_cookie() -> String {
    let mut c = base_cookie(String::new());
    c.make_removal();
    c.to_string()
}
