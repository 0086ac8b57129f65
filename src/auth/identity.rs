// src/auth/identity.rs

use crate::errors::ServerError;

const GUEST_EMAIL: &str = "guest_user@example.com";

/// Placeholder social sign-in buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Facebook,
}

impl Provider {
    pub fn parse(raw: &str) -> Result<Self, ServerError> {
        match raw {
            "google" => Ok(Provider::Google),
            "facebook" => Ok(Provider::Facebook),
            other => Err(ServerError::BadRequest(format!("unknown provider: {other}"))),
        }
    }

    pub fn guest_email(self) -> &'static str {
        match self {
            Provider::Google => "guest_google@example.com",
            Provider::Facebook => "guest_facebook@example.com",
        }
    }
}

/// Who is browsing, as remembered by their session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traveler {
    pub email: String,
    pub country: Option<String>,
}

impl Traveler {
    /// Identity from the email form; a blank address signs in as the guest user.
    pub fn from_form(email: &str, country: Option<&str>) -> Self {
        let email = email.trim();
        Self {
            email: if email.is_empty() {
                GUEST_EMAIL.to_string()
            } else {
                email.to_string()
            },
            country: country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }

    pub fn from_provider(provider: Provider) -> Self {
        Self {
            email: provider.guest_email().to_string(),
            country: None,
        }
    }

    pub fn display_name(&self) -> String {
        display_name(&self.email)
    }
}

/// "jane.doe@x.com" -> "Jane Doe". Values without '@' are returned as-is.
pub fn display_name(email: &str) -> String {
    let Some((local, _)) = email.split_once('@') else {
        return email.to_string();
    };
    title_case(&local.replace('.', " "))
}

/// Upper-case the first letter of each alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
