use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use bazaar_core::{DomainResult, ValidationReport};

fn email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static pattern"))
}

/// Registration request. The raw password never leaves this type except
/// through [`persist_user`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub raw_password: String,
}

impl NewUser {
    pub fn check(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.username.trim().is_empty() {
            report.reject("username", "must not be empty");
        }
        if !email_shape().is_match(&self.email) {
            report.reject("email", "must be a valid email address");
        }
        if self.raw_password.is_empty() {
            report.reject("raw_password", "must not be empty");
        }
        report
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.check().into_result()
    }
}

/// What clients get back: identity fields only, never a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

/// Internal record, password already hashed. Deliberately not `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub hashed_password: String,
}

impl StoredUser {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
        }
    }
}

// Demo hash, nothing more. A real deployment would use a KDF.
fn hash_password(raw_password: &str) -> String {
    format!("hashed{raw_password}")
}

/// "Persist" a new user (nothing is actually stored in this demo).
pub fn persist_user(user: NewUser) -> StoredUser {
    let stored = StoredUser {
        hashed_password: hash_password(&user.raw_password),
        username: user.username,
        email: user.email,
        full_name: user.full_name,
    };
    tracing::info!(username = %stored.username, "user saved");
    stored
}
