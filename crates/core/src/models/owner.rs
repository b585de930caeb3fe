//! Owner model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account that lists spaces.
///
/// The email is the sole login key and is compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl Owner {
    pub fn new(first_name: String, last_name: String, mobile: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name,
            last_name,
            mobile,
            email,
            joined_at: Utc::now(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }
}

/// Identity providers offered on the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialProvider {
    Google,
    GitHub,
}

impl SocialProvider {
    pub fn name(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::GitHub => "GitHub",
        }
    }

    /// Fixed demo identity returned by the simulated OAuth flow
    pub fn demo_email(&self) -> &'static str {
        match self {
            SocialProvider::Google => "demo.google@example.com",
            SocialProvider::GitHub => "demo.github@example.com",
        }
    }

    /// Build the owner record registered on first social login
    pub fn new_owner(&self) -> Owner {
        Owner {
            id: format!("social_{}", Uuid::new_v4()),
            first_name: self.name().to_string(),
            last_name: "User".to_string(),
            mobile: String::new(),
            email: self.demo_email().to_string(),
            joined_at: Utc::now(),
        }
    }
}
