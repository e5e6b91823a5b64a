use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the interview conversation. Never mutated once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Role,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    fn new(speaker: Role, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Junior,
    #[serde(alias = "Mid-Level")]
    Mid,
    Senior,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Junior => "Junior",
            Difficulty::Mid => "Mid-Level",
            Difficulty::Senior => "Senior",
        };
        f.write_str(label)
    }
}

/// Settings a session is bound to. Changing any of them means a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewConfig {
    pub role: String,
    pub topic: String,
    pub difficulty: Difficulty,
}

/// Where a session sits in the turn protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No interview started yet, or just reset.
    Empty,
    /// The interviewer spoke last; waiting on the candidate.
    AwaitingAnswer,
    /// The candidate's last answer never got a reply (the model call failed).
    AwaitingReply,
}

/// Role presets offered by the dashboard; free text is accepted too.
pub const SUGGESTED_ROLES: &[&str] = &[
    "Python Developer",
    "Data Scientist",
    "AI Engineer",
    "Product Manager",
];

pub const SUGGESTED_TOPICS: &[&str] = &["Technical Skills", "Behavioral (HR)", "System Design"];
