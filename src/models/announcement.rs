use crate::models::error::{FieldViolation, StoreError, require_min_chars, require_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: Uuid,
    pub author_name: String,
    pub author_role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewAnnouncement {
    pub author_name: String,
    pub author_role: String,
    pub course: Option<String>,
    pub message: String,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct AnnouncementPatch {
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub course: Option<String>,
    pub message: Option<String>,
}

impl NewAnnouncement {
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "authorName", &self.author_name);
        require_text(&mut violations, "authorRole", &self.author_role);
        check_message(&mut violations, &self.message);
        StoreError::check(violations)
    }
}

impl AnnouncementPatch {
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut violations = Vec::new();
        if let Some(author_name) = &self.author_name {
            require_text(&mut violations, "authorName", author_name);
        }
        if let Some(author_role) = &self.author_role {
            require_text(&mut violations, "authorRole", author_role);
        }
        if let Some(message) = &self.message {
            check_message(&mut violations, message);
        }
        StoreError::check(violations)
    }
}

fn check_message(violations: &mut Vec<FieldViolation>, message: &str) {
    let before = violations.len();
    require_text(violations, "message", message);
    if violations.len() == before {
        require_min_chars(violations, "message", message, MESSAGE_MIN_CHARS);
    }
}

impl Announcement {
    /// Validates `input` and stamps a fresh record with `now` as both timestamps.
    pub fn build(input: NewAnnouncement, now: DateTime<Utc>) -> Result<Self, StoreError> {
        input.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            author_name: input.author_name,
            author_role: input.author_role,
            course: input.course,
            message: input.message,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges an already validated patch.
    pub fn apply(&mut self, patch: AnnouncementPatch, now: DateTime<Utc>) {
        if let Some(author_name) = patch.author_name {
            self.author_name = author_name;
        }
        if let Some(author_role) = patch.author_role {
            self.author_role = author_role;
        }
        if let Some(course) = patch.course {
            self.course = Some(course);
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
        self.updated_at = now.max(self.created_at);
    }
}
