use crate::models::error::{FieldViolation, StoreError, require_text};
use crate::utils::time::truncate_to_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub course: String,
    pub topic: String,
    pub due_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `due_date` is optional here only so a missing value is reported alongside
/// the other field violations; `validate` rejects `None`.
#[derive(Debug, Clone, Default)]
pub struct NewQuiz {
    pub title: String,
    pub course: String,
    pub topic: String,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct QuizPatch {
    pub title: Option<String>,
    pub course: Option<String>,
    pub topic: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl NewQuiz {
    pub fn validate(&self) -> Result<DateTime<Utc>, StoreError> {
        let mut violations = Vec::new();
        require_text(&mut violations, "title", &self.title);
        require_text(&mut violations, "course", &self.course);
        require_text(&mut violations, "topic", &self.topic);

        match self.due_date {
            Some(due_date) => {
                StoreError::check(violations)?;
                Ok(due_date)
            }
            None => {
                violations.push(FieldViolation::new(
                    "dueDate",
                    "dueDate must be a valid ISO 8601 date string",
                ));
                Err(StoreError::Validation(violations))
            }
        }
    }
}

impl QuizPatch {
    pub fn validate(&self) -> Result<(), StoreError> {
        let mut violations = Vec::new();
        if let Some(title) = &self.title {
            require_text(&mut violations, "title", title);
        }
        if let Some(course) = &self.course {
            require_text(&mut violations, "course", course);
        }
        if let Some(topic) = &self.topic {
            require_text(&mut violations, "topic", topic);
        }
        StoreError::check(violations)
    }
}

impl Quiz {
    pub fn build(input: NewQuiz, now: DateTime<Utc>) -> Result<Self, StoreError> {
        let due_date = input.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            course: input.course,
            topic: input.topic,
            due_date: truncate_to_millis(due_date),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(&mut self, patch: QuizPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(course) = patch.course {
            self.course = course;
        }
        if let Some(topic) = patch.topic {
            self.topic = topic;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = truncate_to_millis(due_date);
        }
        self.updated_at = now.max(self.created_at);
    }

    pub fn is_due_from(&self, instant: DateTime<Utc>) -> bool {
        self.due_date >= instant
    }

    /// Case-insensitive containment; the needle has no pattern syntax.
    pub fn course_contains(&self, needle: &str) -> bool {
        self.course
            .to_lowercase()
            .contains(needle.to_lowercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn input() -> NewQuiz {
        NewQuiz {
            title: "Unit 2 quiz".to_string(),
            course: "Physics".to_string(),
            topic: "Motion".to_string(),
            due_date: Some(now() + Duration::hours(24)),
        }
    }

    #[test]
    fn build_keeps_input_fields() {
        let quiz = Quiz::build(input(), now()).unwrap();
        assert_eq!(quiz.title, "Unit 2 quiz");
        assert_eq!(quiz.course, "Physics");
        assert_eq!(quiz.topic, "Motion");
        assert_eq!(quiz.due_date, now() + Duration::hours(24));
        assert_eq!(quiz.created_at, quiz.updated_at);
    }

    #[test]
    fn build_truncates_due_date_to_millis() {
        let precise = now() + Duration::nanoseconds(1_234_567);
        let quiz = Quiz::build(
            NewQuiz {
                due_date: Some(precise),
                ..input()
            },
            now(),
        )
        .unwrap();
        assert_eq!(quiz.due_date, now() + Duration::milliseconds(1));
    }

    #[test]
    fn missing_due_date_is_reported_with_other_fields() {
        let err = Quiz::build(
            NewQuiz {
                title: String::new(),
                due_date: None,
                ..input()
            },
            now(),
        )
        .unwrap_err();

        match err {
            StoreError::Validation(violations) => {
                let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
                assert_eq!(fields, vec!["title", "dueDate"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn due_boundary_is_inclusive() {
        let quiz = Quiz::build(input(), now()).unwrap();
        assert!(quiz.is_due_from(quiz.due_date));
        assert!(!quiz.is_due_from(quiz.due_date + Duration::milliseconds(1)));
    }

    #[test]
    fn course_match_ignores_case_and_position() {
        let quiz = Quiz::build(
            NewQuiz {
                course: "Applied Physics II".to_string(),
                ..input()
            },
            now(),
        )
        .unwrap();
        assert!(quiz.course_contains("phys"));
        assert!(quiz.course_contains("PHYSICS ii"));
        assert!(!quiz.course_contains("math"));
        assert!(!quiz.course_contains("phys.*"));
    }

    #[test]
    fn apply_updates_due_date_only() {
        let mut quiz = Quiz::build(input(), now()).unwrap();
        let later = now() + Duration::days(3);
        quiz.apply(
            QuizPatch {
                due_date: Some(later),
                ..Default::default()
            },
            now() + Duration::minutes(5),
        );
        assert_eq!(quiz.due_date, later);
        assert_eq!(quiz.title, "Unit 2 quiz");
        assert_eq!(quiz.updated_at, now() + Duration::minutes(5));
    }

    #[test]
    fn patch_rejects_empty_title() {
        let patch = QuizPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(patch.validate(), Err(StoreError::Validation(_))));
    }
}
