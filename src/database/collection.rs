use crate::models::announcement::Announcement;
use crate::models::error::StoreError;
use crate::models::quiz::Quiz;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A record type that can live in a collection.
pub trait Document: Clone + Send + Sync + 'static {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
}

impl Document for Announcement {
    const KIND: &'static str = "Announcement";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Document for Quiz {
    const KIND: &'static str = "Quiz";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Data access for one entity type. Every method is a single storage call.
#[async_trait]
pub trait Collection<D: Document>: Send + Sync {
    async fn insert(&self, document: &D) -> Result<(), StoreError>;

    /// Newest first.
    async fn find_all(&self) -> Result<Vec<D>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<D>, StoreError>;

    /// Returns `false` when no document with that id exists anymore.
    async fn replace(&self, document: &D) -> Result<bool, StoreError>;

    /// Returns `false` when nothing was removed.
    async fn remove(&self, id: Uuid) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub type AnnouncementCollection = dyn Collection<Announcement>;

#[async_trait]
pub trait QuizCollection: Collection<Quiz> {
    /// Quizzes due at or after `instant`, newest first.
    async fn find_due_from(&self, instant: DateTime<Utc>) -> Result<Vec<Quiz>, StoreError>;

    /// Quizzes whose course contains `needle` ignoring case, soonest due first.
    async fn find_by_course(&self, needle: &str) -> Result<Vec<Quiz>, StoreError>;
}
