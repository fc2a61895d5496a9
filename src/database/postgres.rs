use crate::database::collection::{Collection, QuizCollection};
use crate::database::connection::DbPool;
use crate::models::announcement::Announcement;
use crate::models::error::StoreError;
use crate::models::quiz::Quiz;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

async fn ping(pool: &DbPool) -> Result<(), StoreError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PgAnnouncements {
    pool: DbPool,
}

impl PgAnnouncements {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Collection<Announcement> for PgAnnouncements {
    async fn insert(&self, announcement: &Announcement) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO announcements (id, author_name, author_role, course, message, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(announcement.id)
        .bind(&announcement.author_name)
        .bind(&announcement.author_role)
        .bind(&announcement.course)
        .bind(&announcement.message)
        .bind(announcement.created_at)
        .bind(announcement.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Announcement>, StoreError> {
        let announcements = sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(announcements)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>, StoreError> {
        let announcement =
            sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(announcement)
    }

    async fn replace(&self, announcement: &Announcement) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE announcements
             SET author_name = $2, author_role = $3, course = $4, message = $5, updated_at = $6
             WHERE id = $1",
        )
        .bind(announcement.id)
        .bind(&announcement.author_name)
        .bind(&announcement.author_role)
        .bind(&announcement.course)
        .bind(&announcement.message)
        .bind(announcement.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        ping(&self.pool).await
    }
}

#[derive(Debug, Clone)]
pub struct PgQuizzes {
    pool: DbPool,
}

impl PgQuizzes {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Collection<Quiz> for PgQuizzes {
    async fn insert(&self, quiz: &Quiz) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO quizzes (id, title, course, topic, due_date, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(quiz.id)
        .bind(&quiz.title)
        .bind(&quiz.course)
        .bind(&quiz.topic)
        .bind(quiz.due_date)
        .bind(quiz.created_at)
        .bind(quiz.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Quiz>, StoreError> {
        let quizzes = sqlx::query_as::<_, Quiz>("SELECT * FROM quizzes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(quizzes)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Quiz>, StoreError> {
        let quiz = sqlx::query_as::<_, Quiz>("SELECT * FROM quizzes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(quiz)
    }

    async fn replace(&self, quiz: &Quiz) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "UPDATE quizzes
             SET title = $2, course = $3, topic = $4, due_date = $5, updated_at = $6
             WHERE id = $1",
        )
        .bind(quiz.id)
        .bind(&quiz.title)
        .bind(&quiz.course)
        .bind(&quiz.topic)
        .bind(quiz.due_date)
        .bind(quiz.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM quizzes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        ping(&self.pool).await
    }
}

#[async_trait]
impl QuizCollection for PgQuizzes {
    async fn find_due_from(&self, instant: DateTime<Utc>) -> Result<Vec<Quiz>, StoreError> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            "SELECT * FROM quizzes WHERE due_date >= $1 ORDER BY created_at DESC",
        )
        .bind(instant)
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }

    async fn find_by_course(&self, needle: &str) -> Result<Vec<Quiz>, StoreError> {
        // strpos keeps `%` and `_` literal, unlike ILIKE.
        let quizzes = sqlx::query_as::<_, Quiz>(
            "SELECT * FROM quizzes WHERE strpos(lower(course), lower($1)) > 0 ORDER BY due_date ASC",
        )
        .bind(needle)
        .fetch_all(&self.pool)
        .await?;

        Ok(quizzes)
    }
}
