use crate::database::collection::{Document, QuizCollection};
use crate::models::error::StoreError;
use crate::models::quiz::{NewQuiz, Quiz, QuizPatch};
use crate::services::clock::Clock;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Which listing `GET /quizzes` resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizFilter {
    All,
    Upcoming,
    Course(String),
}

#[derive(Clone)]
pub struct QuizService {
    collection: Arc<dyn QuizCollection>,
    clock: Arc<dyn Clock>,
}

impl QuizService {
    pub fn new(collection: Arc<dyn QuizCollection>, clock: Arc<dyn Clock>) -> Self {
        Self { collection, clock }
    }

    pub async fn create(&self, input: NewQuiz) -> Result<Quiz, StoreError> {
        let quiz = Quiz::build(input, self.clock.now())?;
        self.collection.insert(&quiz).await?;

        info!("Stored quiz {} due {}", quiz.id, quiz.due_date);
        Ok(quiz)
    }

    pub async fn list(&self, filter: QuizFilter) -> Result<Vec<Quiz>, StoreError> {
        match filter {
            QuizFilter::All => self.list_all().await,
            QuizFilter::Upcoming => self.list_upcoming().await,
            QuizFilter::Course(course) => self.list_by_course(&course).await,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Quiz>, StoreError> {
        self.collection.find_all().await
    }

    pub async fn list_upcoming(&self) -> Result<Vec<Quiz>, StoreError> {
        let now = self.clock.now();
        self.collection.find_due_from(now).await
    }

    pub async fn list_by_course(&self, course: &str) -> Result<Vec<Quiz>, StoreError> {
        if course.is_empty() {
            return Ok(Vec::new());
        }
        self.collection.find_by_course(course).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Quiz, StoreError> {
        self.collection
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found(Quiz::KIND, id))
    }

    pub async fn update(&self, id: Uuid, patch: QuizPatch) -> Result<Quiz, StoreError> {
        patch.validate()?;

        let mut quiz = self.get_by_id(id).await?;
        quiz.apply(patch, self.clock.now());

        if !self.collection.replace(&quiz).await? {
            return Err(StoreError::not_found(Quiz::KIND, id));
        }

        info!("Updated quiz {}", id);
        Ok(quiz)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.collection.remove(id).await? {
            return Err(StoreError::not_found(Quiz::KIND, id));
        }

        info!("Deleted quiz {}", id);
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.collection.ping().await
    }
}
