use crate::database::collection::{Collection, Document, QuizCollection};
use crate::models::error::StoreError;
use crate::models::quiz::Quiz;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local collection used with `STORAGE=memory` and in tests.
#[derive(Debug)]
pub struct MemoryCollection<D> {
    documents: RwLock<HashMap<Uuid, D>>,
}

impl<D: Document> MemoryCollection<D> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    async fn select<F>(&self, predicate: F) -> Vec<D>
    where
        F: Fn(&D) -> bool,
    {
        let documents = self.documents.read().await;
        documents.values().filter(|d| predicate(d)).cloned().collect()
    }
}

fn newest_first<D: Document>(documents: &mut [D]) {
    documents.sort_by_key(|d| (Reverse(d.created_at()), d.id()));
}

#[async_trait]
impl<D: Document> Collection<D> for MemoryCollection<D> {
    async fn insert(&self, document: &D) -> Result<(), StoreError> {
        self.documents
            .write()
            .await
            .insert(document.id(), document.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<D>, StoreError> {
        let mut documents = self.select(|_| true).await;
        newest_first(&mut documents);
        Ok(documents)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<D>, StoreError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn replace(&self, document: &D) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(&document.id()) {
            Some(stored) => {
                *stored = document.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.documents.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl QuizCollection for MemoryCollection<Quiz> {
    async fn find_due_from(&self, instant: DateTime<Utc>) -> Result<Vec<Quiz>, StoreError> {
        let mut quizzes = self.select(|q| q.is_due_from(instant)).await;
        newest_first(&mut quizzes);
        Ok(quizzes)
    }

    async fn find_by_course(&self, needle: &str) -> Result<Vec<Quiz>, StoreError> {
        let mut quizzes = self.select(|q| q.course_contains(needle)).await;
        quizzes.sort_by_key(|q| (q.due_date, q.id));
        Ok(quizzes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::announcement::{Announcement, NewAnnouncement};
    use crate::models::quiz::NewQuiz;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn announcement(minutes: i64) -> Announcement {
        Announcement::build(
            NewAnnouncement {
                author_name: "Ms. Lina".to_string(),
                author_role: "Math teacher".to_string(),
                course: None,
                message: format!("Posted {minutes} minutes after the bell."),
            },
            base() + Duration::minutes(minutes),
        )
        .unwrap()
    }

    fn quiz(course: &str, due_in_hours: i64, created_minutes: i64) -> Quiz {
        Quiz::build(
            NewQuiz {
                title: format!("{course} quiz"),
                course: course.to_string(),
                topic: "Review".to_string(),
                due_date: Some(base() + Duration::hours(due_in_hours)),
            },
            base() + Duration::minutes(created_minutes),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn find_all_is_newest_first() {
        let collection = MemoryCollection::<Announcement>::new();
        for minutes in [5, 1, 9, 3] {
            collection.insert(&announcement(minutes)).await.unwrap();
        }

        let found = collection.find_all().await.unwrap();
        let created: Vec<_> = found.iter().map(|a| a.created_at).collect();
        let mut expected = created.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(created, expected);
        assert_eq!(found.len(), 4);
    }

    #[tokio::test]
    async fn replace_and_remove_report_missing_documents() {
        let collection = MemoryCollection::<Announcement>::new();
        let stored = announcement(0);

        assert!(!collection.replace(&stored).await.unwrap());
        assert!(!collection.remove(stored.id).await.unwrap());

        collection.insert(&stored).await.unwrap();
        let mut changed = stored.clone();
        changed.message = "A completely different message.".to_string();
        assert!(collection.replace(&changed).await.unwrap());
        assert_eq!(
            collection.find_by_id(stored.id).await.unwrap(),
            Some(changed)
        );

        assert!(collection.remove(stored.id).await.unwrap());
        assert_eq!(collection.find_by_id(stored.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn due_filter_is_inclusive() {
        let collection = MemoryCollection::<Quiz>::new();
        let past = quiz("History", -1, 0);
        let boundary = quiz("Physics", 0, 1);
        let future = quiz("Math", 5, 2);
        for q in [&past, &boundary, &future] {
            collection.insert(q).await.unwrap();
        }

        let due = collection.find_due_from(base()).await.unwrap();
        let ids: Vec<_> = due.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![future.id, boundary.id]);
    }

    #[tokio::test]
    async fn course_search_is_sorted_by_due_date() {
        let collection = MemoryCollection::<Quiz>::new();
        let late = quiz("Physics", 48, 0);
        let soon = quiz("Applied physics", 2, 1);
        let other = quiz("Math", 1, 2);
        for q in [&late, &soon, &other] {
            collection.insert(q).await.unwrap();
        }

        let found = collection.find_by_course("PHYS").await.unwrap();
        let ids: Vec<_> = found.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![soon.id, late.id]);
    }
}
