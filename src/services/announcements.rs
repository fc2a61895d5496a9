use crate::database::collection::{AnnouncementCollection, Document};
use crate::models::announcement::{Announcement, AnnouncementPatch, NewAnnouncement};
use crate::models::error::StoreError;
use crate::services::clock::Clock;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Clone)]
pub struct AnnouncementService {
    collection: Arc<AnnouncementCollection>,
    clock: Arc<dyn Clock>,
}

impl AnnouncementService {
    pub fn new(collection: Arc<AnnouncementCollection>, clock: Arc<dyn Clock>) -> Self {
        Self { collection, clock }
    }

    pub async fn create(&self, input: NewAnnouncement) -> Result<Announcement, StoreError> {
        let announcement = Announcement::build(input, self.clock.now())?;
        self.collection.insert(&announcement).await?;

        info!("Stored announcement {}", announcement.id);
        Ok(announcement)
    }

    pub async fn list_all(&self) -> Result<Vec<Announcement>, StoreError> {
        self.collection.find_all().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Announcement, StoreError> {
        self.collection
            .find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found(Announcement::KIND, id))
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: AnnouncementPatch,
    ) -> Result<Announcement, StoreError> {
        patch.validate()?;

        let mut announcement = self.get_by_id(id).await?;
        announcement.apply(patch, self.clock.now());

        if !self.collection.replace(&announcement).await? {
            return Err(StoreError::not_found(Announcement::KIND, id));
        }

        info!("Updated announcement {}", id);
        Ok(announcement)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.collection.remove(id).await? {
            return Err(StoreError::not_found(Announcement::KIND, id));
        }

        info!("Deleted announcement {}", id);
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.collection.ping().await
    }
}
