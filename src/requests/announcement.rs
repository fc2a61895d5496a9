use crate::models::announcement::{AnnouncementPatch, NewAnnouncement};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAnnouncementRequest {
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAnnouncementRequest {
    pub author_name: Option<String>,
    pub author_role: Option<String>,
    pub course: Option<String>,
    pub message: Option<String>,
}

impl From<CreateAnnouncementRequest> for NewAnnouncement {
    fn from(request: CreateAnnouncementRequest) -> Self {
        Self {
            author_name: request.author_name,
            author_role: request.author_role,
            course: request.course,
            message: request.message,
        }
    }
}

impl From<UpdateAnnouncementRequest> for AnnouncementPatch {
    fn from(request: UpdateAnnouncementRequest) -> Self {
        Self {
            author_name: request.author_name,
            author_role: request.author_role,
            course: request.course,
            message: request.message,
        }
    }
}
