use crate::database::collection::Document;
use crate::models::announcement::Announcement;
use crate::requests::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest};
use crate::services::announcements::AnnouncementService;
use crate::utils::helpers::{ApiResponse, parse_id};
use actix_web::{HttpResponse, Result, web};
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = "announcements",
    request_body = CreateAnnouncementRequest,
    responses(
        (status = 201, description = "Announcement created", body = Announcement),
        (status = 400, description = "Invalid announcement payload", body = ApiResponse)
    )
)]
pub async fn create(
    service: web::Data<AnnouncementService>,
    request: web::Json<CreateAnnouncementRequest>,
) -> Result<HttpResponse> {
    info!("Creating announcement by {}", request.author_name);

    let announcement = service.create(request.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(announcement))
}

#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = "announcements",
    responses(
        (status = 200, description = "All announcements, newest first", body = [Announcement])
    )
)]
pub async fn all(service: web::Data<AnnouncementService>) -> Result<HttpResponse> {
    info!("Getting all announcements");

    let announcements = service.list_all().await?;
    Ok(HttpResponse::Ok().json(announcements))
}

#[utoipa::path(
    get,
    path = "/api/announcements/{id}",
    tag = "announcements",
    params(("id" = String, Path, description = "Announcement id")),
    responses(
        (status = 200, description = "The announcement", body = Announcement),
        (status = 404, description = "Announcement not found", body = ApiResponse)
    )
)]
pub async fn get_announcement(
    service: web::Data<AnnouncementService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let announcement_id = parse_id(Announcement::KIND, &path)?;
    info!("Getting announcement {}", announcement_id);

    let announcement = service.get_by_id(announcement_id).await?;
    Ok(HttpResponse::Ok().json(announcement))
}

#[utoipa::path(
    patch,
    path = "/api/announcements/{id}",
    tag = "announcements",
    params(("id" = String, Path, description = "Announcement id")),
    request_body = UpdateAnnouncementRequest,
    responses(
        (status = 200, description = "Announcement updated", body = Announcement),
        (status = 400, description = "Invalid patch", body = ApiResponse),
        (status = 404, description = "Announcement not found", body = ApiResponse)
    )
)]
pub async fn update(
    service: web::Data<AnnouncementService>,
    path: web::Path<String>,
    request: web::Json<UpdateAnnouncementRequest>,
) -> Result<HttpResponse> {
    let announcement_id = parse_id(Announcement::KIND, &path)?;
    info!("Updating announcement {}", announcement_id);

    let announcement = service
        .update(announcement_id, request.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(announcement))
}

#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = "announcements",
    params(("id" = String, Path, description = "Announcement id")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 404, description = "Announcement not found", body = ApiResponse)
    )
)]
pub async fn delete(
    service: web::Data<AnnouncementService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let announcement_id = parse_id(Announcement::KIND, &path)?;
    info!("Deleting announcement {}", announcement_id);

    service.delete(announcement_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
