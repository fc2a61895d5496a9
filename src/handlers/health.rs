use crate::services::announcements::AnnouncementService;
use crate::services::quizzes::QuizService;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "ok")]
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    #[schema(value_type = String, example = "ok")]
    status: &'static str,
    #[schema(value_type = String, example = "ok")]
    storage: &'static str,
}

/// Liveness: no I/O.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Readiness: both collections must answer a ping.
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "health",
    responses(
        (status = 200, description = "Storage is reachable", body = ReadinessResponse),
        (status = 503, description = "Storage is unreachable", body = ReadinessResponse)
    )
)]
pub async fn readiness(
    announcements: web::Data<AnnouncementService>,
    quizzes: web::Data<QuizService>,
) -> HttpResponse {
    let result = match announcements.ping().await {
        Ok(()) => quizzes.ping().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: "ok",
        }),
        Err(e) => {
            error!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                storage: "unhealthy",
            })
        }
    }
}
