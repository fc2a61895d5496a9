use crate::handlers::health::{HealthResponse, ReadinessResponse};
use crate::models::announcement::Announcement;
use crate::models::error::FieldViolation;
use crate::models::quiz::Quiz;
use crate::requests::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest};
use crate::requests::quiz::{CreateQuizRequest, UpdateQuizRequest};
use crate::utils::helpers::ApiResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Dashboard API",
        version = "1.0.0",
        description = "API for managing student quizzes and announcements"
    ),
    paths(
        // Announcements
        crate::handlers::announcements::create,
        crate::handlers::announcements::all,
        crate::handlers::announcements::get_announcement,
        crate::handlers::announcements::update,
        crate::handlers::announcements::delete,

        // Quizzes
        crate::handlers::quizzes::create,
        crate::handlers::quizzes::all,
        crate::handlers::quizzes::upcoming,
        crate::handlers::quizzes::get_quiz,
        crate::handlers::quizzes::update,
        crate::handlers::quizzes::delete,

        // Health
        crate::handlers::health::health,
        crate::handlers::health::readiness,
    ),
    components(
        schemas(
            Announcement,
            CreateAnnouncementRequest,
            UpdateAnnouncementRequest,
            Quiz,
            CreateQuizRequest,
            UpdateQuizRequest,
            ApiResponse,
            FieldViolation,
            HealthResponse,
            ReadinessResponse
        )
    ),
    tags(
        (name = "announcements", description = "Course announcements"),
        (name = "quizzes", description = "Quizzes and due dates"),
        (name = "health", description = "Liveness and readiness checks"),
    )
)]
pub struct ApiDoc;
