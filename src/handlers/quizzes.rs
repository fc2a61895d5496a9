use crate::database::collection::Document;
use crate::models::quiz::Quiz;
use crate::requests::quiz::{CreateQuizRequest, QuizListQuery, UpdateQuizRequest};
use crate::services::quizzes::QuizService;
use crate::utils::helpers::{ApiResponse, parse_id};
use actix_web::{HttpResponse, Result, web};
use tracing::info;

#[utoipa::path(
    post,
    path = "/api/quizzes",
    tag = "quizzes",
    request_body = CreateQuizRequest,
    responses(
        (status = 201, description = "Quiz created", body = Quiz),
        (status = 400, description = "Invalid quiz payload", body = ApiResponse)
    )
)]
pub async fn create(
    service: web::Data<QuizService>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse> {
    info!("Creating quiz {:?} for {:?}", request.title, request.course);

    let quiz = service.create(request.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[utoipa::path(
    get,
    path = "/api/quizzes",
    tag = "quizzes",
    params(QuizListQuery),
    responses((status = 200, description = "Quizzes matching the filter", body = [Quiz]))
)]
pub async fn all(
    service: web::Data<QuizService>,
    query: web::Query<QuizListQuery>,
) -> Result<HttpResponse> {
    let filter = query.filter();
    info!("Listing quizzes with filter {:?}", filter);

    let quizzes = service.list(filter).await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/upcoming",
    tag = "quizzes",
    responses(
        (status = 200, description = "Quizzes due now or later, newest first", body = [Quiz])
    )
)]
pub async fn upcoming(service: web::Data<QuizService>) -> Result<HttpResponse> {
    info!("Getting upcoming quizzes");

    let quizzes = service.list_upcoming().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/{id}",
    tag = "quizzes",
    params(("id" = String, Path, description = "Quiz id")),
    responses(
        (status = 200, description = "The quiz", body = Quiz),
        (status = 404, description = "Quiz not found", body = ApiResponse)
    )
)]
pub async fn get_quiz(
    service: web::Data<QuizService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let quiz_id = parse_id(Quiz::KIND, &path)?;
    info!("Getting quiz {}", quiz_id);

    let quiz = service.get_by_id(quiz_id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[utoipa::path(
    patch,
    path = "/api/quizzes/{id}",
    tag = "quizzes",
    params(("id" = String, Path, description = "Quiz id")),
    request_body = UpdateQuizRequest,
    responses(
        (status = 200, description = "Quiz updated", body = Quiz),
        (status = 400, description = "Invalid patch", body = ApiResponse),
        (status = 404, description = "Quiz not found", body = ApiResponse)
    )
)]
pub async fn update(
    service: web::Data<QuizService>,
    path: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse> {
    let quiz_id = parse_id(Quiz::KIND, &path)?;
    info!("Updating quiz {}", quiz_id);

    let quiz = service.update(quiz_id, request.into_inner().into()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[utoipa::path(
    delete,
    path = "/api/quizzes/{id}",
    tag = "quizzes",
    params(("id" = String, Path, description = "Quiz id")),
    responses(
        (status = 204, description = "Quiz deleted"),
        (status = 404, description = "Quiz not found", body = ApiResponse)
    )
)]
pub async fn delete(
    service: web::Data<QuizService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let quiz_id = parse_id(Quiz::KIND, &path)?;
    info!("Deleting quiz {}", quiz_id);

    service.delete(quiz_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
