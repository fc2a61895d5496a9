use crate::models::error::{FieldViolation, StoreError};
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError, web};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error body shared by every failing endpoint.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    #[schema(example = false)]
    success: bool,
    #[schema(example = "Quiz with ID 0b6c7f3e-2d1a-4c55-9a07-3f1e9d2b8c41 not found")]
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldViolation>>,
}

impl ApiResponse {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            error: message,
            fields: None,
        }
    }

    pub fn invalid(message: String, fields: Vec<FieldViolation>) -> Self {
        Self {
            success: false,
            error: message,
            fields: Some(fields),
        }
    }

    pub fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            StoreError::Validation(fields) => {
                ApiResponse::invalid(self.to_string(), fields.clone())
            }
            StoreError::NotFound { .. } => ApiResponse::error(self.to_string()),
            StoreError::Database(e) => {
                error!("Database error: {}", e);
                ApiResponse::error("Storage is unavailable".to_string())
            }
        };
        body.to_response(self.status_code())
    }
}

/// Ids that are not UUIDs cannot name a stored record.
pub fn parse_id(kind: &'static str, raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::not_found(kind, raw))
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected JSON payload: {}", err);
        let response = ApiResponse::error(err.to_string()).to_response(StatusCode::BAD_REQUEST);
        InternalError::from_response(err, response).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        warn!("Rejected query string: {}", err);
        let response = ApiResponse::error(err.to_string()).to_response(StatusCode::BAD_REQUEST);
        InternalError::from_response(err, response).into()
    })
}
