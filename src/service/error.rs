use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::store::StoreError;
use crate::standings::aggregator::SkippedFixture;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    Conflict(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("standings were not saved for {} of {total} teams", .failed.len())]
    PartialRecalculation {
        failed: Vec<String>,
        total: usize,
        skipped: Vec<SkippedFixture>,
    },
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Store(_) | ServiceError::PartialRecalculation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            ServiceError::Store(err) => {
                error!("A store error occurred while handling a request. The error: {}", err);
                HttpResponse::build(status).json(json!({
                    "status": "failed",
                    "message": "An error occurred"
                }))
            }
            ServiceError::PartialRecalculation { failed, skipped, .. } => {
                HttpResponse::build(status).json(json!({
                    "status": "failed",
                    "message": self.to_string(),
                    "failedTeams": failed,
                    "skippedFixtures": skipped
                }))
            }
            _ => HttpResponse::build(status).json(json!({
                "status": "failed",
                "message": self.to_string()
            })),
        }
    }
}
