use actix_web::{http::StatusCode, HttpResponse};

use crate::{database::DatabaseError, resolver::ResolveError, types::api::ErrorBody};

pub mod downloads;
pub mod health;
pub mod manifests;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Internal server error")]
    Database(#[from] DatabaseError),
    #[error("Internal server error")]
    SqlxError(#[from] sqlx::Error),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl From<ResolveError> for ApiError {
    fn from(value: ResolveError) -> Self {
        match value {
            ResolveError::Database(e) => ApiError::Database(e),
            not_found => ApiError::NotFound(not_found.to_string()),
        }
    }
}

impl ApiError {
    pub fn as_response(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
        }
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(self.as_response())
    }
}
