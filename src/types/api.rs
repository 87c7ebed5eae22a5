use actix_web::{error::QueryPayloadError, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::endpoints::ApiError;

/// Body of every non-2xx response.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query string: {err}")).into()
}
