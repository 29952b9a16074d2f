//! Unified error types for the album service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Store-level errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No album matches the supplied id.
    #[error("nenhum item encontrado com este index")]
    NotFound {
        /// The id that matched nothing.
        id: String,
    },
}

/// Errors surfaced at the HTTP boundary.
///
/// Every variant maps to a fixed status code and a JSON body of the shape
/// `{"message": "..."}`. The message texts are part of the wire contract
/// and must not drift, including the odd "Book not found" on update.
#[derive(Error, Debug)]
pub enum ApiError {
    /// GET lookup found no album.
    #[error("album not found")]
    AlbumNotFound,

    /// POST body failed to parse into an album.
    #[error("erro no formato da requisição")]
    CreateBadBody,

    /// PUT body failed to parse into an album.
    #[error("formato do json está incorreto")]
    UpdateBadBody,

    /// PUT target id matched nothing.
    #[error("Book not found")]
    UpdateNotFound,

    /// DELETE target id matched nothing.
    #[error("nenhum item encontrado com este index")]
    DeleteNotFound,
}

impl ApiError {
    /// The HTTP status this error is surfaced with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AlbumNotFound | ApiError::UpdateNotFound | ApiError::DeleteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::CreateBadBody | ApiError::UpdateBadBody => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Human-readable message.
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Convenient Result type alias for handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
