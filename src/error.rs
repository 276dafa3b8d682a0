use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// Error type for all API handlers. Each variant maps to the HTTP status
/// code the client sees; the message ends up in the JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    pub fn bad_request<S: ToString>(msg: S) -> Self {
        Self::BadRequest(msg.to_string())
    }

    pub fn unauthorized<S: ToString>(msg: S) -> Self {
        Self::Unauthorized(msg.to_string())
    }

    pub fn forbidden<S: ToString>(msg: S) -> Self {
        Self::Forbidden(msg.to_string())
    }

    pub fn not_found<S: ToString>(msg: S) -> Self {
        Self::NotFound(msg.to_string())
    }

    pub fn conflict<S: ToString>(msg: S) -> Self {
        Self::Conflict(msg.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Internal(err) => {
                log::error!("internal error: {:#}", err);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { message })
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Internal(anyhow::Error::new(err).context("database error"))
    }
}

impl<E> From<BlockingError<E>> for ApiError
where
    E: Into<ApiError> + std::fmt::Debug,
{
    fn from(err: BlockingError<E>) -> Self {
        match err {
            BlockingError::Error(e) => e.into(),
            BlockingError::Canceled => Self::Internal(anyhow::anyhow!("blocking task canceled")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_expected_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::from(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn diesel_errors_become_internal() {
        let err = ApiError::from(diesel::result::Error::NotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
