use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                err @ RepositoryError::InsufficientStock { .. } => {
                    HttpError::Conflict(err.to_string())
                }
                err @ RepositoryError::VariantRequired(_) => {
                    HttpError::BadRequest(err.to_string())
                }
                RepositoryError::Custom(msg) => HttpError::Internal(msg),
                RepositoryError::Sqlx(_) => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),

            ServiceError::InvalidTokenType => HttpError::Unauthorized("Invalid token type".into()),

            err @ ServiceError::InvalidStatusTransition { .. } => {
                HttpError::Conflict(err.to_string())
            }

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_maps_to_conflict() {
        let err = ServiceError::Repo(RepositoryError::InsufficientStock {
            name: "Dog Food".into(),
            requested: 3,
            available: 2,
        });

        match HttpError::from(err) {
            HttpError::Conflict(msg) => {
                assert!(msg.contains("Dog Food"));
                assert!(msg.contains("2 available"));
            }
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn variant_required_maps_to_bad_request() {
        let err = ServiceError::Repo(RepositoryError::VariantRequired("Cat Litter".into()));

        assert!(matches!(HttpError::from(err), HttpError::BadRequest(_)));
    }

    #[test]
    fn forbidden_passes_through() {
        let err = ServiceError::Forbidden("cashier or admin role required".into());

        assert!(matches!(HttpError::from(err), HttpError::Forbidden(_)));
    }
}
