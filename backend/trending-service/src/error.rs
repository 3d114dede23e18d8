use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use video_host_client::HostError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Video host error: {0}")]
    Provider(String),

    #[error("Deadline exceeded: {0}")]
    Timeout(String),

    #[error("Operation canceled: {0}")]
    Canceled(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let code = self.status_code();

        HttpResponse::build(code).json(ErrorResponse {
            error: self.to_string(),
            code: code.as_u16(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Provider(_) => StatusCode::BAD_GATEWAY,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Database(_) | AppError::Canceled(_) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => AppError::Timeout(err.to_string()),
            sqlx::Error::PoolClosed => AppError::Canceled(err.to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<HostError> for AppError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::Timeout(msg) => AppError::Timeout(msg),
            HostError::Canceled(msg) => AppError::Canceled(msg),
            _ => AppError::Provider(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Database("down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Provider("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Timeout("slow".into()).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_host_timeout_stays_distinguishable() {
        let err = AppError::from(HostError::Timeout("deadline".into()));
        assert!(matches!(err, AppError::Timeout(_)));

        let err = AppError::from(HostError::NotFound("abc".into()));
        assert!(matches!(err, AppError::Provider(_)));
    }

    #[test]
    fn test_sqlx_pool_timeout_maps_to_timeout() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Timeout(_)));
    }
}
