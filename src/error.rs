use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// Application error types
///
/// The core itself never fails; these cover the HTTP boundary only.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request data
    ValidationError(String),
    /// Season id not present in the league
    SeasonNotFound(String),
    /// Racer id not registered in the season
    RacerNotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::SeasonNotFound(id) => write!(f, "Season not found: {}", id),
            AppError::RacerNotFound(id) => write!(f, "Racer not found: {}", id),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::SeasonNotFound(_) => StatusCode::NOT_FOUND,
            AppError::RacerNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::ValidationError(msg) => ("validation_error", msg.clone()),
            AppError::SeasonNotFound(id) => ("season_not_found", id.clone()),
            AppError::RacerNotFound(id) => ("racer_not_found", id.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}

/// Validation functions
pub fn validate_position(position: i32) -> Result<(), AppError> {
    if position < 1 {
        return Err(AppError::ValidationError(format!(
            "Finishing position must be a positive integer, got {}",
            position
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_position_valid() {
        assert!(validate_position(1).is_ok());
        assert!(validate_position(10).is_ok());
        // Positions past the scoring table are accepted; they just score zero.
        assert!(validate_position(25).is_ok());
    }

    #[test]
    fn test_validate_position_invalid() {
        assert!(validate_position(0).is_err());
        assert!(validate_position(-1).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::ValidationError("test error".to_string());
        assert!(err.to_string().contains("Validation error"));
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::SeasonNotFound("".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::RacerNotFound("".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
