use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use desap_core::CoreError;
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// The backend failed or could not be reached.
    Upstream { status: StatusCode, message: String },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream { status, message } => (status, message),
            AppError::Internal(msg) => {
                // Log the real error server-side, return generic message to client
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor. Tente novamente.".to_string(),
                )
            }
        };

        let body = ErrorBody {
            success: false,
            error: message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        let message = e.user_message();
        match e {
            CoreError::Validation(_) => AppError::BadRequest(message),
            CoreError::NotFound(_) => AppError::NotFound(message),
            CoreError::Status { status, .. } if (400..500).contains(&status) => {
                AppError::Upstream {
                    status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                    message,
                }
            }
            CoreError::Status { status, .. } => {
                tracing::warn!("Backend answered {status}");
                AppError::Upstream {
                    status: StatusCode::BAD_GATEWAY,
                    message,
                }
            }
            CoreError::Transport(ref detail) => {
                tracing::warn!("Backend unreachable: {detail}");
                AppError::Upstream {
                    status: StatusCode::BAD_GATEWAY,
                    message,
                }
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}
