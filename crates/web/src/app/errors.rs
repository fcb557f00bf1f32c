use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use baseshop_commanding::CommandError;
use baseshop_container::ContainerError;
use baseshop_core::ProjectServiceError;
use baseshop_kernel::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
    }
}

pub fn command_error_to_response(err: CommandError) -> axum::response::Response {
    match err {
        CommandError::NotImplemented { .. } => {
            tracing::error!(error = %err, "command service is not configured");
            json_error(StatusCode::NOT_IMPLEMENTED, "not_implemented", err.to_string())
        }
        CommandError::Rejected(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "command_rejected", msg)
        }
    }
}

pub fn container_error_to_response(err: ContainerError) -> axum::response::Response {
    tracing::error!(error = %err, "service resolution failed");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "container_error",
        err.to_string(),
    )
}

pub fn project_error_to_response(err: ProjectServiceError) -> axum::response::Response {
    match err {
        ProjectServiceError::Domain(e) => domain_error_to_response(e),
        ProjectServiceError::Command(e) => command_error_to_response(e),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
