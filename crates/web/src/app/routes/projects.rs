use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use baseshop_container::{ContainerExt, ObjectContainer};
use baseshop_core::ProjectService;
use baseshop_kernel::Entity;

use crate::app::{dto, errors};

pub async fn create_project(
    Extension(container): Extension<ObjectContainer>,
    Json(body): Json<dto::CreateProjectRequest>,
) -> axum::response::Response {
    let name = match body.validate() {
        Ok(name) => name,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let service = match container.resolve::<ProjectService>() {
        Ok(service) => service,
        Err(e) => return errors::container_error_to_response(e),
    };

    let project = match service.create_project(name).await {
        Ok(project) => project,
        Err(e) => return errors::project_error_to_response(e),
    };

    let id = project
        .id()
        .map(ToString::to_string)
        .unwrap_or_default();
    (
        StatusCode::CREATED,
        Json(dto::ProjectCreatedResponse {
            id,
            name: project.name().to_string(),
        }),
    )
        .into_response()
}
