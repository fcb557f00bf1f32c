use axum::{Router, routing::post};

use crate::app::dto::CreateProjectRequest;

pub mod projects;
pub mod system;

/// Router for the shop endpoints.
pub fn router() -> Router {
    Router::new().route(CreateProjectRequest::ROUTE, post(projects::create_project))
}
