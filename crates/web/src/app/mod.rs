//! HTTP API application wiring (Axum router + container wiring).
//!
//! - `services.rs`: object container composition
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use baseshop_container::{ContainerResult, ObjectContainer};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over the default container (used by `main.rs`).
pub fn build_app() -> ContainerResult<Router> {
    let container = services::build_container()?;
    Ok(build_app_with(container))
}

/// Build the router over an already composed and built container.
pub fn build_app_with(container: ObjectContainer) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(container)))
}
