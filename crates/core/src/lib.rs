//! `baseshop-core` — the shop's domain module.
//!
//! Domain types (no IO, no HTTP), the application service that turns intent
//! into commands, and the container module that wires both into the object
//! container.

pub mod id;
pub mod module;
pub mod project;
pub mod service;

pub use id::{CommandId, ProjectId};
pub use module::DefaultCoreModule;
pub use project::{CreateProject, Project, ProjectCreated, ProjectEvent, ProjectRenamed};
pub use service::{ProjectService, ProjectServiceError};
