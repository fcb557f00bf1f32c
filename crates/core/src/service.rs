//! Application service for projects.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use baseshop_commanding::{CommandError, CommandService};
use baseshop_kernel::{DomainError, Entity, TracingEventPublisher, publish_domain_events};

use crate::id::ProjectId;
use crate::project::{CreateProject, Project};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Turns project intents into commands for the messaging toolkit.
pub struct ProjectService {
    commands: Arc<dyn CommandService>,
}

impl ProjectService {
    pub fn new(commands: Arc<dyn CommandService>) -> Self {
        Self { commands }
    }

    /// Create a project, hand `CreateProject` to the command service, then
    /// publish the project's pending domain events.
    ///
    /// Events stay buffered on the entity when the command is not accepted.
    pub async fn create_project(&self, name: &str) -> Result<Project, ProjectServiceError> {
        let now = Utc::now();
        let mut project = Project::create(ProjectId::new(), name, now)?;
        let command = CreateProject::for_project(&project, now)?;

        self.commands.send_async(Arc::new(command)).await?;

        let published = publish_domain_events(&mut project, &TracingEventPublisher)
            .unwrap_or_else(|never| match never {});
        tracing::info!(
            project_id = ?project.id(),
            published,
            "project created"
        );
        Ok(project)
    }
}

impl core::fmt::Debug for ProjectService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProjectService").finish_non_exhaustive()
    }
}
