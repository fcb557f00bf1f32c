//! Project entity, its domain events and the command that creates it.

use core::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use baseshop_commanding::{Command, Message};
use baseshop_kernel::{
    DomainError, DomainEvent, DomainResult, Entity, EntityBase, PendingDomainEvents, same_entity,
};

use crate::id::{CommandId, ProjectId};

/// Event: ProjectCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCreated {
    pub project_id: ProjectId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProjectRenamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRenamed {
    pub project_id: ProjectId,
    pub previous_name: String,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectEvent {
    Created(ProjectCreated),
    Renamed(ProjectRenamed),
}

impl DomainEvent for ProjectEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProjectEvent::Created(_) => "core.project.created",
            ProjectEvent::Renamed(_) => "core.project.renamed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProjectEvent::Created(e) => e.occurred_at,
            ProjectEvent::Renamed(e) => e.occurred_at,
        }
    }
}

/// Entity: Project.
///
/// Equality is identity-based (see [`same_entity`]): two projects are the same
/// project iff their ids match, whatever their names.
#[derive(Debug, Clone)]
pub struct Project {
    base: EntityBase<ProjectId, ProjectEvent>,
    name: String,
}

impl Project {
    /// Project not yet assigned an identity. Raises no events.
    pub fn draft(name: &str) -> DomainResult<Self> {
        Ok(Self {
            base: EntityBase::new(),
            name: validate_name(name)?,
        })
    }

    pub fn create(id: ProjectId, name: &str, occurred_at: DateTime<Utc>) -> DomainResult<Self> {
        let name = validate_name(name)?;
        let mut project = Self {
            base: EntityBase::with_id(id),
            name: name.clone(),
        };
        project
            .base
            .register_domain_event(ProjectEvent::Created(ProjectCreated {
                project_id: id,
                name,
                occurred_at,
            }));
        Ok(project)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renaming to the current name is a no-op (no event).
    pub fn rename(&mut self, name: &str, occurred_at: DateTime<Utc>) -> DomainResult<()> {
        let name = validate_name(name)?;
        let project_id = *self
            .base
            .id()
            .ok_or_else(|| DomainError::invariant("cannot rename a project without an id"))?;
        if name == self.name {
            return Ok(());
        }

        let previous_name = core::mem::replace(&mut self.name, name.clone());
        self.base
            .register_domain_event(ProjectEvent::Renamed(ProjectRenamed {
                project_id,
                previous_name,
                name,
                occurred_at,
            }));
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("project name must not be empty"));
    }
    Ok(name.to_string())
}

impl Entity for Project {
    type Id = ProjectId;
    type Event = ProjectEvent;

    fn base(&self) -> &EntityBase<ProjectId, ProjectEvent> {
        &self.base
    }

    fn domain_events_mut(&mut self) -> PendingDomainEvents<'_, ProjectEvent> {
        self.base.pending_domain_events()
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        same_entity(self, other)
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

/// Command: CreateProject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProject {
    id: String,
    aggregate_root_id: String,
    pub project_id: ProjectId,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

impl CreateProject {
    /// Command asking the messaging toolkit to create `project`.
    pub fn for_project(project: &Project, timestamp: DateTime<Utc>) -> DomainResult<Self> {
        let project_id = *project
            .id()
            .ok_or_else(|| DomainError::invariant("project has no id"))?;
        Ok(Self {
            id: CommandId::new().to_string(),
            aggregate_root_id: project_id.to_string(),
            project_id,
            name: project.name().to_string(),
            timestamp,
        })
    }
}

impl Message for CreateProject {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Command for CreateProject {
    fn aggregate_root_id(&self) -> &str {
        &self.aggregate_root_id
    }

    fn command_type(&self) -> &'static str {
        "core.project.create"
    }
}
