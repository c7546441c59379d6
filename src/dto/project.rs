//! DTOs shaped for the project templates.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::project::Project;

/// Display values of a project, dates formatted and the badge resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectView {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub status: String,
    pub badge: &'static str,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            client_id: project.client_id,
            name: project.name.clone(),
            status: project.status.clone().unwrap_or_default(),
            badge: project.status().badge_class(),
            description: project.description.clone(),
            notes: project.notes.clone(),
            start_date: project.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            due_date: project.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Data required to render the project details page.
#[derive(Debug, Serialize)]
pub struct ProjectPageData {
    pub project: ProjectView,
    /// `None` only if the owning client row has gone missing.
    pub client: Option<Client>,
}
