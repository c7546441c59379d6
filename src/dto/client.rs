//! DTOs shaped for the client templates.

use serde::Serialize;

use crate::domain::client::Client;
use crate::dto::project::ProjectView;

/// Data required to render the client details page.
#[derive(Debug, Serialize)]
pub struct ClientPageData {
    pub client: Client,
    pub projects: Vec<ProjectView>,
    /// Projects currently "In Progress".
    pub open_projects: usize,
}
