//! Payloads of the `/api/clients` and `/api/projects` search endpoints.
//!
//! The same types are serialized by the server and decoded by
//! [`crate::search`], so every field the renderer can live without is
//! optional on the wire.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::client::ClientSummary;
use crate::domain::project::ProjectSummary;

/// Envelope returned by both search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchResult<T> {
    /// Missing or `null` `results` decodes as an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> SearchResult<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self { results }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientRecord {
    pub id: i32,
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: i32,
    pub name: Option<String>,
    pub client_id: i32,
    pub client_name: Option<String>,
    pub status: Option<String>,
    /// ISO date (`YYYY-MM-DD`).
    pub due_date: Option<String>,
}

impl From<ClientSummary> for ClientRecord {
    fn from(client: ClientSummary) -> Self {
        Self {
            id: client.id,
            name: Some(client.name),
            company: client.company,
            email: client.email,
            phone: client.phone,
            project_count: Some(client.project_count),
        }
    }
}

impl From<ProjectSummary> for ProjectRecord {
    fn from(project: ProjectSummary) -> Self {
        Self {
            id: project.id,
            name: Some(project.name),
            client_id: project.client_id,
            client_name: Some(project.client_name),
            status: project.status,
            due_date: project.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}
