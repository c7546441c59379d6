use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};

use crate::domain::project::{Project as DomainProject, ProjectSummary as DomainProjectSummary};

/// Storage format of `start_date` and `due_date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates are free text in storage. Blank or unparseable values read as `None`.
fn parse_stored_date(value: Option<String>) -> Option<NaiveDate> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("Ignoring unparseable project date {value:?}: {err}");
            None
        }
    }
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::project::Project`].
pub struct Project {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub status: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
}

/// Row produced by the project search statement.
#[derive(Debug, QueryableByName)]
pub struct ProjectSummary {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Integer)]
    pub client_id: i32,
    #[diesel(sql_type = Text)]
    pub client_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub status: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub due_date: Option<String>,
}

impl From<Project> for DomainProject {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            client_id: project.client_id,
            name: project.name,
            status: project.status,
            description: project.description,
            notes: project.notes,
            start_date: parse_stored_date(project.start_date),
            due_date: parse_stored_date(project.due_date),
        }
    }
}

impl From<ProjectSummary> for DomainProjectSummary {
    fn from(row: ProjectSummary) -> Self {
        Self {
            id: row.id,
            name: row.name,
            client_id: row.client_id,
            client_name: row.client_name,
            status: row.status,
            due_date: parse_stored_date(row.due_date),
        }
    }
}
