//! Table-body markup for search results.
//!
//! Rows are produced by autoescaped Tera templates (`templates/rows/`), so
//! record fields can never inject markup. The same templates are loaded by the
//! server pages.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::project::ProjectStatus;
use crate::dto::api::{ClientRecord, ProjectRecord};

pub const NO_RESULTS_MESSAGE: &str = "No results";

const CLIENT_ROWS_TEMPLATE: &str = "rows/clients.html";
const PROJECT_ROWS_TEMPLATE: &str = "rows/projects.html";
const MESSAGE_ROW_TEMPLATE: &str = "rows/message.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Turns decoded records, or a status message, into table-body markup.
pub trait RowRenderer: Send + Sync + 'static {
    type Record: DeserializeOwned + Send + 'static;

    /// One row per record, in order.
    fn render_records(&self, records: &[Self::Record]) -> Result<String, RenderError>;

    /// A single muted row spanning the table.
    fn render_message(&self, message: &str) -> Result<String, RenderError>;

    /// Renders `records`, or the "No results" row when there are none.
    fn render(&self, records: &[Self::Record]) -> Result<String, RenderError> {
        if records.is_empty() {
            self.render_message(NO_RESULTS_MESSAGE)
        } else {
            self.render_records(records)
        }
    }
}

#[derive(Clone)]
struct RowTemplates {
    tera: Tera,
}

impl RowTemplates {
    fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                CLIENT_ROWS_TEMPLATE,
                include_str!("../../templates/rows/clients.html"),
            ),
            (
                PROJECT_ROWS_TEMPLATE,
                include_str!("../../templates/rows/projects.html"),
            ),
            (
                MESSAGE_ROW_TEMPLATE,
                include_str!("../../templates/rows/message.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    fn rows<T: Serialize>(&self, template: &str, rows: &[T]) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("rows", rows);
        Ok(self.tera.render(template, &context)?)
    }

    fn message(&self, colspan: usize, message: &str) -> Result<String, RenderError> {
        let mut context = Context::new();
        context.insert("colspan", &colspan);
        context.insert("message", message);
        Ok(self.tera.render(MESSAGE_ROW_TEMPLATE, &context)?)
    }
}

/// Display values of a client row, fallbacks applied.
#[derive(Serialize)]
struct ClientRow<'a> {
    id: i32,
    name: &'a str,
    company: &'a str,
    email: &'a str,
    phone: &'a str,
    project_count: i64,
}

impl<'a> From<&'a ClientRecord> for ClientRow<'a> {
    fn from(record: &'a ClientRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.as_deref().unwrap_or_default(),
            company: record.company.as_deref().unwrap_or_default(),
            email: record.email.as_deref().unwrap_or_default(),
            phone: record.phone.as_deref().unwrap_or_default(),
            project_count: record.project_count.unwrap_or(0),
        }
    }
}

/// Display values of a project row, fallbacks applied.
#[derive(Serialize)]
struct ProjectRow<'a> {
    id: i32,
    name: &'a str,
    client_id: i32,
    client_name: &'a str,
    status: &'a str,
    badge: &'static str,
    due_date: &'a str,
}

impl<'a> From<&'a ProjectRecord> for ProjectRow<'a> {
    fn from(record: &'a ProjectRecord) -> Self {
        let status = record.status.as_deref().unwrap_or_default();
        Self {
            id: record.id,
            name: record.name.as_deref().unwrap_or_default(),
            client_id: record.client_id,
            client_name: record.client_name.as_deref().unwrap_or_default(),
            status,
            badge: ProjectStatus::parse(status).badge_class(),
            due_date: record
                .due_date
                .as_deref()
                .filter(|date| !date.is_empty())
                .unwrap_or("-"),
        }
    }
}

/// Name, company, email, phone, project count and a View link.
#[derive(Clone)]
pub struct ClientRowRenderer {
    templates: RowTemplates,
}

impl ClientRowRenderer {
    /// Message rows span all columns.
    pub const COLUMNS: usize = 6;

    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            templates: RowTemplates::new()?,
        })
    }
}

impl RowRenderer for ClientRowRenderer {
    type Record = ClientRecord;

    fn render_records(&self, records: &[ClientRecord]) -> Result<String, RenderError> {
        let rows: Vec<ClientRow> = records.iter().map(ClientRow::from).collect();
        self.templates.rows(CLIENT_ROWS_TEMPLATE, &rows)
    }

    fn render_message(&self, message: &str) -> Result<String, RenderError> {
        self.templates.message(Self::COLUMNS, message)
    }
}

/// Name, client link, status badge, due date and a View link.
#[derive(Clone)]
pub struct ProjectRowRenderer {
    templates: RowTemplates,
}

impl ProjectRowRenderer {
    pub const COLUMNS: usize = 5;

    pub fn new() -> Result<Self, RenderError> {
        Ok(Self {
            templates: RowTemplates::new()?,
        })
    }
}

impl RowRenderer for ProjectRowRenderer {
    type Record = ProjectRecord;

    fn render_records(&self, records: &[ProjectRecord]) -> Result<String, RenderError> {
        let rows: Vec<ProjectRow> = records.iter().map(ProjectRow::from).collect();
        self.templates.rows(PROJECT_ROWS_TEMPLATE, &rows)
    }

    fn render_message(&self, message: &str) -> Result<String, RenderError> {
        self.templates.message(Self::COLUMNS, message)
    }
}
