use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow status of a project.
///
/// Statuses are free text in storage; anything outside the three known values
/// is kept verbatim as [`ProjectStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Pending,
    Other(String),
}

impl ProjectStatus {
    /// Exact, case-sensitive match against the known labels.
    pub fn parse(value: &str) -> Self {
        match value {
            "Completed" => Self::Completed,
            "In Progress" => Self::InProgress,
            "Pending" => Self::Pending,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
            Self::Other(value) => value,
        }
    }

    /// Bootstrap badge classes used when displaying the status.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Completed => "bg-success",
            Self::InProgress => "bg-warning text-dark",
            Self::Pending => "bg-secondary",
            Self::Other(_) => "bg-light text-dark",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Project {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    pub status: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl Project {
    /// Parsed status; a missing status is treated as an unknown one.
    pub fn status(&self) -> ProjectStatus {
        ProjectStatus::parse(self.status.as_deref().unwrap_or_default())
    }
}

/// Project row returned by searches, joined with its client's name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProjectSummary {
    pub id: i32,
    pub name: String,
    pub client_id: i32,
    pub client_name: String,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
}
