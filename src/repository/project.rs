use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::project::{Project, ProjectSummary};
use crate::domain::search::SearchQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProjectReader};

// Projects without a due date, blank included, sort last.
const SEARCH_PROJECTS_SQL: &str = r"
SELECT projects.id, projects.name, projects.client_id, clients.name AS client_name,
       projects.status, projects.due_date
FROM projects
JOIN clients ON projects.client_id = clients.id
WHERE ? = ''
   OR projects.name LIKE ? ESCAPE '\'
   OR clients.name LIKE ? ESCAPE '\'
   OR projects.status LIKE ? ESCAPE '\'
ORDER BY NULLIF(projects.due_date, '') IS NULL, projects.due_date, projects.id
";

impl ProjectReader for DieselRepository {
    fn search_projects(&self, query: &SearchQuery) -> RepositoryResult<Vec<ProjectSummary>> {
        use crate::models::project::ProjectSummary as DbProjectSummary;

        let mut conn = self.conn()?;
        let pattern = query.like_pattern();

        let rows = diesel::sql_query(SEARCH_PROJECTS_SQL)
            .bind::<Text, _>(query.as_str())
            .bind::<Text, _>(&pattern)
            .bind::<Text, _>(&pattern)
            .bind::<Text, _>(&pattern)
            .load::<DbProjectSummary>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_project_by_id(&self, project_id: i32) -> RepositoryResult<Option<Project>> {
        use crate::models::project::Project as DbProject;
        use crate::schema::projects;

        let mut conn = self.conn()?;

        let project = projects::table
            .find(project_id)
            .select(DbProject::as_select())
            .first::<DbProject>(&mut conn)
            .optional()?;

        Ok(project.map(Into::into))
    }

    fn list_client_projects(&self, client_id: i32) -> RepositoryResult<Vec<Project>> {
        use crate::models::project::Project as DbProject;
        use crate::schema::projects;

        let mut conn = self.conn()?;

        let rows = projects::table
            .filter(projects::client_id.eq(client_id))
            .order(projects::id.asc())
            .select(DbProject::as_select())
            .load::<DbProject>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
