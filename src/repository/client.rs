use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::domain::client::{Client, ClientSummary};
use crate::domain::search::SearchQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, DieselRepository};

const SEARCH_CLIENTS_SQL: &str = r"
SELECT clients.id, clients.name, clients.company, clients.email, clients.phone,
       COUNT(projects.id) AS project_count
FROM clients
LEFT JOIN projects ON projects.client_id = clients.id
WHERE ? = ''
   OR clients.name LIKE ? ESCAPE '\'
   OR clients.company LIKE ? ESCAPE '\'
   OR clients.email LIKE ? ESCAPE '\'
   OR clients.phone LIKE ? ESCAPE '\'
GROUP BY clients.id
ORDER BY clients.name, clients.id
";

impl ClientReader for DieselRepository {
    fn search_clients(&self, query: &SearchQuery) -> RepositoryResult<Vec<ClientSummary>> {
        use crate::models::client::ClientSummary as DbClientSummary;

        let mut conn = self.conn()?;
        let pattern = query.like_pattern();

        let rows = diesel::sql_query(SEARCH_CLIENTS_SQL)
            .bind::<Text, _>(query.as_str())
            .bind::<Text, _>(&pattern)
            .bind::<Text, _>(&pattern)
            .bind::<Text, _>(&pattern)
            .bind::<Text, _>(&pattern)
            .load::<DbClientSummary>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_client_by_id(&self, client_id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let client = clients::table
            .find(client_id)
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }
}
