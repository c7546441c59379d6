//! Shared helpers for integration tests.
#![allow(dead_code)]

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use studioflow::db::{DbPool, establish_connection_pool};
use studioflow::schema::{clients, projects};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database in a temporary directory, migrated and removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Inserts a client and returns its id.
    pub fn insert_client(
        &self,
        name: &str,
        company: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> i32 {
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(clients::table)
            .values((
                clients::name.eq(name),
                clients::company.eq(company),
                clients::email.eq(email),
                clients::phone.eq(phone),
            ))
            .returning(clients::id)
            .get_result(&mut conn)
            .expect("insert client")
    }

    /// Inserts a project and returns its id. Dates are stored verbatim.
    pub fn insert_project(
        &self,
        client_id: i32,
        name: &str,
        status: Option<&str>,
        due_date: Option<&str>,
    ) -> i32 {
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(projects::table)
            .values((
                projects::client_id.eq(client_id),
                projects::name.eq(name),
                projects::status.eq(status),
                projects::due_date.eq(due_date),
            ))
            .returning(projects::id)
            .get_result(&mut conn)
            .expect("insert project")
    }
}
