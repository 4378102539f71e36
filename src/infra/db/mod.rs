//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect using application config and run pending migrations.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        Self::connect_with(Self::options(config)).await
    }

    /// Connect with explicit options and run pending migrations.
    pub async fn connect_with(options: ConnectOptions) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(options).await?;

        Migrator::up(&connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(Self { connection })
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(Self::options(config)).await?;
        Ok(Self { connection })
    }

    fn options(config: &Config) -> ConnectOptions {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options
            .max_connections(config.database_max_connections)
            .sqlx_logging(false);
        options
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        // Creates the tracking table on a database that was never migrated
        Migrator::install(&self.connection).await?;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory(migrate: bool) -> Database {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).sqlx_logging(false);

        if migrate {
            Database::connect_with(options).await.unwrap()
        } else {
            let connection = SeaDatabase::connect(options).await.unwrap();
            Database { connection }
        }
    }

    #[tokio::test]
    async fn test_status_on_unmigrated_database() {
        let db = memory(false).await;

        let status = db.migration_status().await.unwrap();

        assert_eq!(status.len(), 1);
        assert!(!status[0].1);
    }

    #[tokio::test]
    async fn test_connect_with_applies_migrations() {
        let db = memory(true).await;

        let status = db.migration_status().await.unwrap();

        assert!(status.iter().all(|(_, applied)| *applied));
        assert!(db.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_rollback_marks_migration_pending() {
        let db = memory(true).await;

        db.rollback_migration().await.unwrap();

        let status = db.migration_status().await.unwrap();
        assert!(status.iter().all(|(_, applied)| !*applied));
    }
}
