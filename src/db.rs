use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
    Statement,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{
    destinasi, kegiatan_ref, nota_dinas, nota_peserta, nota_preview, nota_tujuan, pegawai,
    pejabat,
};

/// Initialize database connection and auto-migrate tables
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let database_url = config.connection_url();

    if config.url.is_some() {
        info!("Connecting to database from explicit URL");
    } else {
        info!("Connecting to database: {}:{}/{}", config.host, config.port, config.name);
    }

    let mut opt = ConnectOptions::new(&database_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(60))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;
    info!("Database connection established");

    auto_migrate(&db).await?;

    Ok(db)
}

/// Create every table of the schema if it does not exist yet
pub async fn auto_migrate<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Running auto-migration for all entities...");

    // 1. Reference tables and drafts
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(pegawai::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(pejabat::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(destinasi::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(kegiatan_ref::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(nota_preview::Entity)).await?;

    // 2. Memorandum master, references pejabat
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(nota_dinas::Entity)).await?;

    // 3. Join tables, reference nota_dinas and the reference tables
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(nota_peserta::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(nota_tujuan::Entity)).await?;

    info!("Auto-migration completed successfully");
    Ok(())
}

/// Create a table if it doesn't exist
async fn create_table_if_not_exists<C: ConnectionTrait>(
    db: &C,
    backend: DbBackend,
    mut stmt: TableCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();

    let sql = backend.build(&stmt);

    db.execute(Statement::from_string(backend, sql.to_string())).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_auto_migrate_is_idempotent() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        auto_migrate(&db).await.unwrap();
        auto_migrate(&db).await.unwrap();

        let rows = nota_dinas::Entity::find().limit(1).all(&db).await.unwrap();
        assert!(rows.is_empty());
        let drafts = nota_preview::Entity::find().limit(1).all(&db).await.unwrap();
        assert!(drafts.is_empty());
    }
}
