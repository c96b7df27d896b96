#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

fn test_config() -> Option<DatabaseConfig> {
    let mut cfg = DatabaseConfig::default();
    if let Err(e) = cfg.normalize_from_env() {
        eprintln!("skip: unusable database settings: {}", e);
        return None;
    }
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    Some(cfg)
}

/// A live Postgres connection with the schema migrated, or `None` when
/// `SKIP_DB_TESTS` is set or the database cannot be reached.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let cfg = test_config()?;
    let cfg_ref = &cfg;
    let migrated = *MIGRATED
        .get_or_init(|| async move {
            match connect_with_config(cfg_ref).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    // Fresh connection for the current test's runtime
    connect_with_config(&cfg).await.ok()
}
