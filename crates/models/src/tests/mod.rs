//! Tests against a live Postgres. Skipped when `SKIP_DB_TESTS` is set or no
//! database is reachable.

use crate::{db::connect, employee};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseBackend, EntityTrait, Statement};

/// Connect and migrate, or `None` when the database is unavailable.
async fn setup_test_db() -> Option<sea_orm::DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn employees_table_has_expected_columns() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let stmt = Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT column_name FROM information_schema.columns \
         WHERE table_name = 'employees' ORDER BY ordinal_position"
            .to_string(),
    );
    let rows = db.query_all(stmt).await?;
    let columns: Vec<String> = rows
        .iter()
        .map(|r| r.try_get::<String>("", "column_name"))
        .collect::<Result<_, _>>()?;
    let mut expected = vec!["id".to_string()];
    expected.extend(employee::REQUIRED_FIELDS.iter().map(|s| s.to_string()));
    assert_eq!(columns, expected);
    Ok(())
}

#[tokio::test]
async fn entity_insert_assigns_generated_id() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let fields = employee::EmployeeFields {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        patronymic: "-".into(),
        telephone: "+1".into(),
        email: "a@b.com".into(),
        country: "US".into(),
        city: "NY".into(),
    };
    let first = fields.to_active_model().insert(&db).await?;
    let second = fields.to_active_model().insert(&db).await?;
    assert!(second.id > first.id);
    assert_eq!(employee::EmployeeFields::from(first.clone()), fields);

    employee::Entity::delete_by_id(first.id).exec(&db).await?;
    employee::Entity::delete_by_id(second.id).exec(&db).await?;
    Ok(())
}
