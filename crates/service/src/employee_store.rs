//! Persistence operations for employees.
//!
//! Each call runs exactly one statement. The pool lends a connection for that
//! statement and takes it back when the statement finishes, whether it
//! succeeded or not; for [`EmployeeStore::list_all`] that is when the stream is
//! exhausted or dropped. Nothing is retried.

use std::sync::Arc;

use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};
use models::employee::{self, Employee, EmployeeFields};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;

#[derive(Clone)]
pub struct EmployeeStore {
    db: Arc<DatabaseConnection>,
}

impl EmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self { Self::shared(Arc::new(db)) }

    pub fn shared(db: Arc<DatabaseConnection>) -> Self { Self { db } }

    /// Validate and insert; the database assigns the id.
    /// A rejected body never reaches the pool.
    #[instrument(skip(self, candidate))]
    pub async fn create(&self, candidate: Option<&Map<String, Value>>) -> Result<Employee, ServiceError> {
        let valid = employee::validate(candidate)?;
        let inserted = employee::Entity::insert(valid.fields.to_active_model())
            .exec(self.db.as_ref())
            .await
            .map_err(ServiceError::backend)?;
        let id = inserted.last_insert_id;
        info!(id, "employee created");
        Ok(valid.fields.with_id(id))
    }

    /// Stream every row without its id. A failure, including failing to get a
    /// connection, arrives as an `Err` item; rows already yielded stand.
    pub fn list_all(&self) -> BoxStream<'_, Result<EmployeeFields, ServiceError>> {
        debug!("streaming employees");
        fields_of(stream::once(employee::Entity::find().stream(self.db.as_ref())).try_flatten())
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ServiceError> {
        let found = employee::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(ServiceError::backend)?;
        found.map(Employee::from).ok_or(ServiceError::NotFound(id))
    }

    /// Overwrite all seven fields of row `id`. The row is not read back.
    #[instrument(skip(self, candidate))]
    pub async fn update(&self, id: i64, candidate: Option<&Map<String, Value>>) -> Result<(), ServiceError> {
        let valid = employee::validate(candidate)?;
        let res = employee::Entity::update_many()
            .set(valid.fields.to_active_model())
            .filter(employee::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await
            .map_err(ServiceError::backend)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::NotFound(id));
        }
        info!(id, "employee updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let res = employee::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(ServiceError::backend)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::NotFound(id));
        }
        info!(id, "employee deleted");
        Ok(())
    }
}

fn fields_of<'a, S>(rows: S) -> BoxStream<'a, Result<EmployeeFields, ServiceError>>
where
    S: Stream<Item = Result<employee::Model, DbErr>> + Send + 'a,
{
    rows.map_ok(EmployeeFields::from).map_err(ServiceError::backend).boxed()
}


#[cfg(test)]
mod pg_tests {
    //! Same properties against a live Postgres, gated like the rest of the DB tests.
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    fn ann() -> Map<String, Value> {
        match json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "patronymic": "-",
            "telephone": "+1",
            "email": "a@b.com",
            "country": "US",
            "city": "NY"
        }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn employee_crud_roundtrip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let store = EmployeeStore::new(db);

        let created = store.create(Some(&ann())).await?;
        let found = store.get_by_id(created.id).await?;
        assert_eq!(found, created);

        let mut changed = ann();
        changed.insert("city".into(), json!("Boston"));
        changed.insert("email".into(), json!("ann@lee.dev"));
        store.update(created.id, Some(&changed)).await?;
        let found = store.get_by_id(created.id).await?;
        assert_eq!(found.id, created.id);
        assert_eq!(found.fields.city, "Boston");
        assert_eq!(found.fields.email, "ann@lee.dev");

        // try_collect only returns once the stream has ended
        let listed: Vec<EmployeeFields> = store.list_all().try_collect().await?;
        assert!(listed.contains(&found.fields));

        store.delete(created.id).await?;
        assert!(matches!(store.delete(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.get_by_id(created.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.update(created.id, Some(&ann())).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
