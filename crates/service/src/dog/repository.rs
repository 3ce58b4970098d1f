use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use super::domain::{Dog, DogChanges, NewDog};
use models::{dog, errors::ModelError};

/// Failure reported by the data store.
///
/// Serializes as `{"code": ..., "message": ...}` because the update endpoint
/// returns it to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("dog {0} not found")]
    NotFound(i32),
    #[error("invalid id: {0}")]
    InvalidId(String),
    #[error("invalid data: {0}")]
    InvalidData(String),
    #[error("database error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::InvalidId(_) => "invalid_id",
            StoreError::InvalidData(_) => "invalid_data",
            StoreError::Database(_) => "database",
        }
    }
}

impl Serialize for StoreError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("StoreError", 2)?;
        s.serialize_field("code", self.code())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

impl From<ModelError> for StoreError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Db(m) => StoreError::Database(m),
        }
    }
}

/// Data store holding dog records.
#[async_trait]
pub trait DogStore: Send + Sync {
    /// All records, ordered by id.
    async fn find_many(&self) -> Result<Vec<Dog>, StoreError>;
    async fn find_unique(&self, id: i32) -> Result<Option<Dog>, StoreError>;
    async fn create(&self, data: NewDog) -> Result<Dog, StoreError>;
    /// Errors with `NotFound` when no row has `id`.
    async fn update(&self, id: i32, changes: DogChanges) -> Result<Dog, StoreError>;
    /// Returns the removed record; errors with `NotFound` when absent.
    async fn delete(&self, id: i32) -> Result<Dog, StoreError>;
}

/// SeaORM-backed store implementation.
pub struct SeaOrmDogStore {
    pub db: DatabaseConnection,
}

impl SeaOrmDogStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn require(&self, id: i32) -> Result<Dog, StoreError> {
        dog::find(&self.db, id).await?.ok_or(StoreError::NotFound(id))
    }
}

fn db_err(e: sea_orm::DbErr) -> StoreError { StoreError::Database(e.to_string()) }

#[async_trait]
impl DogStore for SeaOrmDogStore {
    async fn find_many(&self) -> Result<Vec<Dog>, StoreError> {
        Ok(dog::find_all(&self.db).await?)
    }

    async fn find_unique(&self, id: i32) -> Result<Option<Dog>, StoreError> {
        Ok(dog::find(&self.db, id).await?)
    }

    async fn create(&self, data: NewDog) -> Result<Dog, StoreError> {
        Ok(dog::create(&self.db, &data.name, &data.description, data.age, &data.breed).await?)
    }

    async fn update(&self, id: i32, changes: DogChanges) -> Result<Dog, StoreError> {
        let found = self.require(id).await?;
        if changes.is_empty() {
            return Ok(found);
        }
        let mut am: dog::ActiveModel = found.into();
        if let Some(name) = changes.name {
            am.name = Set(name);
        }
        if let Some(description) = changes.description {
            am.description = Set(description);
        }
        if let Some(age) = changes.age {
            am.age = Set(age);
        }
        if let Some(breed) = changes.breed {
            am.breed = Set(breed);
        }
        am.update(&self.db).await.map_err(db_err)
    }

    async fn delete(&self, id: i32) -> Result<Dog, StoreError> {
        let found = self.require(id).await?;
        let res = dog::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        // Lost a race with a concurrent delete.
        if res.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(found)
    }
}

/// In-memory store for tests and database-less runs.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Inner {
        last_id: i32,
        rows: BTreeMap<i32, Dog>,
    }

    #[derive(Default)]
    pub struct MemoryDogStore {
        inner: Mutex<Inner>,
    }

    impl MemoryDogStore {
        pub fn new() -> Self { Self::default() }

        pub async fn len(&self) -> usize { self.inner.lock().await.rows.len() }

        pub async fn is_empty(&self) -> bool { self.len().await == 0 }
    }

    #[async_trait]
    impl DogStore for MemoryDogStore {
        async fn find_many(&self) -> Result<Vec<Dog>, StoreError> {
            Ok(self.inner.lock().await.rows.values().cloned().collect())
        }

        async fn find_unique(&self, id: i32) -> Result<Option<Dog>, StoreError> {
            Ok(self.inner.lock().await.rows.get(&id).cloned())
        }

        async fn create(&self, data: NewDog) -> Result<Dog, StoreError> {
            let mut inner = self.inner.lock().await;
            let id = inner
                .last_id
                .checked_add(1)
                .ok_or_else(|| StoreError::Database("id sequence exhausted".into()))?;
            inner.last_id = id;
            let dog = Dog {
                id,
                name: data.name,
                description: data.description,
                age: data.age,
                breed: data.breed,
            };
            inner.rows.insert(id, dog.clone());
            Ok(dog)
        }

        async fn update(&self, id: i32, changes: DogChanges) -> Result<Dog, StoreError> {
            let mut inner = self.inner.lock().await;
            let dog = inner.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            changes.apply_to(dog);
            Ok(dog.clone())
        }

        async fn delete(&self, id: i32) -> Result<Dog, StoreError> {
            self.inner.lock().await.rows.remove(&id).ok_or(StoreError::NotFound(id))
        }
    }
}
