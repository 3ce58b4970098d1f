use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use super::domain::{Dog, DogChanges, NewDog};
use super::id;
use super::repository::DogStore;
use super::validation;
use crate::errors::ServiceError;

/// Dog record operations over an injected store.
///
/// Id conversion and payload validation happen here, before the store is
/// touched. Mapping outcomes to HTTP responses is left to the caller.
#[derive(Clone)]
pub struct DogService {
    store: Arc<dyn DogStore>,
}

impl DogService {
    pub fn new(store: Arc<dyn DogStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Dog>, ServiceError> {
        let dogs = self.store.find_many().await?;
        info!(count = dogs.len(), "list dogs");
        Ok(dogs)
    }

    /// `Ok(None)` when no record has the id.
    #[instrument(skip(self))]
    pub async fn get(&self, raw_id: &str) -> Result<Option<Dog>, ServiceError> {
        let number = id::parse_number(raw_id).ok_or(ServiceError::InvalidId)?;
        let key = id::record_key_from_number(number)?;
        Ok(self.store.find_unique(key).await?)
    }

    /// Type-check and key-check the body, then insert it.
    #[instrument(skip(self, body))]
    pub async fn create(&self, body: &Value) -> Result<Dog, ServiceError> {
        let errors = validation::validate_new_dog(body);
        if !errors.is_empty() {
            warn!(errors = errors.len(), "dog_create_rejected");
            return Err(ServiceError::Validation(errors));
        }
        let data = NewDog::from_json(body)?;
        let dog = self.store.create(data).await?;
        info!(id = dog.id, "dog_created");
        Ok(dog)
    }

    /// Key-check only; value types are left to the store.
    ///
    /// The id must start with an integer, but the row is addressed by the
    /// whole-string conversion, so `"1abc"` reaches the store as an invalid
    /// key and `"1e3"` addresses row 1000.
    #[instrument(skip(self, body))]
    pub async fn update(&self, raw_id: &str, body: &Value) -> Result<Dog, ServiceError> {
        id::parse_leading_int(raw_id).ok_or(ServiceError::InvalidId)?;
        let errors = validation::validate_keys(body);
        if !errors.is_empty() {
            warn!(errors = errors.len(), "dog_update_rejected");
            return Err(ServiceError::Validation(errors));
        }
        let number = id::parse_number(raw_id).unwrap_or(f64::NAN);
        let key = id::record_key_from_number(number)?;
        let changes = DogChanges::from_json(body)?;
        let dog = self.store.update(key, changes).await?;
        info!(id = dog.id, "dog_updated");
        Ok(dog)
    }

    /// Returns the deleted record.
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<Dog, ServiceError> {
        let number = id::parse_leading_int(raw_id).ok_or(ServiceError::InvalidId)?;
        let key = id::record_key_from_int(number)?;
        let dog = self.store.delete(key).await?;
        info!(id = dog.id, "dog_deleted");
        Ok(dog)
    }
}
