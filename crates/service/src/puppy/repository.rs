use async_trait::async_trait;

use models::puppy;

use super::domain::{NewPuppy, PuppyUpdate};
use crate::errors::ServiceError;

/// Persistence seam for puppy records.
#[async_trait]
pub trait PuppyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<puppy::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<puppy::Model>, ServiceError>;
    async fn create(&self, new: NewPuppy) -> Result<puppy::Model, ServiceError>;
    /// `Ok(None)` when no row has `id`.
    async fn update(&self, id: i32, update: PuppyUpdate) -> Result<Option<puppy::Model>, ServiceError>;
    /// `Ok(false)` when no row has `id`.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct InMemoryPuppyRepository {
        rows: Mutex<BTreeMap<i32, puppy::Model>>,
        last_id: Mutex<i32>,
    }

    impl InMemoryPuppyRepository {
        fn rows(&self) -> Result<MutexGuard<'_, BTreeMap<i32, puppy::Model>>, ServiceError> {
            self.rows.lock().map_err(|_| ServiceError::Db("puppy store lock poisoned".into()))
        }
    }

    #[async_trait]
    impl PuppyRepository for InMemoryPuppyRepository {
        async fn list(&self) -> Result<Vec<puppy::Model>, ServiceError> {
            Ok(self.rows()?.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<puppy::Model>, ServiceError> {
            Ok(self.rows()?.get(&id).cloned())
        }

        async fn create(&self, new: NewPuppy) -> Result<puppy::Model, ServiceError> {
            let mut rows = self.rows()?;
            // ids are never handed out twice, even after a delete
            let id = {
                let mut last = self.last_id.lock().map_err(|_| ServiceError::Db("id sequence lock poisoned".into()))?;
                *last += 1;
                *last
            };
            let model = puppy::Model {
                id,
                name: new.name,
                breed: new.breed,
                age_estimate: new.age_estimate,
                current_kennel_number: new.current_kennel_number,
            };
            rows.insert(id, model.clone());
            Ok(model)
        }

        async fn update(&self, id: i32, update: PuppyUpdate) -> Result<Option<puppy::Model>, ServiceError> {
            let mut rows = self.rows()?;
            Ok(rows.get_mut(&id).map(|row| {
                update.apply_to(row);
                row.clone()
            }))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows()?.remove(&id).is_some())
        }
    }
}
