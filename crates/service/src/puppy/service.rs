use std::sync::Arc;

use tracing::{info, instrument};

use models::puppy;

use super::domain::{CreatePuppy, PuppyChanges};
use super::repository::PuppyRepository;
use crate::errors::ServiceError;

/// Application service for puppy records.
///
/// Holds no record state of its own; every call goes straight to the
/// repository it was constructed with.
pub struct PuppyService<R: PuppyRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PuppyRepository + ?Sized> PuppyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<puppy::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<puppy::Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(format_args!("puppy {id}")))
    }

    /// Validate and insert a new record, returning it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::puppy::{PuppyService, domain::CreatePuppy, repository::mock::InMemoryPuppyRepository};
    /// use std::sync::Arc;
    /// let svc = PuppyService::new(Arc::new(InMemoryPuppyRepository::default()));
    /// let input = CreatePuppy { name: Some("Rex".into()), breed: Some("Lab".into()), ..Default::default() };
    /// let rex = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(rex.id, 1);
    /// assert_eq!(rex.breed.as_deref(), Some("Lab"));
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreatePuppy) -> Result<puppy::Model, ServiceError> {
        let new = input.validate()?;
        let created = self.repo.create(new).await?;
        info!(id = created.id, name = %created.name, "puppy_created");
        Ok(created)
    }

    /// Apply only the supplied fields to an existing record.
    ///
    /// A missing record is reported as `NotFound` even when the changes
    /// are also invalid.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: i32, changes: PuppyChanges) -> Result<puppy::Model, ServiceError> {
        let update = match changes.validate() {
            Ok(update) => update,
            Err(e) => {
                if self.repo.get(id).await?.is_none() {
                    return Err(ServiceError::not_found(format_args!("puppy {id}")));
                }
                return Err(e.into());
            }
        };
        let updated = self
            .repo
            .update(id, update)
            .await?
            .ok_or_else(|| ServiceError::not_found(format_args!("puppy {id}")))?;
        info!(id, "puppy_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(format_args!("puppy {id}")));
        }
        info!(id, "puppy_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puppy::repo::seaorm::SeaOrmPuppyRepository;
    use crate::puppy::repository::mock::InMemoryPuppyRepository;
    use crate::test_support::get_db;
    use serde_json::json;

    fn rex() -> CreatePuppy {
        CreatePuppy {
            name: Some("Rex".into()),
            breed: Some("Lab".into()),
            age_estimate: Some(2),
            current_kennel_number: Some(5),
        }
    }

    fn changes(v: serde_json::Value) -> PuppyChanges {
        serde_json::from_value(v).unwrap()
    }

    async fn lifecycle<R: PuppyRepository + ?Sized>(svc: &PuppyService<R>) -> Result<(), anyhow::Error> {
        let created = svc.create(rex()).await?;
        assert_eq!(created.name, "Rex");
        assert_eq!(created.breed.as_deref(), Some("Lab"));
        assert_eq!(created.age_estimate, Some(2));
        assert_eq!(created.current_kennel_number, Some(5));

        assert_eq!(svc.get(created.id).await?, created);

        let updated = svc.update(created.id, changes(json!({"breed": "Labrador"}))).await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.breed.as_deref(), Some("Labrador"));
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.age_estimate, created.age_estimate);
        assert_eq!(updated.current_kennel_number, created.current_kennel_number);
        assert_eq!(svc.get(created.id).await?, updated);

        svc.delete(created.id).await?;
        assert!(matches!(svc.get(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    async fn missing_ids<R: PuppyRepository + ?Sized>(svc: &PuppyService<R>) -> Result<(), anyhow::Error> {
        let kept = svc.create(rex()).await?;
        let before = svc.list().await?;

        let err = svc.update(kept.id + 100, changes(json!({"name": "Ghost"}))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = svc.delete(kept.id + 100).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        // missing id wins over an invalid body
        let err = svc.update(kept.id + 100, changes(json!({"name": null}))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        assert_eq!(svc.list().await?, before);
        Ok(())
    }

    async fn ids_unique_and_listed<R: PuppyRepository + ?Sized>(svc: &PuppyService<R>) -> Result<(), anyhow::Error> {
        let a = svc.create(rex()).await?;
        let b = svc.create(CreatePuppy { name: Some("Bo".into()), ..Default::default() }).await?;
        assert_ne!(a.id, b.id);

        let ids: Vec<i32> = svc.list().await?.into_iter().map(|p| p.id).collect();
        assert!(ids.contains(&a.id) && ids.contains(&b.id));
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "listed in id order: {ids:?}");

        // a deleted id is not handed out again
        svc.delete(b.id).await?;
        let c = svc.create(rex()).await?;
        assert_ne!(c.id, a.id);
        assert_ne!(c.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn lifecycle_in_memory() -> Result<(), anyhow::Error> {
        lifecycle(&PuppyService::new(Arc::new(InMemoryPuppyRepository::default()))).await
    }

    #[tokio::test]
    async fn lifecycle_seaorm() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        lifecycle(&PuppyService::new(Arc::new(SeaOrmPuppyRepository::new(db)))).await
    }

    #[tokio::test]
    async fn missing_ids_in_memory() -> Result<(), anyhow::Error> {
        missing_ids(&PuppyService::new(Arc::new(InMemoryPuppyRepository::default()))).await
    }

    #[tokio::test]
    async fn missing_ids_seaorm() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        missing_ids(&PuppyService::new(Arc::new(SeaOrmPuppyRepository::new(db)))).await
    }

    #[tokio::test]
    async fn ids_in_memory() -> Result<(), anyhow::Error> {
        ids_unique_and_listed(&PuppyService::new(Arc::new(InMemoryPuppyRepository::default()))).await
    }

    #[tokio::test]
    async fn ids_seaorm() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        ids_unique_and_listed(&PuppyService::new(Arc::new(SeaOrmPuppyRepository::new(db)))).await
    }

    #[tokio::test]
    async fn dyn_repository_and_validation() -> Result<(), anyhow::Error> {
        let repo: Arc<dyn PuppyRepository> = Arc::new(InMemoryPuppyRepository::default());
        let svc = PuppyService::new(repo);

        let err = svc.create(CreatePuppy { breed: Some("Lab".into()), ..Default::default() }).await.unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert!(svc.list().await?.is_empty());

        let created = svc.create(rex()).await?;
        let err = svc.update(created.id, changes(json!({"name": null}))).await.unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert_eq!(svc.get(created.id).await?, created);
        Ok(())
    }

    #[tokio::test]
    async fn empty_and_null_updates_seaorm() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = PuppyService::new(Arc::new(SeaOrmPuppyRepository::new(db)));
        let created = svc.create(rex()).await?;

        let same = svc.update(created.id, changes(json!({}))).await?;
        assert_eq!(same, created);

        let cleared = svc
            .update(created.id, changes(json!({"breed": null, "age_est": 4, "pet_id": 999})))
            .await?;
        assert_eq!(cleared.id, created.id);
        assert_eq!(cleared.breed, None);
        assert_eq!(cleared.age_estimate, Some(4));
        assert_eq!(cleared.current_kennel_number, Some(5));
        Ok(())
    }
}
