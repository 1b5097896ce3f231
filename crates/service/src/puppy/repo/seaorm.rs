use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use models::puppy;

use crate::errors::ServiceError;
use crate::puppy::domain::{NewPuppy, PuppyUpdate};
use crate::puppy::repository::PuppyRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmPuppyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPuppyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Write a changed row. A row deleted since it was read yields `Ok(None)`.
    async fn write(&self, am: puppy::ActiveModel) -> Result<Option<puppy::Model>, ServiceError> {
        match am.update(&self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait::async_trait]
impl PuppyRepository for SeaOrmPuppyRepository {
    async fn list(&self) -> Result<Vec<puppy::Model>, ServiceError> {
        Ok(puppy::Entity::find()
            .order_by_asc(puppy::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn get(&self, id: i32) -> Result<Option<puppy::Model>, ServiceError> {
        Ok(puppy::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, new: NewPuppy) -> Result<puppy::Model, ServiceError> {
        let am = puppy::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            breed: Set(new.breed),
            age_estimate: Set(new.age_estimate),
            current_kennel_number: Set(new.current_kennel_number),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, id: i32, update: PuppyUpdate) -> Result<Option<puppy::Model>, ServiceError> {
        let Some(found) = puppy::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: puppy::ActiveModel = found.clone().into();
        if let Some(name) = update.name {
            am.name = Set(name);
        }
        if let Some(breed) = update.breed {
            am.breed = Set(breed);
        }
        if let Some(age) = update.age_estimate {
            am.age_estimate = Set(age);
        }
        if let Some(kennel) = update.current_kennel_number {
            am.current_kennel_number = Set(kennel);
        }
        if !am.is_changed() {
            return Ok(Some(found));
        }
        self.write(am).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = puppy::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
