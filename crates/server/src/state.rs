use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::puppy::{repo::seaorm::SeaOrmPuppyRepository, repository::PuppyRepository, PuppyService};

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub puppies: Arc<PuppyService<dyn PuppyRepository>>,
}

impl AppState {
    pub fn new(repo: Arc<dyn PuppyRepository>) -> Self {
        Self { puppies: Arc::new(PuppyService::new(repo)) }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmPuppyRepository::new(db)))
    }
}
