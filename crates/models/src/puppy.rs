use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Column width of `puppies.name`.
pub const NAME_MAX_LEN: usize = 50;
/// Column width of `puppies.breed`.
pub const BREED_MAX_LEN: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "puppies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub breed: Option<String>,
    pub age_estimate: Option<i32>,
    pub current_kennel_number: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name longer than {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_breed(breed: &str) -> Result<(), ModelError> {
    if breed.chars().count() > BREED_MAX_LEN {
        return Err(ModelError::Validation(format!("breed longer than {BREED_MAX_LEN} characters")));
    }
    Ok(())
}
