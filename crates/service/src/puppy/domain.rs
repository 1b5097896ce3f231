use serde::{Deserialize, Deserializer, Serialize};

use models::errors::ModelError;
use models::puppy;

/// Create request body. `name` is optional here so that a missing name
/// surfaces as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePuppy {
    pub name: Option<String>,
    pub breed: Option<String>,
    #[serde(alias = "age_est")]
    pub age_estimate: Option<i32>,
    pub current_kennel_number: Option<i32>,
}

/// Validated create input; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPuppy {
    pub name: String,
    pub breed: Option<String>,
    pub age_estimate: Option<i32>,
    pub current_kennel_number: Option<i32>,
}

impl CreatePuppy {
    pub fn validate(self) -> Result<NewPuppy, ModelError> {
        let name = self.name.ok_or_else(|| ModelError::Validation("name required".into()))?;
        puppy::validate_name(&name)?;
        if let Some(breed) = &self.breed {
            puppy::validate_breed(breed)?;
        }
        Ok(NewPuppy {
            name,
            breed: self.breed,
            age_estimate: self.age_estimate,
            current_kennel_number: self.current_kennel_number,
        })
    }
}

/// Update request body.
///
/// Outer `None` means the key was absent and the column stays as is;
/// `Some(None)` is an explicit JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PuppyChanges {
    #[serde(default, deserialize_with = "nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub breed: Option<Option<String>>,
    #[serde(default, alias = "age_est", deserialize_with = "nullable")]
    pub age_estimate: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub current_kennel_number: Option<Option<i32>>,
}

fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Validated partial update. `name` can change but never be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuppyUpdate {
    pub name: Option<String>,
    pub breed: Option<Option<String>>,
    pub age_estimate: Option<Option<i32>>,
    pub current_kennel_number: Option<Option<i32>>,
}

impl PuppyChanges {
    pub fn validate(self) -> Result<PuppyUpdate, ModelError> {
        let name = match self.name {
            None => None,
            Some(None) => return Err(ModelError::Validation("name cannot be null".into())),
            Some(Some(name)) => {
                puppy::validate_name(&name)?;
                Some(name)
            }
        };
        if let Some(Some(breed)) = &self.breed {
            puppy::validate_breed(breed)?;
        }
        Ok(PuppyUpdate {
            name,
            breed: self.breed,
            age_estimate: self.age_estimate,
            current_kennel_number: self.current_kennel_number,
        })
    }
}

impl PuppyUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.breed.is_none()
            && self.age_estimate.is_none()
            && self.current_kennel_number.is_none()
    }

    /// Overwrite only the supplied fields; `id` is never touched.
    pub fn apply_to(self, model: &mut puppy::Model) {
        if let Some(name) = self.name {
            model.name = name;
        }
        if let Some(breed) = self.breed {
            model.breed = breed;
        }
        if let Some(age) = self.age_estimate {
            model.age_estimate = age;
        }
        if let Some(kennel) = self.current_kennel_number {
            model.current_kennel_number = kennel;
        }
    }
}
