//! Service layer providing the puppy record operations on top of models.
//! - Separates request validation and not-found policy from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Persistence sits behind `PuppyRepository` so the store client is passed in explicitly.

pub mod errors;
pub mod puppy;
#[cfg(test)]
mod test_support;
