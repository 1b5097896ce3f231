//! Puppy records: typed inputs (domain), persistence seam (repository) and
//! the service the HTTP layer talks to.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::PuppyService;
