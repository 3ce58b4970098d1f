//! Dog records: payload validation, id conversion, storage and the service
//! tying them together.

pub mod domain;
pub mod id;
pub mod repository;
pub mod service;
pub mod validation;

pub use domain::{Dog, DogChanges, NewDog};
pub use repository::{mock, DogStore, SeaOrmDogStore, StoreError};
pub use service::DogService;
