//! Service layer for dog records on top of `models`.
//! - Validates payloads and path ids before any store access.
//! - Hides persistence behind the `DogStore` trait so handlers can run
//!   against SeaORM or the in-memory store.

pub mod errors;
pub mod dog;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
