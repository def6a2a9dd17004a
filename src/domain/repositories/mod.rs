//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence` and mocks are generated via `mockall`
//! for unit tests.
//!
//! - [`MappingRepository`] - Slug → destination storage
//! - [`TokenRepository`] - Registration gate credentials

pub mod mapping_repository;
pub mod token_repository;

pub use mapping_repository::MappingRepository;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
