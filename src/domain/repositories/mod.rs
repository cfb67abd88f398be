//! Repository trait definitions for the domain layer.
//!
//! The [`LinkRepository`] trait abstracts the link store. Implementations live in
//! `crate::infrastructure::persistence`; a mock is generated via `mockall` for tests.

pub mod link_repository;

pub use link_repository::{InsertOutcome, LinkRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
