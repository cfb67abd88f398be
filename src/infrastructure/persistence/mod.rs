//! Link store implementations.
//!
//! - [`SqliteLinkRepository`] - SQLite storage via SQLx (default, persistent)
//! - [`MemoryLinkRepository`] - process-local storage for development and tests

pub mod memory_link_repository;
pub mod sqlite_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use sqlite_link_repository::SqliteLinkRepository;
