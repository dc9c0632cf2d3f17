//! Repository implementations.
//!
//! # Repositories
//!
//! - [`MongoStore`] - Shared MongoDB handle with call timeouts and diagnostics
//! - [`MongoLinkRepository`] - Link storage and lookup
//! - [`MongoClickRepository`] - Click log
//! - [`MemoryLinkRepository`], [`MemoryClickRepository`], [`MemoryStore`] - In-process
//!   equivalents used by the test suite

pub mod collections;
pub mod documents;
pub mod memory_repository;
pub mod mongo_click_repository;
pub mod mongo_link_repository;
pub mod mongo_store;

pub use collections::RecordKind;
pub use memory_repository::{MemoryClickRepository, MemoryLinkRepository, MemoryStore};
pub use mongo_click_repository::MongoClickRepository;
pub use mongo_link_repository::MongoLinkRepository;
pub use mongo_store::MongoStore;
