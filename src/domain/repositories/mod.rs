//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the document store behind the operations the
//! services need: insert, find-one, find-many and count.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Affiliate link storage and lookup
//! - [`ClickRepository`] - Append-only click log
//! - [`StoreHealth`] - Connectivity diagnostics

pub mod click_repository;
pub mod link_repository;
pub mod store_health;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;
pub use store_health::{StoreHealth, StoreReport};

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use store_health::MockStoreHealth;
