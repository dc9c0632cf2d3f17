//! # Affiliate Tracker
//!
//! A small affiliate link tracking service built with Axum and MongoDB.
//! Links map a unique short code to a destination URL; every visit to
//! `/r/{code}` is redirected and logged as a click.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Link registry, redirect resolver, click logger, stats
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="mongodb://localhost:27017"
//! export DATABASE_NAME="affiliate"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ClickLogger, LinkService, RedirectService, Stats, StatsService, Visit,
    };
    pub use crate::domain::entities::{AffiliateLink, Click, NewAffiliateLink, NewClick};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
