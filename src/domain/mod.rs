//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /r/{code}`
//! 2. [`crate::application::services::RedirectService`] looks the code up via [`repositories::LinkRepository`]
//! 3. A click is appended via [`repositories::ClickRepository`]
//! 4. The handler answers with `302 Found`

pub mod entities;
pub mod repositories;
