//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers. Each is generic over its repositories so unit tests can inject
//! `mockall` mocks; the server wires them with trait objects.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link registration and listing
//! - [`services::click_logger::ClickLogger`] - Click log appends
//! - [`services::redirect_service::RedirectService`] - Code resolution with click logging
//! - [`services::stats_service::StatsService`] - Link and click totals

pub mod services;
