//! Business logic services for the application layer.

pub mod click_logger;
pub mod link_service;
pub mod redirect_service;
pub mod stats_service;

pub use click_logger::ClickLogger;
pub use link_service::LinkService;
pub use redirect_service::{RedirectService, Visit};
pub use stats_service::{Stats, StatsService};
