//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod redirect;
pub mod stats;

pub use health::{diagnostics_handler, root_handler};
pub use links::{create_link_handler, list_links_handler};
pub use redirect::redirect_handler;
pub use stats::stats_handler;
