//! Helper functions shared across layers.
//!
//! - [`client_ip`] - Best-effort client address extraction
//! - [`store_error`] - Classification of MongoDB errors

pub mod client_ip;
pub mod store_error;
