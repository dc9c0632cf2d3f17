//! Core domain entities.
//!
//! Entities are plain data structures without persistence concerns. Storage
//! representations live in [`crate::infrastructure::persistence`].
//!
//! # Entity Types
//!
//! - [`AffiliateLink`] - A tracked short code mapped to a destination URL
//! - [`Click`] - A logged redirect event

pub mod affiliate_link;
pub mod click;

pub use affiliate_link::{AffiliateLink, NewAffiliateLink};
pub use click::{Click, NewClick};
