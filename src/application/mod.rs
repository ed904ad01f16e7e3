//! Application layer seam.
//!
//! The business logic behind posts (authentication, persistence, domain rules)
//! lives outside this crate. Handlers only see the [`PostBusiness`] trait.

pub mod post_business;

pub use post_business::{BusinessOutput, PostBusiness};
