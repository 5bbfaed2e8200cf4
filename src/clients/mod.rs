//! Client modules for external API interactions

pub mod identity;

pub use identity::{IdentityClient, IdentityProvider};
