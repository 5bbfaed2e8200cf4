/// User account service: registration, lookup, and follower/following
/// relationship management.
///
/// Registration delegates credential and identifier creation to an external
/// identity provider; user records live behind the [`store::UserStore`] port.
/// The relationship manager applies ADD/REMOVE mutations to a user's
/// followers or followings set with set semantics (duplicate adds and absent
/// removes are no-ops), rejects self-references, and pushes the mutation down
/// to an atomic store-level operation so concurrent updates cannot lose
/// writes.
///
/// # Architecture
///
/// The system uses:
/// - async-trait ports for the user store and the identity provider
/// - reqwest with retry for identity-provider calls
/// - thiserror for the crate-wide error taxonomy
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use user_service::core::models::{Operation, Registration};
/// use user_service::service::UserService;
/// use user_service::store::MemoryStore;
/// use user_service::clients::IdentityClient;
/// use user_service::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     user_service::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let service = UserService::new(MemoryStore::new(), IdentityClient::new(&config));
///
///     let alice = service
///         .register(Registration {
///             username: "alice".to_string(),
///             email: "alice@example.com".to_string(),
///             first_name: None,
///             last_name: None,
///             password: "secret".to_string(),
///         })
///         .await?;
///     let bob = service.get_by_username("bob").await?;
///
///     // Record that bob follows alice.
///     let updated = service
///         .update_followers(alice.user_id, bob.user_id, Operation::Add)
///         .await?;
///     println!("alice now has {} followers", updated.followers.len());
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod service;
pub mod store;

/// Configure structured logging with JSON format.
///
/// This function sets up tracing-subscriber with a JSON formatter and an
/// env-filter (`RUST_LOG`). It should be called once at process startup.
///
/// # Example
///
/// ```
/// // Initialize structured logging at process startup
/// user_service::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
