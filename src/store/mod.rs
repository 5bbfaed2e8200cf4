//! Persistence port for user records.
//!
//! The service talks to storage only through the [`UserStore`] trait. The
//! relationship mutation is a single store-level primitive so that concurrent
//! updates to one user's set cannot lose writes; implementations must make
//! `apply_relation` atomic (one critical section, a serializable transaction,
//! or a compare-and-swap retry).

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::models::{Operation, Relation, User};
use crate::errors::ServiceError;

pub mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError>;

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ServiceError>;

    async fn exists_by_username(&self, username: &str) -> Result<bool, ServiceError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;

    /// Upsert keyed by `user_id`. Rejects a username or email already owned
    /// by a different user with [`ServiceError::Conflict`].
    async fn save(&self, user: User) -> Result<User, ServiceError>;

    /// Atomically add or remove `other` in the given relationship set of
    /// `user_id` and return the updated record, or `None` when `user_id` is
    /// unknown. Adding a present member or removing an absent one is a no-op.
    async fn apply_relation(
        &self,
        user_id: Uuid,
        other: Uuid,
        relation: Relation,
        op: Operation,
    ) -> Result<Option<User>, ServiceError>;
}
