//! In-process user store.
//!
//! Backs the service with a `HashMap` behind a `tokio` read-write lock.
//! `apply_relation` runs its whole read-modify-write under one write lock, so
//! concurrent mutations of the same user's set serialize instead of clobbering
//! each other.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::models::{Operation, Relation, User};
use crate::errors::ServiceError;

use super::UserStore;

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ServiceError> {
        let users = self.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, ServiceError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn save(&self, user: User) -> Result<User, ServiceError> {
        let mut users = self.users.write().await;

        // Username and email are globally unique across records.
        let taken = users.values().any(|existing| {
            existing.user_id != user.user_id
                && (existing.username == user.username || existing.email == user.email)
        });
        if taken {
            return Err(ServiceError::Conflict(format!(
                "username '{}' or email '{}' is already taken",
                user.username, user.email
            )));
        }

        users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn apply_relation(
        &self,
        user_id: Uuid,
        other: Uuid,
        relation: Relation,
        op: Operation,
    ) -> Result<Option<User>, ServiceError> {
        let mut users = self.users.write().await;

        let Some(user) = users.get_mut(&user_id) else {
            return Ok(None);
        };

        let set = match relation {
            Relation::Followers => &mut user.followers,
            Relation::Followings => &mut user.followings,
        };
        match op {
            Operation::Add => {
                set.insert(other);
            }
            Operation::Remove => {
                set.remove(&other);
            }
        }

        Ok(Some(user.clone()))
    }
}
