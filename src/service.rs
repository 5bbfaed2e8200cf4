//! User service: registration, lookups, and the follower/following
//! relationship manager.
//!
//! Relationship mutations validate in a fixed order (self-reference, then
//! current-user existence, then target existence) and then go through the
//! store's atomic `apply_relation` primitive, for both relationship
//! directions. The two sides of a relationship are independent records: adding
//! B to A's followers never touches B.

use tracing::{debug, error};
use uuid::Uuid;

use crate::clients::IdentityProvider;
use crate::core::models::{Operation, Registration, Relation, User, UserProjection};
use crate::errors::ServiceError;
use crate::store::UserStore;

pub struct UserService<S, I> {
    store: S,
    identity: I,
}

impl<S, I> UserService<S, I>
where
    S: UserStore,
    I: IdentityProvider,
{
    pub fn new(store: S, identity: I) -> Self {
        Self { store, identity }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a new user. The identity provider assigns the identifier and
    /// the initial role; the record is then persisted locally.
    pub async fn register(
        &self,
        registration: Registration,
    ) -> Result<UserProjection, ServiceError> {
        if self
            .user_exists(&registration.username, &registration.email)
            .await?
        {
            error!(
                email = %registration.email,
                "cannot save user: email or username already present"
            );
            return Err(ServiceError::Conflict(format!(
                "username '{}' or email '{}' is already taken",
                registration.username, registration.email
            )));
        }

        let user_id = self.identity.create_account(&registration).await?;
        let default_role = self.identity.default_role().await?;

        let user = User::new(
            user_id,
            registration.username,
            registration.email,
            vec![default_role.name],
        );

        debug!(user = ?user, "user details");
        let saved = self.store.save(user).await?;
        Ok(UserProjection::from(&saved))
    }

    pub async fn get_by_username(&self, username: &str) -> Result<UserProjection, ServiceError> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("username '{username}'")))?;
        debug!(user = ?user, "user details");
        Ok(UserProjection::from(&user))
    }

    pub async fn get_by_id(&self, user_id: Uuid) -> Result<UserProjection, ServiceError> {
        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user id {user_id}")))?;
        debug!(user = ?user, "user details");
        Ok(UserProjection::from(&user))
    }

    /// Resolve a username to its stable identifier.
    pub async fn id_for_username(&self, username: &str) -> Result<Uuid, ServiceError> {
        Ok(self.get_by_username(username).await?.user_id)
    }

    /// Add or remove `other` in the followers set of `current`.
    pub async fn update_followers(
        &self,
        current: Uuid,
        other: Uuid,
        op: Operation,
    ) -> Result<UserProjection, ServiceError> {
        self.update_relation(current, other, Relation::Followers, op)
            .await
    }

    /// Add or remove `other` in the followings set of `current`.
    pub async fn update_followings(
        &self,
        current: Uuid,
        other: Uuid,
        op: Operation,
    ) -> Result<UserProjection, ServiceError> {
        self.update_relation(current, other, Relation::Followings, op)
            .await
    }

    async fn update_relation(
        &self,
        current: Uuid,
        other: Uuid,
        relation: Relation,
        op: Operation,
    ) -> Result<UserProjection, ServiceError> {
        if current == other {
            return Err(ServiceError::SelfReference(current));
        }
        if !self.store.exists_by_id(current).await? {
            return Err(ServiceError::NotFound(format!("user id {current}")));
        }
        if !self.store.exists_by_id(other).await? {
            return Err(ServiceError::NotFound(format!("user id {other}")));
        }

        let updated = self
            .store
            .apply_relation(current, other, relation, op)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user id {current}")))?;

        debug!(user = ?updated, "user details");
        Ok(UserProjection::from(&updated))
    }

    /// True if the username or the email is already taken.
    pub async fn user_exists(&self, username: &str, email: &str) -> Result<bool, ServiceError> {
        Ok(self.store.exists_by_username(username).await?
            || self.store.exists_by_email(email).await?)
    }
}
