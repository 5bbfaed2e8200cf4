use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record. The identifier is assigned by the identity provider
/// at registration; username and email are globally unique (enforced by the
/// store). The two relationship sets are independent: following someone does
/// not touch their record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub followers: HashSet<Uuid>,
    pub followings: HashSet<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_id: Uuid, username: String, email: String, roles: Vec<String>) -> Self {
        Self {
            user_id,
            username,
            email,
            roles,
            followers: HashSet::new(),
            followings: HashSet::new(),
            created_at: Utc::now(),
        }
    }
}

/// External view of a user. Fields are mapped explicitly from the stored
/// entity; the relationship sets come out sorted so callers get a stable
/// representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProjection {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub followers: Vec<Uuid>,
    pub followings: Vec<Uuid>,
}

impl From<&User> for UserProjection {
    fn from(user: &User) -> Self {
        let mut followers: Vec<Uuid> = user.followers.iter().copied().collect();
        followers.sort_unstable();
        let mut followings: Vec<Uuid> = user.followings.iter().copied().collect();
        followings.sort_unstable();

        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            followers,
            followings,
        }
    }
}

/// Registration input. The password is passed through to the identity
/// provider and never persisted by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: String,
}

/// Mutation applied to a relationship set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Add,
    Remove,
}

/// Which side of the relationship a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Followers,
    Followings,
}

/// Role projection returned by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
}
