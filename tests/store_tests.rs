use uuid::Uuid;

use user_service::core::models::{Operation, Relation, User};
use user_service::errors::ServiceError;
use user_service::store::{MemoryStore, UserStore};

fn user(username: &str) -> User {
    User::new(
        Uuid::new_v4(),
        username.to_string(),
        format!("{username}@example.com"),
        vec!["user".to_string()],
    )
}

#[tokio::test]
async fn save_and_find_back_by_id_and_username() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let alice = store.save(user("alice")).await?;

    let by_id = store.find_by_id(alice.user_id).await?;
    assert_eq!(by_id.map(|u| u.username), Some("alice".to_string()));

    let by_name = store.find_by_username("alice").await?;
    assert_eq!(by_name.map(|u| u.user_id), Some(alice.user_id));

    assert!(store.find_by_username("bob").await?.is_none());
    assert!(store.find_by_id(Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn existence_checks() {
    let store = MemoryStore::new();
    let alice = store.save(user("alice")).await.unwrap();

    assert!(store.exists_by_id(alice.user_id).await.unwrap());
    assert!(store.exists_by_username("alice").await.unwrap());
    assert!(store.exists_by_email("alice@example.com").await.unwrap());

    assert!(!store.exists_by_id(Uuid::new_v4()).await.unwrap());
    assert!(!store.exists_by_username("bob").await.unwrap());
    assert!(!store.exists_by_email("bob@example.com").await.unwrap());
}

#[tokio::test]
async fn save_is_an_upsert_for_the_same_user() {
    let store = MemoryStore::new();
    let mut alice = store.save(user("alice")).await.unwrap();

    alice.roles.push("admin".to_string());
    let updated = store.save(alice.clone()).await.unwrap();
    assert_eq!(updated.roles, vec!["user".to_string(), "admin".to_string()]);

    let found = store.find_by_id(alice.user_id).await.unwrap().unwrap();
    assert_eq!(found.roles, updated.roles);
}

#[tokio::test]
async fn save_rejects_duplicate_username_or_email() {
    let store = MemoryStore::new();
    store.save(user("alice")).await.unwrap();

    let mut dup_name = user("alice");
    dup_name.email = "different@example.com".to_string();
    let err = store.save(dup_name).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    let mut dup_email = user("bob");
    dup_email.email = "alice@example.com".to_string();
    let err = store.save(dup_email).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn apply_relation_mutates_only_the_requested_side() {
    let store = MemoryStore::new();
    let alice = store.save(user("alice")).await.unwrap();
    let bob = store.save(user("bob")).await.unwrap();

    let updated = store
        .apply_relation(alice.user_id, bob.user_id, Relation::Followers, Operation::Add)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.followers.contains(&bob.user_id));
    assert!(updated.followings.is_empty());

    let updated = store
        .apply_relation(alice.user_id, bob.user_id, Relation::Followings, Operation::Add)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.followings.contains(&bob.user_id));

    let updated = store
        .apply_relation(alice.user_id, bob.user_id, Relation::Followers, Operation::Remove)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.followers.is_empty());
    assert!(updated.followings.contains(&bob.user_id));
}

#[tokio::test]
async fn apply_relation_for_unknown_user_returns_none() {
    let store = MemoryStore::new();
    let result = store
        .apply_relation(Uuid::new_v4(), Uuid::new_v4(), Relation::Followers, Operation::Add)
        .await
        .unwrap();
    assert!(result.is_none());
}
