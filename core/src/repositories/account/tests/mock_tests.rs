//! Tests for the in-memory account repository

use crate::domain::entities::Account;
use crate::errors::{RepositoryError, UniqueField};
use crate::repositories::account::{AccountRepository, MockAccountRepository};

fn account(username: &str, email: &str) -> Account {
    Account::new(username.to_string(), email.to_string(), "$2b$04$digest".to_string())
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = MockAccountRepository::new();
    let created = repo.create(account("alice", "alice@example.com")).await.unwrap();

    let by_email = repo.find_by_email("alice@example.com").await.unwrap();
    let by_username = repo.find_by_username("alice").await.unwrap();
    let by_id = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(by_email.as_ref(), Some(&created));
    assert_eq!(by_username.as_ref(), Some(&created));
    assert_eq!(by_id, Some(created));
}

#[tokio::test]
async fn test_lookup_miss_is_none() {
    let repo = MockAccountRepository::new();

    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    assert!(repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let repo = MockAccountRepository::new();
    repo.create(account("alice", "alice@example.com")).await.unwrap();

    let result = repo.create(account("alice2", "alice@example.com")).await;
    assert_eq!(
        result.unwrap_err(),
        RepositoryError::UniqueViolation { field: UniqueField::Email }
    );
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let repo = MockAccountRepository::new();
    repo.create(account("alice", "alice@example.com")).await.unwrap();

    let result = repo.create(account("alice", "other@example.com")).await;
    assert_eq!(
        result.unwrap_err(),
        RepositoryError::UniqueViolation { field: UniqueField::Username }
    );
    assert_eq!(repo.len().await, 1);
}
