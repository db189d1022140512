//! In-memory implementation of the user repository port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::{Email, RepositoryError, User, UserId, UserRepository};

/// HashMap-backed user store.
///
/// Enforces normalized-email uniqueness atomically under its write lock,
/// which makes it the authoritative duplicate check under concurrent inserts,
/// exactly like a relational unique index.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a user inactive. Stands in for the administrative deactivation
    /// action that lives outside the core.
    pub async fn deactivate(&self, id: UserId) -> bool {
        let mut users = self.users.write().await;
        match users.get_mut(&id.as_uuid()) {
            Some(user) => {
                user.deactivate();
                true
            }
            None => false,
        }
    }

    /// Flip a user back to active.
    pub async fn activate(&self, id: UserId) -> bool {
        let mut users = self.users.write().await;
        match users.get_mut(&id.as_uuid()) {
            Some(user) => {
                user.activate();
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.get(&id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email() == email).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().await;

        if users.values().any(|existing| existing.email() == user.email()) {
            return Err(RepositoryError::DuplicateEmail);
        }

        users.insert(user.id().as_uuid(), user.clone());
        Ok(())
    }
}
