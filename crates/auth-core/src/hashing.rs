//! Bounded scheduling for the deliberately slow password hasher.

use std::sync::Arc;

use tokio::sync::Semaphore;

use domain::{AuthError, AuthResult, HashedPassword, PasswordHasher};

/// Runs password hashing on the blocking thread pool, bounded by a semaphore.
///
/// Hashing costs tens to hundreds of milliseconds of CPU work, so it must not
/// run on a thread that also services concurrent I/O. Callers acquire a
/// permit before the work is handed to `spawn_blocking`; when all permits are
/// taken they wait, which bounds both worker usage and queue depth instead of
/// creating unbounded tasks.
#[derive(Clone)]
pub struct HashingPool {
    hasher: Arc<dyn PasswordHasher>,
    permits: Arc<Semaphore>,
}

impl HashingPool {
    /// Create a pool around `hasher` allowing at most `max_in_flight`
    /// concurrent hashing operations.
    pub fn new(hasher: Arc<dyn PasswordHasher>, max_in_flight: usize) -> Self {
        Self {
            hasher,
            permits: Arc::new(Semaphore::new(max_in_flight.max(1))),
        }
    }

    /// Hash a plaintext password off the async scheduler.
    pub async fn hash(&self, plaintext: String) -> AuthResult<HashedPassword> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| AuthError::HashingFailure(format!("hashing pool closed: {e}")))?;

        let hasher = Arc::clone(&self.hasher);
        let hashed = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            hasher.hash(&plaintext)
        })
        .await
        .map_err(|e| AuthError::HashingFailure(format!("hashing task failed: {e}")))??;

        Ok(hashed)
    }

    /// Verify a plaintext password off the async scheduler.
    pub async fn verify(&self, plaintext: String, hash: HashedPassword) -> AuthResult<bool> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| AuthError::HashingFailure(format!("hashing pool closed: {e}")))?;

        let hasher = Arc::clone(&self.hasher);
        let valid = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            hasher.verify(&plaintext, &hash)
        })
        .await
        .map_err(|e| AuthError::HashingFailure(format!("hashing task failed: {e}")))??;

        Ok(valid)
    }
}
