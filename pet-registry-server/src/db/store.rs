//! Store capability consumed by the HTTP layer

use async_trait::async_trait;

use crate::models::{NewPet, Pet};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent home of pet records.
///
/// Implementations return records ordered by id, ascending.
#[async_trait]
pub trait PetStore: Send + Sync {
    /// Insert one pet, then return every stored pet including the new one.
    async fn insert_and_list(&self, pet: NewPet) -> Result<Vec<Pet>, StoreError>;

    /// Return every stored pet.
    async fn list(&self) -> Result<Vec<Pet>, StoreError>;

    /// Check that the store answers.
    async fn ping(&self) -> Result<(), StoreError>;
}
