//! In-process pet store
//!
//! Keeps records in memory for the lifetime of the process. Used by tests
//! and by `serve --memory` when no database is at hand.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{PetStore, StoreError};
use crate::models::{NewPet, Pet};

#[derive(Default)]
struct Inner {
    next_id: i64,
    pets: Vec<Pet>,
}

/// Pet store held behind an async lock
#[derive(Default)]
pub struct MemoryPetStore {
    inner: RwLock<Inner>,
}

impl MemoryPetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetStore for MemoryPetStore {
    async fn insert_and_list(&self, pet: NewPet) -> Result<Vec<Pet>, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.pets.push(Pet {
            id,
            name: pet.name.as_str().to_owned(),
            owner: pet.owner.as_str().to_owned(),
        });
        Ok(inner.pets.clone())
    }

    async fn list(&self) -> Result<Vec<Pet>, StoreError> {
        Ok(self.inner.read().await.pets.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
