//! PostgreSQL pet store
//!
//! The `Pets` table is created outside this service. Unquoted identifiers
//! fold to lowercase, so queries address `pets(id, name, owner)`.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use super::store::{PetStore, StoreError};
use crate::models::{NewPet, Pet};

// `id` may be SERIAL or BIGSERIAL depending on how the table was created.
const SELECT_ALL: &str = "SELECT id::BIGINT AS id, name, owner FROM pets ORDER BY id";

/// Pet store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgPetStore {
    pool: PgPool,
}

impl PgPetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert(conn: &mut PgConnection, pet: &NewPet) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO pets (name, owner) VALUES ($1, $2)")
        .bind(pet.name.as_str())
        .bind(pet.owner.as_str())
        .execute(conn)
        .await?;
    Ok(())
}

async fn select_all(conn: &mut PgConnection) -> Result<Vec<Pet>, sqlx::Error> {
    sqlx::query_as::<_, Pet>(SELECT_ALL).fetch_all(conn).await
}

#[async_trait]
impl PetStore for PgPetStore {
    /// Insert and read back inside one transaction, so a failed read-back
    /// leaves no orphaned row behind.
    async fn insert_and_list(&self, pet: NewPet) -> Result<Vec<Pet>, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Dropping `tx` on an early return rolls the insert back.
        insert(&mut tx, &pet).await?;
        let pets = select_all(&mut tx).await?;

        tx.commit().await?;

        tracing::debug!(count = pets.len(), "inserted pet");
        Ok(pets)
    }

    async fn list(&self) -> Result<Vec<Pet>, StoreError> {
        let pets = sqlx::query_as::<_, Pet>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(pets)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    // Integration tests - run with DATABASE_URL set and a `Pets` table present
    // cargo test -p pet-registry-server -- --ignored

    async fn store() -> PgPetStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        PgPetStore::new(create_pool(&url).await.expect("pool creation failed"))
    }

    fn owned_by(pets: &[Pet], owner: &str) -> usize {
        pets.iter().filter(|p| p.owner == owner).count()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_grows_list_by_one() {
        let store = store().await;
        let owner = "grows-by-one-test";
        let before = owned_by(&store.list().await.unwrap(), owner);

        let pet = NewPet::new(Some("Rex"), Some(owner)).unwrap();
        let after = store.insert_and_list(pet).await.unwrap();

        assert_eq!(owned_by(&after, owner), before + 1);
        assert!(after.iter().any(|p| p.name == "Rex" && p.owner == owner));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ids_are_unique() {
        let store = store().await;
        for i in 0..3 {
            let name = format!("pet-{i}");
            let pet = NewPet::new(Some(&name), Some("ids-test")).unwrap();
            store.insert_and_list(pet).await.unwrap();
        }

        let pets = store.list().await.unwrap();
        let mut ids: Vec<i64> = pets.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), pets.len());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_succeeds() {
        store().await.ping().await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn failed_insert_leaves_no_row() {
        let store = store().await;
        let owner = "failed-insert-test";

        // PostgreSQL text cannot hold NUL bytes, so the INSERT itself fails.
        let pet = NewPet::new(Some("bad\0name"), Some(owner)).unwrap();
        let result = store.insert_and_list(pet).await;

        assert!(matches!(result, Err(StoreError::Sqlx(_))));
        let pets = store.list().await.unwrap();
        assert!(!pets.iter().any(|p| p.owner == owner));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn uncommitted_insert_is_rolled_back() {
        let store = store().await;
        let owner = "rollback-test";

        // Same path as a failed read-back: inserted, then dropped before commit.
        let mut tx = store.pool.begin().await.unwrap();
        let pet = NewPet::new(Some("Ghost"), Some(owner)).unwrap();
        insert(&mut tx, &pet).await.unwrap();
        let inside = select_all(&mut tx).await.unwrap();
        assert!(inside.iter().any(|p| p.owner == owner));
        drop(tx);

        let pets = store.list().await.unwrap();
        assert!(!pets.iter().any(|p| p.owner == owner));
    }
}
