//! Database layer - connection pool and pet stores
//!
//! # Design Principles
//!
//! - The store is a capability passed to handlers, never a global
//! - Connection pool (max 5 connections by default) owned by sqlx
//! - Parameterized statements only
//! - Insert and read-back share one transaction

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryPetStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgPetStore;
pub use store::{PetStore, StoreError};
