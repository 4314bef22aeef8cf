//! pet-registry-server: HTTP service for pet records
//!
//! Exposes a single resource, `/api/pets`, that creates and lists
//! pet/owner name pairs held in a `Pets` table.
//!
//! Layers:
//! - models: validated domain types
//! - db: store capability trait plus PostgreSQL and in-memory stores
//! - http: axum router, handlers, error mapping, server loop

pub mod db;
pub mod http;
pub mod models;

pub use db::{PetStore, StoreError};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{NewPet, Pet};
