//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pet;
pub mod validation;

pub use pet::{NewPet, OwnerName, Pet, PetName};
pub use validation::ValidationError;
