//! Route handlers organized by resource

pub mod docs;
pub mod health;
pub mod pets;
pub mod status;
