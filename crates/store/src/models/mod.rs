//! Entity structs and request DTOs for the two collections.

pub mod category;
pub mod todo;
