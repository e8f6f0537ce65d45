//! Domain primitives shared by the todo store, the HTTP API and the client
//! mirror.
//!
//! Zero internal dependencies: identifiers, timestamps, the domain error
//! type, field validation helpers and list-parameter parsing.

pub mod error;
pub mod listing;
pub mod seed;
pub mod types;
pub mod validation;
