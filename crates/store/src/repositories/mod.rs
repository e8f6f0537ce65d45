//! Data access for the two collections.
//!
//! Reads take the shared lock; every mutation takes the write lock once and
//! performs its consistency checks and the change inside it.

pub mod category_repo;
pub mod todo_repo;

pub use category_repo::CategoryRepo;
pub use todo_repo::TodoRepo;
