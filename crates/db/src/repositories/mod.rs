//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! `UserRepo` works on the pool directly; todo and category repositories
//! take a `&mut PgConnection` so they run inside the request's transaction.

pub mod category_repo;
pub mod todo_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
