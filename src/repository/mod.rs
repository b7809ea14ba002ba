//! Data access for the catalog.
//!
//! Each repository wraps a pooled [`sea_orm::DatabaseConnection`]; a call borrows a
//! connection for its statement and hands it back on return. Lookups report absence
//! as `None`/`false`, never as an error.

mod actor;
mod genre;
mod movie;

pub use actor::ActorRepository;
pub use genre::GenreRepository;
pub use movie::MovieRepository;
