//! Stateless repositories. Every method takes the pool explicitly.
//!
//! Absence is reported as `Ok(None)` / `Ok(false)`; `Err` always means the
//! statement itself failed.

pub mod actor_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use movie_repo::MovieRepo;
