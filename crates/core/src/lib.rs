//! Domain primitives shared by the persistence and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod permissions;
pub mod release_date;
pub mod types;
pub mod validation;
