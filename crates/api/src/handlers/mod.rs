pub mod actor;
pub mod fallback;
pub mod movie;
pub mod status;
