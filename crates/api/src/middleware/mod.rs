//! Request pipeline stages that run before a handler body.
//!
//! - [`permission::Authorized`] -- runs the credential gate for a required
//!   permission and hands the verified claims to the handler.

pub mod permission;
