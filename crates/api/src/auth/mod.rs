//! Bearer-token verification against an external issuer.
//!
//! - [`header`] -- pulls the token out of the `Authorization` header.
//! - [`jwks`] -- fetches and caches the issuer's signing-key set.
//! - [`jwt`] -- issuer settings, claim set, and signature/claim validation.
//! - [`verifier`] -- [`verifier::TokenVerifier`], combining the key cache with validation.
//! - [`permission`] -- permission checks and the full request gate.
//! - [`error`] -- [`error::AuthError`], each variant carrying its HTTP status.

pub mod error;
pub mod header;
pub mod jwks;
pub mod jwt;
pub mod permission;
pub mod verifier;

#[cfg(test)]
pub(crate) mod testutil;
