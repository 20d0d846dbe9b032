//! Well-known permission strings carried in the `permissions` token claim.
//!
//! These must match the permissions configured on the issuer's API.

pub const PERM_GET_MOVIES: &str = "get:movies";
pub const PERM_POST_MOVIES: &str = "post:movies";
pub const PERM_PATCH_MOVIES: &str = "patch:movies";
pub const PERM_DELETE_MOVIES: &str = "delete:movies";

pub const PERM_GET_ACTORS: &str = "get:actors";
pub const PERM_POST_ACTORS: &str = "post:actors";
pub const PERM_PATCH_ACTORS: &str = "patch:actors";
pub const PERM_DELETE_ACTORS: &str = "delete:actors";

/// Every permission the API checks, in route order.
pub const ALL_PERMISSIONS: &[&str] = &[
    PERM_GET_MOVIES,
    PERM_POST_MOVIES,
    PERM_PATCH_MOVIES,
    PERM_DELETE_MOVIES,
    PERM_GET_ACTORS,
    PERM_POST_ACTORS,
    PERM_PATCH_ACTORS,
    PERM_DELETE_ACTORS,
];
