//! Actor entity model and DTOs.

use casting_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

/// DTO for patching an actor. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl UpdateActor {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.gender.is_none()
    }
}
