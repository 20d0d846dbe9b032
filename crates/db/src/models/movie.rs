//! Movie entity model and DTOs.

use casting_core::release_date;
use casting_core::types::DbId;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    #[serde(with = "release_date::serde_format")]
    pub release: NaiveDate,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub release: NaiveDate,
}

/// DTO for patching a movie. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release: Option<NaiveDate>,
}

impl UpdateMovie {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.release.is_none()
    }
}
