//! Handlers for the `/movies` resource.

use axum::extract::State;
use casting_core::error::CoreError;
use casting_core::release_date;
use casting_core::types::DbId;
use casting_core::validation::validate_title;
use casting_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use casting_db::repositories::MovieRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::middleware::permission::{Authorized, DeleteMovies, GetMovies, PatchMovies, PostMovies};
use crate::response::Envelope;
use crate::state::AppState;

/// Movie fields as sent by clients. `release` is `DD/MM/YYYY`.
///
/// POST requires every field; PATCH requires at least one.
#[derive(Debug, Deserialize)]
pub struct MovieInput {
    pub title: Option<String>,
    pub release: Option<String>,
}

impl MovieInput {
    fn into_create(self) -> Result<CreateMovie, CoreError> {
        let title = self.title.ok_or_else(|| missing("title"))?;
        validate_title(&title)?;
        let release = self.release.ok_or_else(|| missing("release"))?;
        let release = release_date::parse(&release)?;
        Ok(CreateMovie { title, release })
    }

    fn into_update(self) -> Result<UpdateMovie, CoreError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        let update = UpdateMovie {
            title: self.title,
            release: self.release.as_deref().map(release_date::parse).transpose()?,
        };
        if update.is_empty() {
            return Err(CoreError::Validation(
                "request body must contain at least one of: title, release".to_string(),
            ));
        }
        Ok(update)
    }
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("{field} is required"))
}

#[derive(Debug, Serialize)]
pub struct MovieList {
    pub movies: Vec<Movie>,
    pub total_movies: usize,
}

#[derive(Debug, Serialize)]
pub struct MovieCreated {
    pub created_movie: DbId,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Serialize)]
pub struct MovieUpdated {
    pub updated_movie: Movie,
}

#[derive(Debug, Serialize)]
pub struct MovieDeleted {
    pub deleted_id: DbId,
    pub movies: Vec<Movie>,
}

/// GET /movies
pub async fn list(
    State(state): State<AppState>,
    _auth: Authorized<GetMovies>,
) -> AppResult<Envelope<MovieList>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Envelope::ok(MovieList {
        total_movies: movies.len(),
        movies,
    }))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    auth: Authorized<PostMovies>,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<Envelope<MovieCreated>> {
    let dto = input.into_create()?;
    let movie = MovieRepo::create(&state.pool, &dto)
        .await
        .map_err(AppError::unprocessable)?;
    tracing::info!(movie_id = movie.id, sub = %auth.claims.sub, "Movie created");

    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Envelope::ok(MovieCreated {
        created_movie: movie.id,
        movies,
    }))
}

/// PATCH /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Authorized<PatchMovies>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<MovieInput>,
) -> AppResult<Envelope<MovieUpdated>> {
    let dto = input.into_update()?;
    let movie = MovieRepo::update(&state.pool, id, &dto)
        .await
        .map_err(AppError::unprocessable)?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    tracing::info!(movie_id = id, sub = %auth.claims.sub, "Movie updated");

    Ok(Envelope::ok(MovieUpdated {
        updated_movie: movie,
    }))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Authorized<DeleteMovies>,
    IdPath(id): IdPath,
) -> AppResult<Envelope<MovieDeleted>> {
    let deleted = MovieRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::unprocessable)?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }));
    }
    tracing::info!(movie_id = id, sub = %auth.claims.sub, "Movie deleted");

    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Envelope::ok(MovieDeleted {
        deleted_id: id,
        movies,
    }))
}
