//! Handlers for the `/actors` resource.

use axum::extract::State;
use casting_core::error::CoreError;
use casting_core::types::DbId;
use casting_core::validation::{validate_age, validate_gender, validate_name};
use casting_db::models::actor::{Actor, CreateActor, UpdateActor};
use casting_db::repositories::ActorRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::middleware::permission::{Authorized, DeleteActors, GetActors, PatchActors, PostActors};
use crate::response::Envelope;
use crate::state::AppState;

/// Actor fields as sent by clients.
///
/// A field is "supplied" when present and non-null; supplied values are
/// validated and written even when falsy (`age: 0`).
#[derive(Debug, Deserialize)]
pub struct ActorInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl ActorInput {
    fn validate_supplied(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        if let Some(gender) = &self.gender {
            validate_gender(gender)?;
        }
        Ok(())
    }

    fn into_create(self) -> Result<CreateActor, CoreError> {
        self.validate_supplied()?;
        Ok(CreateActor {
            name: self.name.ok_or_else(|| missing("name"))?,
            age: self.age.ok_or_else(|| missing("age"))?,
            gender: self.gender.ok_or_else(|| missing("gender"))?,
        })
    }

    fn into_update(self) -> Result<UpdateActor, CoreError> {
        self.validate_supplied()?;
        let update = UpdateActor {
            name: self.name,
            age: self.age,
            gender: self.gender,
        };
        if update.is_empty() {
            return Err(CoreError::Validation(
                "request body must contain at least one of: name, age, gender".to_string(),
            ));
        }
        Ok(update)
    }
}

fn missing(field: &str) -> CoreError {
    CoreError::Validation(format!("{field} is required"))
}

#[derive(Debug, Serialize)]
pub struct ActorList {
    pub actors: Vec<Actor>,
    pub total_actors: usize,
}

#[derive(Debug, Serialize)]
pub struct ActorCreated {
    pub created_actor: DbId,
    pub actors: Vec<Actor>,
}

#[derive(Debug, Serialize)]
pub struct ActorUpdated {
    pub updated_actor: Actor,
}

#[derive(Debug, Serialize)]
pub struct ActorDeleted {
    pub deleted_id: DbId,
    pub actors: Vec<Actor>,
}

/// GET /actors
pub async fn list(
    State(state): State<AppState>,
    _auth: Authorized<GetActors>,
) -> AppResult<Envelope<ActorList>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Envelope::ok(ActorList {
        total_actors: actors.len(),
        actors,
    }))
}

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    auth: Authorized<PostActors>,
    JsonBody(input): JsonBody<ActorInput>,
) -> AppResult<Envelope<ActorCreated>> {
    let dto = input.into_create()?;
    let actor = ActorRepo::create(&state.pool, &dto)
        .await
        .map_err(AppError::unprocessable)?;
    tracing::info!(actor_id = actor.id, sub = %auth.claims.sub, "Actor created");

    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Envelope::ok(ActorCreated {
        created_actor: actor.id,
        actors,
    }))
}

/// PATCH /actors/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: Authorized<PatchActors>,
    IdPath(id): IdPath,
    JsonBody(input): JsonBody<ActorInput>,
) -> AppResult<Envelope<ActorUpdated>> {
    let dto = input.into_update()?;
    let actor = ActorRepo::update(&state.pool, id, &dto)
        .await
        .map_err(AppError::unprocessable)?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    tracing::info!(actor_id = id, sub = %auth.claims.sub, "Actor updated");

    Ok(Envelope::ok(ActorUpdated {
        updated_actor: actor,
    }))
}

/// DELETE /actors/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: Authorized<DeleteActors>,
    IdPath(id): IdPath,
) -> AppResult<Envelope<ActorDeleted>> {
    let deleted = ActorRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::unprocessable)?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Actor", id }));
    }
    tracing::info!(actor_id = id, sub = %auth.claims.sub, "Actor deleted");

    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Envelope::ok(ActorDeleted {
        deleted_id: id,
        actors,
    }))
}
