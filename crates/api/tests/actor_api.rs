//! End-to-end tests for `/actors` against a migrated database.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete_auth, get_auth, patch_json_auth, post_json_auth, token};
use serde_json::json;
use sqlx::PgPool;

async fn create_actor(pool: &PgPool, name: &str, age: i32, gender: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/actors",
        &token(&["post:actors"]),
        json!({"name": name, "age": age, "gender": gender}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["created_actor"].as_i64().unwrap()
}

async fn patch_actor(pool: &PgPool, id: i64, body: serde_json::Value) -> serde_json::Value {
    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &format!("/actors/{id}"),
        &token(&["patch:actors"]),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_empty_is_200(pool: PgPool) {
    let response = get_auth(build_test_app(pool), "/actors", &token(&["get:actors"])).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["actors"], json!([]));
    assert_eq!(json["total_actors"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_list(pool: PgPool) {
    let id = create_actor(&pool, "Paul Bettany", 50, "M").await;
    create_actor(&pool, "Elizabeth Olsen", 32, "F").await;

    let response = get_auth(build_test_app(pool), "/actors", &token(&["get:actors"])).await;
    let json = body_json(response).await;

    assert_eq!(json["success"], true);
    assert_eq!(json["total_actors"], 2);
    assert_eq!(
        json["actors"][0],
        json!({"id": id, "name": "Paul Bettany", "age": 50, "gender": "M"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_response_lists_all_actors(pool: PgPool) {
    create_actor(&pool, "Paul Bettany", 50, "M").await;

    let response = post_json_auth(
        build_test_app(pool),
        "/actors",
        &token(&["post:actors"]),
        json!({"name": "Elizabeth Olsen", "age": 32, "gender": "F"}),
    )
    .await;
    let json = body_json(response).await;

    let actors = json["actors"].as_array().unwrap();
    assert_eq!(actors.len(), 2);
    assert_eq!(actors[1]["id"], json["created_actor"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_missing_field_is_400(pool: PgPool) {
    let response = post_json_auth(
        build_test_app(pool),
        "/actors",
        &token(&["post:actors"]),
        json!({"name": "Paul Bettany", "gender": "M"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "age is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_name_keeps_age_and_gender(pool: PgPool) {
    let id = create_actor(&pool, "Paul Bettany", 50, "M").await;

    let json = patch_actor(&pool, id, json!({"name": "Vision"})).await;

    assert_eq!(
        json["updated_actor"],
        json!({"id": id, "name": "Vision", "age": 50, "gender": "M"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_age_zero_is_applied(pool: PgPool) {
    let id = create_actor(&pool, "Cassie Lang", 11, "F").await;

    let json = patch_actor(&pool, id, json!({"age": 0})).await;

    assert_eq!(json["updated_actor"]["age"], 0);
    assert_eq!(json["updated_actor"]["name"], "Cassie Lang");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_negative_age_is_400(pool: PgPool) {
    let id = create_actor(&pool, "Paul Bettany", 50, "M").await;

    let response = patch_json_auth(
        build_test_app(pool),
        &format!("/actors/{id}"),
        &token(&["patch:actors"]),
        json!({"age": -1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_missing_actor_is_404(pool: PgPool) {
    let response = patch_json_auth(
        build_test_app(pool),
        "/actors/10000",
        &token(&["patch:actors"]),
        json!({"name": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Actor with id 10000 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_delete_again(pool: PgPool) {
    let id = create_actor(&pool, "Paul Bettany", 50, "M").await;

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/actors/{id}"),
        &token(&["delete:actors"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["deleted_id"], id);
    assert_eq!(json["actors"], json!([]));

    let again = delete_auth(
        build_test_app(pool),
        &format!("/actors/{id}"),
        &token(&["delete:actors"]),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_failure_on_delete_is_422(pool: PgPool) {
    sqlx::query("DROP TABLE actors").execute(&pool).await.unwrap();

    let response = delete_auth(build_test_app(pool), "/actors/1", &token(&["delete:actors"])).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn movie_permissions_do_not_reach_actors(pool: PgPool) {
    create_actor(&pool, "Paul Bettany", 50, "M").await;

    let response = get_auth(
        build_test_app(pool),
        "/actors",
        &token(&["get:movies", "post:movies", "patch:movies", "delete:movies"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
