//! User routes: CRUD over the `users` table. Every route requires a valid token.

use axum::{
    extract::{Extension, Path, State},
    middleware,
    routing::get,
    Json, Router,
};
use roster_common::{
    error::{RosterError, RosterResult},
    models::user::{User, UserRequest},
    validation::validate_request,
};
use roster_db::repository::users;
use std::sync::Arc;

use crate::{extract::JsonBody, middleware::AuthContext, routes::MessageResponse, AppState};

/// User routes (all require authentication).
pub fn router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth_middleware,
        ))
}

/// POST /api/user
async fn create_user(
    Extension(auth): Extension<AuthContext>,
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<UserRequest>,
) -> RosterResult<Json<MessageResponse>> {
    validate_request(&body)?;
    let (name, email) = body.fields();

    let user = users::create_user(&state.db.pool, name, email).await?;
    tracing::info!(user_id = user.id, actor = %auth.username, "User created");

    Ok(Json(MessageResponse::new("User created successfully")))
}

/// GET /api/user
async fn list_users(State(state): State<Arc<AppState>>) -> RosterResult<Json<Vec<User>>> {
    Ok(Json(users::list_users(&state.db.pool).await?))
}

/// GET /api/user/{id}
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> RosterResult<Json<User>> {
    let user = users::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| RosterError::not_found("User"))?;

    Ok(Json(user))
}

/// PUT /api/user/{id}
///
/// Unknown ids are reported before the body is parsed or validated.
async fn update_user(
    Extension(auth): Extension<AuthContext>,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    body: Result<JsonBody<UserRequest>, RosterError>,
) -> RosterResult<Json<MessageResponse>> {
    if users::find_by_id(&state.db.pool, id).await?.is_none() {
        return Err(RosterError::not_found("User"));
    }

    let JsonBody(body) = body?;
    validate_request(&body)?;
    let (name, email) = body.fields();

    users::update_user(&state.db.pool, id, name, email)
        .await?
        .ok_or_else(|| RosterError::not_found("User"))?;
    tracing::info!(user_id = id, actor = %auth.username, "User updated");

    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// DELETE /api/user/{id}
async fn delete_user(
    Extension(auth): Extension<AuthContext>,
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> RosterResult<Json<MessageResponse>> {
    if !users::delete_user(&state.db.pool, id).await? {
        return Err(RosterError::not_found("User"));
    }
    tracing::info!(user_id = id, actor = %auth.username, "User deleted");

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
