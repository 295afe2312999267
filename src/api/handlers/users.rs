use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::handlers::teams::CreatedResponse;
use crate::api::state::AppState;
use crate::domain::errors::DomainError;
use crate::domain::user::{NewUser, Skill, User};

/// Request body for creating a user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i32,
    pub skill: Skill,
    pub team_id: i32,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser::new(req.name, req.age, req.skill, req.team_id)
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub skill: Skill,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_string(),
            age: user.age(),
            skill: user.skill(),
        }
    }
}

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = state.resolver.get_users().await;
    Json(users.iter().map(|u| UserResponse::from(u.as_ref())).collect())
}

/// Get a user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .resolver
        .get_user(&user_id)
        .await
        .ok_or_else(|| ApiError::from(DomainError::user_not_found(&user_id)))?;

    Ok(Json(UserResponse::from(user.as_ref())))
}

/// Create a new user in an existing team
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.resolver.append_user(req.into()).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
