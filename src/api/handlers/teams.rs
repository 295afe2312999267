use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::handlers::users::UserResponse;
use crate::api::state::AppState;
use crate::domain::team::Team;

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

/// Id of a newly created team or user
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// Team without its members
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: i32,
    pub name: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
        }
    }
}

/// Team with its members
#[derive(Debug, Serialize)]
pub struct TeamWithUsersResponse {
    pub id: i32,
    pub name: String,
    pub users: Vec<UserResponse>,
}

impl From<&Team> for TeamWithUsersResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            users: team
                .users()
                .iter()
                .map(|u| UserResponse::from(u.as_ref()))
                .collect(),
        }
    }
}

/// List all teams with their members
///
/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<TeamWithUsersResponse>> {
    let teams = state.resolver.get_teams().await;
    Json(teams.iter().map(TeamWithUsersResponse::from).collect())
}

/// Get a team by ID, without members
///
/// GET /teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.resolver.get_team(&team_id).await?;
    Ok(Json(TeamResponse::from(&team)))
}

/// Get a team by ID, with members
///
/// GET /teams/{team_id}/users
pub async fn get_team_with_users(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamWithUsersResponse>, ApiError> {
    let team = state.resolver.get_team(&team_id).await?;
    Ok(Json(TeamWithUsersResponse::from(&team)))
}

/// Create a new team
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.resolver.append_team(req.name).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
