use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, teams, users};
use crate::api::state::AppState;
use crate::graphql;

/// Builds the application router: REST routes, the GraphQL endpoint and,
/// optionally, the GraphiQL page
pub fn build_router(state: AppState, graphiql_enabled: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let graphql_route = if graphiql_enabled {
        get(graphql::graphiql).post(graphql::graphql_handler)
    } else {
        post(graphql::graphql_handler)
    };

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route("/teams/{team_id}", get(teams::get_team))
        .route("/teams/{team_id}/users", get(teams::get_team_with_users))
        // User routes
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{user_id}", get(users::get_user))
        // GraphQL
        .route("/graphql", graphql_route)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
