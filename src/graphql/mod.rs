//! GraphQL adapter over the query resolver.
//!
//! ## Schema
//!
//! - **Queries**: `getTeams`, `getTeam(id)`, `getUsers`, `getUser(id)`
//! - **Mutations**: `appendTeam(input)`, `appendUser(input)`
//!
//! ```graphql
//! { getTeam(id: 1) { id name users { id name age skill } } }
//!
//! mutation ($input: UserInput!) { appendUser(input: $input) }
//! ```
//!
//! A missing team is reported in `errors` with `extensions.code = "NOT_FOUND"`.

mod schema;
mod types;

pub use schema::{build_schema, MutationRoot, QueryRoot, RosterSchema};
pub use types::*;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};

use crate::api::state::AppState;

/// GraphQL query handler
///
/// POST /graphql
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL page
///
/// GET /graphql
pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
