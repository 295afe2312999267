use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, Schema, ID};

use crate::domain::errors::DomainError;
use crate::resolver::QueryResolver;

use super::types::*;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(resolver: QueryResolver) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolver)
        .finish()
}

impl ErrorExtensions for DomainError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            DomainError::NotFound { kind, id } => {
                e.set("code", "NOT_FOUND");
                e.set("entity", kind.to_string());
                e.set("id", id.as_str());
            }
            DomainError::CapacityExceeded { kind } => {
                e.set("code", "CAPACITY_EXCEEDED");
                e.set("entity", kind.to_string());
            }
        })
    }
}

fn get_resolver<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a QueryResolver> {
    ctx.data::<QueryResolver>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All teams with their members
    async fn get_teams(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Team>> {
        let teams = get_resolver(ctx)?.get_teams().await;
        Ok(teams.iter().map(Team::from).collect())
    }

    /// A single team; fails with NOT_FOUND when the id matches no team
    async fn get_team(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Team> {
        let team = get_resolver(ctx)?
            .get_team(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(Team::from(&team))
    }

    /// All users
    async fn get_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let users = get_resolver(ctx)?.get_users().await;
        Ok(users.iter().map(|u| User::from(u.as_ref())).collect())
    }

    /// A single user, or null when the id matches no user
    async fn get_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<User>> {
        let user = get_resolver(ctx)?.get_user(&id).await;
        Ok(user.map(|u| User::from(u.as_ref())))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a team, returning its id
    async fn append_team(
        &self,
        ctx: &Context<'_>,
        input: TeamInput,
    ) -> async_graphql::Result<i32> {
        get_resolver(ctx)?
            .append_team(input.name)
            .await
            .map_err(|e| e.extend())
    }

    /// Create a user in an existing team, returning its id
    async fn append_user(
        &self,
        ctx: &Context<'_>,
        input: UserInput,
    ) -> async_graphql::Result<i32> {
        get_resolver(ctx)?
            .append_user(input.into())
            .await
            .map_err(|e| e.extend())
    }
}
