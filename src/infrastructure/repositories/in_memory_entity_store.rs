use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult, EntityKind};
use crate::domain::repositories::EntityStore;
use crate::domain::team::Team;
use crate::domain::user::{NewUser, User};

#[derive(Debug, Default)]
struct Collections {
    teams: Vec<Team>,
    users: Vec<Arc<User>>,
}

/// In-memory implementation of EntityStore
///
/// Both collections sit behind one lock, so a user append (team lookup,
/// push to users, push to the team) is a single critical section. Lookups
/// are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    inner: RwLock<Collections>,
}

impl InMemoryEntityStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

/// Id for the next entry of a collection currently holding `len` entries
fn next_id(len: usize, kind: EntityKind) -> DomainResult<i32> {
    len.checked_add(1)
        .and_then(|next| i32::try_from(next).ok())
        .ok_or(DomainError::CapacityExceeded { kind })
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn find_team_by_id(&self, id: i32) -> Option<Team> {
        let inner = self.inner.read().await;
        inner.teams.iter().find(|t| t.id() == id).cloned()
    }

    async fn find_user_by_id(&self, id: i32) -> Option<Arc<User>> {
        let inner = self.inner.read().await;
        inner.users.iter().find(|u| u.id() == id).cloned()
    }

    async fn list_teams(&self) -> Vec<Team> {
        self.inner.read().await.teams.clone()
    }

    async fn list_users(&self) -> Vec<Arc<User>> {
        self.inner.read().await.users.clone()
    }

    async fn append_team(&self, name: String) -> DomainResult<Team> {
        let mut inner = self.inner.write().await;
        let team = Team::new(next_id(inner.teams.len(), EntityKind::Team)?, name);
        inner.teams.push(team.clone());

        tracing::debug!(team_id = team.id(), "appended team");
        Ok(team)
    }

    async fn append_user(&self, new_user: NewUser) -> DomainResult<Arc<User>> {
        let mut inner = self.inner.write().await;
        let team_id = new_user.team_id;

        let Some(position) = inner.teams.iter().position(|t| t.id() == team_id) else {
            tracing::warn!(team_id, "rejected user append: team does not exist");
            return Err(DomainError::team_not_found(team_id));
        };

        let id = next_id(inner.users.len(), EntityKind::User)?;
        let user = Arc::new(new_user.into_user(id));
        inner.users.push(Arc::clone(&user));
        inner.teams[position].enroll(Arc::clone(&user));

        tracing::debug!(user_id = user.id(), team_id, "appended user");
        Ok(user)
    }

    async fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().await;
        (inner.teams.len(), inner.users.len())
    }
}
