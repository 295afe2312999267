use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::repositories::EntityStore;
use crate::domain::team::Team;
use crate::domain::user::{NewUser, User};

/// Converts an identifier given as text into the integer key type
///
/// Returns `None` for anything that is not a positive integer; such ids
/// cannot match any entity.
///
/// # Example
/// ```
/// use team_roster_api::resolver::coerce_id;
///
/// assert_eq!(coerce_id("3"), Some(3));
/// assert_eq!(coerce_id("0"), None);
/// assert_eq!(coerce_id("three"), None);
/// ```
pub fn coerce_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// The named query and mutation operations
///
/// Holds the store it operates on; construct one per store and share it
/// between transports.
#[derive(Clone)]
pub struct QueryResolver {
    store: Arc<dyn EntityStore>,
}

impl QueryResolver {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// All teams with their members
    pub async fn get_teams(&self) -> Vec<Team> {
        self.store.list_teams().await
    }

    /// A single team by id
    ///
    /// # Errors
    /// * `DomainError::NotFound` - if no team matches `id`
    pub async fn get_team(&self, id: &str) -> DomainResult<Team> {
        let team = match coerce_id(id) {
            Some(key) => self.store.find_team_by_id(key).await,
            None => None,
        };

        team.ok_or_else(|| DomainError::team_not_found(id))
    }

    /// All users
    pub async fn get_users(&self) -> Vec<Arc<User>> {
        self.store.list_users().await
    }

    /// A single user by id, `None` when no user matches
    pub async fn get_user(&self, id: &str) -> Option<Arc<User>> {
        let key = coerce_id(id)?;
        self.store.find_user_by_id(key).await
    }

    /// Creates a team and returns its id
    ///
    /// # Errors
    /// * `DomainError::CapacityExceeded` - if no further team id is available
    pub async fn append_team(&self, name: String) -> DomainResult<i32> {
        let team = self.store.append_team(name).await?;
        tracing::info!(team_id = team.id(), name = team.name(), "team created");
        Ok(team.id())
    }

    /// Creates a user in an existing team and returns its id
    ///
    /// # Errors
    /// * `DomainError::NotFound` - if `input.team_id` matches no team; no
    ///   collection is modified
    pub async fn append_user(&self, input: NewUser) -> DomainResult<i32> {
        let user = self.store.append_user(input).await?;
        tracing::info!(user_id = user.id(), name = user.name(), "user created");
        Ok(user.id())
    }
}
