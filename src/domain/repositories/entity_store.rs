use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::team::Team;
use crate::domain::user::{NewUser, User};

/// Store port for the Team and User collections
///
/// Both collections are append-only and ordered by creation. Ids are
/// assigned per collection as `len + 1` at the time of the append, so each
/// collection holds at most `i32::MAX` entries.
/// Implementations must keep a user's entry in the users collection and its
/// entry in the owning team's `users` in step: either both are appended or
/// neither is.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Find a team by its ID
    async fn find_team_by_id(&self, id: i32) -> Option<Team>;

    /// Find a user by its ID
    async fn find_user_by_id(&self, id: i32) -> Option<Arc<User>>;

    /// All teams, in insertion order
    async fn list_teams(&self) -> Vec<Team>;

    /// All users, in insertion order
    async fn list_users(&self) -> Vec<Arc<User>>;

    /// Create a team with no members
    ///
    /// # Errors
    /// * `DomainError::CapacityExceeded` - if the team id range is used up
    async fn append_team(&self, name: String) -> DomainResult<Team>;

    /// Create a user and enroll it in `new_user.team_id`
    ///
    /// # Errors
    /// * `DomainError::NotFound` - if the team does not exist; nothing is
    ///   written in that case
    /// * `DomainError::CapacityExceeded` - if the user id range is used up
    async fn append_user(&self, new_user: NewUser) -> DomainResult<Arc<User>>;

    /// Current sizes of the (teams, users) collections
    async fn counts(&self) -> (usize, usize);
}
