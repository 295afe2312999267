use std::sync::Arc;

use crate::domain::user::User;

/// Team entity
///
/// Owns an ordered sequence of its members. Members are shared with the
/// global users collection, so a user seen through a team and the same user
/// seen through the users list are one record.
///
/// # Invariants
/// - `id` is assigned by the store and never changes
/// - Members are only ever appended, in creation order
///
/// # Example
/// ```
/// use team_roster_api::domain::team::Team;
///
/// let team = Team::new(1, "Platform".to_string());
/// assert_eq!(team.name(), "Platform");
/// assert!(team.users().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: i32,
    name: String,
    users: Vec<Arc<User>>,
}

impl Team {
    /// Creates a team with no members
    pub fn new(id: i32, name: String) -> Self {
        Self {
            id,
            name,
            users: Vec::new(),
        }
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the members in the order they joined
    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    /// Appends a member
    ///
    /// Only the entity store calls this, and only together with the append
    /// to the global users collection.
    pub(crate) fn enroll(&mut self, user: Arc<User>) {
        self.users.push(user);
    }
}
