use super::value_objects::Skill;

/// A team member
///
/// Users are immutable once created. The same record is shared between the
/// global users collection and the `users` sequence of its team.
///
/// # Example
/// ```
/// use team_roster_api::domain::user::{Skill, User};
///
/// let user = User::new(1, "Ada".to_string(), 36, Skill::React);
/// assert_eq!(user.id(), 1);
/// assert_eq!(user.skill(), Skill::React);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: i32,
    name: String,
    age: i32,
    skill: Skill,
}

impl User {
    pub fn new(id: i32, name: String, age: i32, skill: Skill) -> Self {
        Self {
            id,
            name,
            age,
            skill,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }
}

/// Fields needed to create a user
///
/// `team_id` only decides which team the user joins; it is not stored on
/// the resulting [`User`]. Values are not range-checked: a negative age is
/// kept as given and a team id that matches no team is rejected by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub skill: Skill,
    pub team_id: i32,
}

impl NewUser {
    pub fn new(name: impl Into<String>, age: i32, skill: Skill, team_id: i32) -> Self {
        Self {
            name: name.into(),
            age,
            skill,
            team_id,
        }
    }

    /// Builds the user record under the given id
    pub fn into_user(self, id: i32) -> User {
        User::new(id, self.name, self.age, self.skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_into_user_drops_team_id() {
        let input = NewUser::new("U", 21, Skill::Express, 7);
        let user = input.into_user(3);

        assert_eq!(user.id(), 3);
        assert_eq!(user.name(), "U");
        assert_eq!(user.age(), 21);
        assert_eq!(user.skill(), Skill::Express);
    }

    #[test]
    fn negative_values_are_kept_as_given() {
        let input = NewUser::new("U", -3, Skill::React, -1);
        assert_eq!(input.team_id, -1);
        assert_eq!(input.into_user(1).age(), -3);
    }

    #[test]
    fn users_with_same_fields_are_equal() {
        let a = User::new(1, "U".to_string(), 21, Skill::Express);
        let b = User::new(1, "U".to_string(), 21, Skill::Express);
        assert_eq!(a, b);
    }
}
