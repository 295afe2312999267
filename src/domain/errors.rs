use std::fmt;

use thiserror::Error;

/// Kind of entity a lookup was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Team,
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Team => write!(f, "Team"),
            EntityKind::User => write!(f, "User"),
        }
    }
}

/// Errors raised by the entity store and the resolver layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The referenced entity does not exist. `id` is kept as given by the
    /// caller so the message names exactly what was asked for.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// The collection has used up the positive `i32` id range
    #[error("{kind} collection is full")]
    CapacityExceeded { kind: EntityKind },
}

impl DomainError {
    pub fn team_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            kind: EntityKind::Team,
            id: id.to_string(),
        }
    }

    pub fn user_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            kind: EntityKind::User,
            id: id.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
