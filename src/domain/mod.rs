// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod repositories;
pub mod team;
pub mod user;

pub use errors::{DomainError, DomainResult, EntityKind};
