// Team domain module
// Contains the team entity

#![allow(clippy::module_inception)]

pub mod team;

// Re-export main types for convenience
pub use team::Team;
