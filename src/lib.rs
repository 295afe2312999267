//! Team Roster API Library
//!
//! An in-memory store of teams and users exposed through two transports, a
//! REST API and a GraphQL API, which share one resolver layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod graphql;
pub mod infrastructure;
pub mod logging;
pub mod resolver;
