// Resolver layer
// Named read and create operations shared by the REST and GraphQL adapters

pub mod query_resolver;

pub use query_resolver::{coerce_id, QueryResolver};
