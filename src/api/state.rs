use std::sync::Arc;

use crate::domain::repositories::EntityStore;
use crate::graphql::{build_schema, RosterSchema};
use crate::resolver::QueryResolver;

/// Shared state handed to every handler
///
/// The REST handlers and the GraphQL schema hold the same resolver, so both
/// transports read and write one store.
#[derive(Clone)]
pub struct AppState {
    pub resolver: QueryResolver,
    pub schema: RosterSchema,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        let resolver = QueryResolver::new(store);
        let schema = build_schema(resolver.clone());
        Self { resolver, schema }
    }
}
