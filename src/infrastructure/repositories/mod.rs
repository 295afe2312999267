// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_entity_store;

pub use in_memory_entity_store::InMemoryEntityStore;
