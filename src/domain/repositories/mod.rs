// Repository ports (interfaces implemented by infrastructure adapters)

pub mod entity_store;

pub use entity_store::EntityStore;
