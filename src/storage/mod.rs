//! In-memory storage for the entity graph

pub mod in_memory;
pub mod seed;
pub mod store;

pub use in_memory::InMemoryCollection;
pub use seed::SeedData;
pub use store::EntityStore;
