// Infrastructure layer module
// Contains the in-memory store adapter and the dummy-data seeder
// Follows Hexagonal Architecture

pub mod repositories;
pub mod seed;
