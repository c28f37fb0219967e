//! Infrastructure layer: storage adapters, configuration, and the command
//! handlers that orchestrate domain services over them.

pub mod config;
pub mod handlers;
pub mod repository;

#[cfg(test)]
mod integration_tests;

pub use config::{ConfigError, LendingPolicy};
pub use handlers::{HandlerError, LibraryHandlers, Outcome, Rejection};
pub use repository::{InMemoryRepositories, Repositories, RepositoryError};
