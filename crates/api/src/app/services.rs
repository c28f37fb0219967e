use std::sync::Arc;

use libris_core::Clock;
use libris_infra::{LendingPolicy, LibraryHandlers, Repositories};

/// Everything a route needs, shared behind one `Arc`.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub handlers: LibraryHandlers,
}

impl AppServices {
    pub fn new(handlers: LibraryHandlers) -> Self {
        Self { handlers }
    }

    /// In-memory repositories (dev/test): state lives as long as the process.
    pub fn in_memory(clock: Arc<dyn Clock>, policy: LendingPolicy) -> Self {
        Self::new(LibraryHandlers::new(Repositories::in_memory(), clock, policy))
    }
}
