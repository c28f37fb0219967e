//! Storage ports for every aggregate, plus an in-memory adapter.
//!
//! Repositories hand out owned copies of aggregates. A caller loads what it
//! needs, mutates it through the domain API, and writes it back with
//! `update`. Nothing here coordinates concurrent writers to one aggregate.

use std::sync::Arc;

use thiserror::Error;

use libris_catalog::{Book, Site};
use libris_circulation::{BookCopy, Loan, UserAccount};
use libris_core::{BookCopyId, BookId, LoanId, SiteId, UserAccountId};

pub mod in_memory;

pub use in_memory::{InMemoryRepositories, InMemoryStore};

/// Storage-level failure (as opposed to a domain fault).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{kind} {id} already exists")]
    Duplicate { kind: &'static str, id: String },

    #[error("{kind} {id} does not exist")]
    Missing { kind: &'static str, id: String },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Stable, machine-readable code for this failure.
    pub fn code(&self) -> &'static str {
        match self {
            RepositoryError::Duplicate { .. } => "DUPLICATE_ENTITY",
            RepositoryError::Missing { .. } => "MISSING_ENTITY",
            RepositoryError::Unavailable(_) => "STORAGE_FAILURE",
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub trait BookRepository: Send + Sync {
    fn get(&self, id: BookId) -> RepositoryResult<Option<Book>>;
    fn list(&self) -> RepositoryResult<Vec<Book>>;
    fn insert(&self, book: Book) -> RepositoryResult<()>;
}

pub trait SiteRepository: Send + Sync {
    fn get(&self, id: SiteId) -> RepositoryResult<Option<Site>>;
    fn list(&self) -> RepositoryResult<Vec<Site>>;
    fn insert(&self, site: Site) -> RepositoryResult<()>;
}

pub trait UserAccountRepository: Send + Sync {
    fn get(&self, id: UserAccountId) -> RepositoryResult<Option<UserAccount>>;
    fn list(&self) -> RepositoryResult<Vec<UserAccount>>;
    fn insert(&self, user: UserAccount) -> RepositoryResult<()>;
    fn update(&self, user: UserAccount) -> RepositoryResult<()>;
}

pub trait BookCopyRepository: Send + Sync {
    fn get(&self, id: BookCopyId) -> RepositoryResult<Option<BookCopy>>;
    fn insert(&self, copy: BookCopy) -> RepositoryResult<()>;
    fn update(&self, copy: BookCopy) -> RepositoryResult<()>;

    /// First available copy of `book_id` shelved at `site_id`, if any.
    fn find_available(&self, book_id: BookId, site_id: SiteId) -> RepositoryResult<Option<BookCopy>>;

    fn list_by_book(&self, book_id: BookId) -> RepositoryResult<Vec<BookCopy>>;
}

pub trait LoanRepository: Send + Sync {
    fn get(&self, id: LoanId) -> RepositoryResult<Option<Loan>>;
    fn insert(&self, loan: Loan) -> RepositoryResult<()>;
    fn update(&self, loan: Loan) -> RepositoryResult<()>;

    /// Open loans held by `user_id`.
    fn find_active_by_user(&self, user_id: UserAccountId) -> RepositoryResult<Vec<Loan>>;
}

/// The full set of repositories a handler may need.
#[derive(Clone)]
pub struct Repositories {
    pub books: Arc<dyn BookRepository>,
    pub sites: Arc<dyn SiteRepository>,
    pub users: Arc<dyn UserAccountRepository>,
    pub copies: Arc<dyn BookCopyRepository>,
    pub loans: Arc<dyn LoanRepository>,
}

impl Repositories {
    /// Wire every port to a fresh in-memory store.
    pub fn in_memory() -> Self {
        let stores = Arc::new(InMemoryRepositories::new());
        Self {
            books: stores.clone(),
            sites: stores.clone(),
            users: stores.clone(),
            copies: stores.clone(),
            loans: stores,
        }
    }
}

impl core::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}
