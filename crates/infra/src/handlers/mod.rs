//! Command handlers (application-level orchestration).
//!
//! Each handler follows the same pipeline:
//!
//! ```text
//! Command
//!   ↓
//! 1. Load the aggregates it names from their repositories
//!   ↓
//! 2. Check business preconditions (missing entities, availability, limits)
//!   ↓
//! 3. Mutate through the domain API (entities and services)
//!   ↓
//! 4. Write every touched aggregate back
//! ```
//!
//! Two failure channels come out of a handler:
//!
//! - **Rejections** are expected business outcomes (`BOOK_NOT_FOUND`,
//!   `BORROW_LIMIT_REACHED`, ...). They are returned as
//!   `Ok(Outcome::Rejected(..))` and carry a stable string code.
//! - **Faults** are broken invariants or storage failures. They propagate as
//!   `Err(HandlerError)`. The one exception is `receive_transfer`, which
//!   contains faults raised while landing the copy and reports them as a
//!   rejection with the fault's code.
//!
//! There is no concurrency control here: two requests racing on the same
//! aggregate are not coordinated.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use libris_circulation::{BorrowRejection, BorrowingService, Loan, ReturnService, UserAccount};
use libris_core::{Clock, DomainError, UserAccountId};

use crate::config::LendingPolicy;
use crate::repository::{Repositories, RepositoryError};

pub mod catalog;
pub mod commands;
pub mod lending;
pub mod queries;
pub mod transfer;

pub use commands::{
    AddBookCopy, BorrowBook, CreateSite, ReceiveTransfer, RegisterBook, RegisterUser, RequestTransfer,
    ReturnBook,
};

/// A business rejection with a stable, machine-readable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidBookData,
    InvalidSiteName,
    InvalidUserName,
    BookNotFound,
    SiteNotFound,
    UserNotFound,
    LoanNotFound,
    CopyNotFound,
    NoCopyAvailableAtSite,
    NoCopyAvailableAtSourceSite,
    BorrowLimitReached,
    CopyNotAvailable,
    SourceAndTargetMustDiffer,
    CopyNotInTransfer,
    /// A fault that was contained rather than propagated; holds the fault's code.
    Fault(&'static str),
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::InvalidBookData => "INVALID_BOOK_DATA",
            Rejection::InvalidSiteName => "INVALID_SITE_NAME",
            Rejection::InvalidUserName => "INVALID_USER_NAME",
            Rejection::BookNotFound => "BOOK_NOT_FOUND",
            Rejection::SiteNotFound => "SITE_NOT_FOUND",
            Rejection::UserNotFound => "USER_NOT_FOUND",
            Rejection::LoanNotFound => "LOAN_NOT_FOUND",
            Rejection::CopyNotFound => "COPY_NOT_FOUND",
            Rejection::NoCopyAvailableAtSite => "NO_COPY_AVAILABLE_AT_SITE",
            Rejection::NoCopyAvailableAtSourceSite => "NO_COPY_AVAILABLE_AT_SOURCE_SITE",
            Rejection::BorrowLimitReached => "BORROW_LIMIT_REACHED",
            Rejection::CopyNotAvailable => "COPY_NOT_AVAILABLE",
            Rejection::SourceAndTargetMustDiffer => "SOURCE_AND_TARGET_MUST_DIFFER",
            Rejection::CopyNotInTransfer => "COPY_NOT_IN_TRANSFER",
            Rejection::Fault(code) => code,
        }
    }

    /// True for the `*_NOT_FOUND` family.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Rejection::BookNotFound
                | Rejection::SiteNotFound
                | Rejection::UserNotFound
                | Rejection::LoanNotFound
                | Rejection::CopyNotFound
        )
    }
}

impl core::fmt::Display for Rejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<BorrowRejection> for Rejection {
    fn from(value: BorrowRejection) -> Self {
        match value {
            BorrowRejection::BorrowLimitReached => Rejection::BorrowLimitReached,
            BorrowRejection::CopyNotAvailable => Rejection::CopyNotAvailable,
        }
    }
}

/// Result of a handler that ran to completion.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Accepted(T),
    Rejected(Rejection),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(rejection) => Some(rejection.code()),
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Outcome::Accepted(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

/// A fault raised while handling a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl HandlerError {
    /// Stable code of the underlying fault.
    pub fn code(&self) -> &'static str {
        match self {
            HandlerError::Domain(err) => err.code(),
            HandlerError::Repository(err) => err.code(),
        }
    }
}

pub type HandlerResult<T> = Result<Outcome<T>, HandlerError>;

/// Read view of a user account with its open loans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub account: UserAccount,
    pub active_loans: Vec<Loan>,
}

/// Entry point to every command handler, sharing one set of repositories,
/// one clock, and one lending policy.
#[derive(Clone)]
pub struct LibraryHandlers {
    repos: Repositories,
    clock: Arc<dyn Clock>,
    policy: LendingPolicy,
    borrowing: BorrowingService,
    returns: ReturnService,
}

impl LibraryHandlers {
    pub fn new(repos: Repositories, clock: Arc<dyn Clock>, policy: LendingPolicy) -> Self {
        Self {
            repos,
            clock,
            policy,
            borrowing: BorrowingService::new(),
            returns: ReturnService::default(),
        }
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repos
    }

    pub fn policy(&self) -> LendingPolicy {
        self.policy
    }

    /// Account state plus open loans, or `None` for an unknown id.
    pub fn user_summary(&self, user_id: UserAccountId) -> Result<Option<UserSummary>, HandlerError> {
        let Some(account) = self.repos.users.get(user_id)? else {
            return Ok(None);
        };
        let active_loans = self.repos.loans.find_active_by_user(user_id)?;
        Ok(Some(UserSummary {
            account,
            active_loans,
        }))
    }
}

impl core::fmt::Debug for LibraryHandlers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LibraryHandlers")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
