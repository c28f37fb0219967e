use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use libris_core::{DomainError, DomainResult, Entity};

use crate::account::UserAccount;
use crate::copy::BookCopy;
use crate::loan::Loan;

/// Hard limit on concurrent open loans per account.
pub const MAX_ACTIVE_LOANS: u32 = 5;

/// Expected reasons a borrow request is turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BorrowRejection {
    BorrowLimitReached,
    CopyNotAvailable,
}

impl BorrowRejection {
    pub fn code(&self) -> &'static str {
        match self {
            BorrowRejection::BorrowLimitReached => "BORROW_LIMIT_REACHED",
            BorrowRejection::CopyNotAvailable => "COPY_NOT_AVAILABLE",
        }
    }
}

impl core::fmt::Display for BorrowRejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a borrow attempt: the new loan, or why there is none.
pub type BorrowResult = Result<Loan, BorrowRejection>;

/// Decides whether an account may borrow a copy and, if so, opens the loan.
#[derive(Debug, Default, Clone, Copy)]
pub struct BorrowingService;

impl BorrowingService {
    pub fn new() -> Self {
        Self
    }

    /// Try to lend `copy` to `user`.
    ///
    /// The loan limit is checked before copy availability. Once both pass, a
    /// due date before the borrow date is a caller bug and fails with
    /// `InvalidArgument`. Neither aggregate is touched unless the loan is
    /// granted.
    pub fn try_borrow(
        &self,
        user: &mut UserAccount,
        copy: &mut BookCopy,
        borrowed_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> DomainResult<BorrowResult> {
        if user.active_loans_count() >= MAX_ACTIVE_LOANS {
            return Ok(Err(BorrowRejection::BorrowLimitReached));
        }

        if !copy.is_available() {
            return Ok(Err(BorrowRejection::CopyNotAvailable));
        }

        if due_date < borrowed_at {
            return Err(DomainError::invalid_argument(
                "due date cannot be before borrowed date",
            ));
        }

        let loan = Loan::new(user.id(), copy.id(), borrowed_at, due_date)?;

        copy.mark_as_borrowed()?;
        user.increment_loans()?;

        Ok(Ok(loan))
    }
}
