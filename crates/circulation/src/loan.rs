use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use libris_core::{BookCopyId, DomainError, DomainResult, Entity, LoanId, UserAccountId};

/// A copy lent to an account for a bounded period.
///
/// Overdue checks compare UTC calendar dates only; the time of day of
/// `borrowed_at`, `due_date` and the evaluation instant is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    id: LoanId,
    user_account_id: UserAccountId,
    book_copy_id: BookCopyId,
    borrowed_at: DateTime<Utc>,
    due_date: DateTime<Utc>,
    returned_at: Option<DateTime<Utc>>,
}

impl Loan {
    /// Open a loan. `due_date` must not precede `borrowed_at`.
    pub fn new(
        user_account_id: UserAccountId,
        book_copy_id: BookCopyId,
        borrowed_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if due_date < borrowed_at {
            return Err(DomainError::invalid_argument(
                "due date cannot be before borrowed date",
            ));
        }

        Ok(Self {
            id: LoanId::new(),
            user_account_id,
            book_copy_id,
            borrowed_at,
            due_date,
            returned_at: None,
        })
    }

    pub fn user_account_id(&self) -> UserAccountId {
        self.user_account_id
    }

    pub fn book_copy_id(&self) -> BookCopyId {
        self.book_copy_id
    }

    pub fn borrowed_at(&self) -> DateTime<Utc> {
        self.borrowed_at
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn returned_at(&self) -> Option<DateTime<Utc>> {
        self.returned_at
    }

    /// Whether the loan is still open.
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Whether the loan is (or was, if closed) past its due date.
    ///
    /// A closed loan is judged by its return date, an open one by `now`.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> DomainResult<bool> {
        let reference = self.reference_date(now)?;
        Ok(reference.date_naive() > self.due_date.date_naive())
    }

    /// Whole calendar days past the due date; zero when not overdue.
    pub fn overdue_days(&self, now: DateTime<Utc>) -> DomainResult<i64> {
        if !self.is_overdue(now)? {
            return Ok(0);
        }
        let reference = self.reference_date(now)?;
        Ok((reference.date_naive() - self.due_date.date_naive()).num_days())
    }

    /// Close the loan. A loan can only be closed once.
    pub fn mark_as_returned(&mut self, returned_at: DateTime<Utc>) -> DomainResult<()> {
        if self.returned_at.is_some() {
            return Err(DomainError::invalid_state("loan is already returned"));
        }
        if returned_at < self.borrowed_at {
            return Err(DomainError::invalid_argument(
                "return date cannot be before borrowed date",
            ));
        }
        self.returned_at = Some(returned_at);
        Ok(())
    }

    fn reference_date(&self, now: DateTime<Utc>) -> DomainResult<DateTime<Utc>> {
        if now < self.borrowed_at {
            return Err(DomainError::invalid_argument(
                "now cannot be before borrowed date",
            ));
        }
        Ok(self.returned_at.unwrap_or(now))
    }
}

impl Entity for Loan {
    type Id = LoanId;

    fn id(&self) -> LoanId {
        self.id
    }
}
