use chrono::{DateTime, Utc};

use libris_core::{DomainError, DomainResult, Money};

use crate::account::UserAccount;
use crate::loan::Loan;
use crate::penalty::PenaltyService;

/// Closes a loan and settles the borrower's side of it.
///
/// The copy itself is not touched here: putting it back on the shelf
/// (`BookCopy::mark_as_returned`) is the caller's second step.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReturnService {
    penalties: PenaltyService,
}

impl ReturnService {
    pub fn new(penalties: PenaltyService) -> Self {
        Self { penalties }
    }

    /// Return `loan` on `return_date`, charging any overdue fine to `user`
    /// and releasing one of their loan slots. Returns the fine charged.
    ///
    /// Returning an already-closed loan is an `InvalidState` fault.
    pub fn return_book(
        &self,
        user: &mut UserAccount,
        loan: &mut Loan,
        return_date: DateTime<Utc>,
        daily_rate: Money,
    ) -> DomainResult<Money> {
        if !loan.is_active() {
            return Err(DomainError::invalid_state("loan is already returned"));
        }
        if user.active_loans_count() == 0 {
            return Err(DomainError::invalid_state("user has no active loans"));
        }

        // Settle on a staged account so a failed charge leaves the loan open.
        let mut settled = user.clone();
        let penalty = self
            .penalties
            .apply_overdue_penalty(&mut settled, loan, return_date, daily_rate)?;
        settled.decrement_loans()?;

        loan.mark_as_returned(return_date)?;
        *user = settled;

        Ok(penalty)
    }
}
