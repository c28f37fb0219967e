use chrono::{DateTime, Utc};

use libris_core::{DomainError, DomainResult, Money};

use crate::account::UserAccount;
use crate::loan::Loan;

/// Overdue fines: a flat daily rate per calendar day past the due date.
#[derive(Debug, Default, Clone, Copy)]
pub struct PenaltyService;

impl PenaltyService {
    pub fn new() -> Self {
        Self
    }

    /// Fine owed for `loan` as of `now`. Pure; zero when not overdue.
    pub fn calculate_penalty(
        &self,
        loan: &Loan,
        now: DateTime<Utc>,
        daily_rate: Money,
    ) -> DomainResult<Money> {
        if daily_rate.is_negative() {
            return Err(DomainError::invalid_argument(
                "daily rate must be non-negative",
            ));
        }

        let overdue_days = loan.overdue_days(now)?;
        if overdue_days <= 0 {
            return Ok(Money::ZERO);
        }

        daily_rate.checked_mul(overdue_days)
    }

    /// Charge the overdue fine (if any) to `user`. Returns what was charged.
    pub fn apply_overdue_penalty(
        &self,
        user: &mut UserAccount,
        loan: &Loan,
        now: DateTime<Utc>,
        daily_rate: Money,
    ) -> DomainResult<Money> {
        let penalty = self.calculate_penalty(loan, now, daily_rate)?;
        if !penalty.is_positive() {
            return Ok(Money::ZERO);
        }

        user.add_amount(penalty)?;
        Ok(penalty)
    }
}
