use serde::{Deserialize, Serialize};

use libris_core::{DomainError, DomainResult, Entity, Money, UserAccountId};

/// A borrower: how many loans they hold and how much they owe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserAccountId,
    name: String,
    active_loans_count: u32,
    amount_due: Money,
}

impl UserAccount {
    /// Open a fresh account with no loans and nothing due.
    pub fn new(id: UserAccountId, name: &str) -> DomainResult<Self> {
        Self::with_balance(id, name, 0, Money::ZERO)
    }

    /// Build an account with an existing loan count and balance.
    pub fn with_balance(
        id: UserAccountId,
        name: &str,
        active_loans_count: u32,
        amount_due: Money,
    ) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_argument("name cannot be empty"));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            active_loans_count,
            amount_due,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn active_loans_count(&self) -> u32 {
        self.active_loans_count
    }

    pub fn amount_due(&self) -> Money {
        self.amount_due
    }

    pub fn increment_loans(&mut self) -> DomainResult<()> {
        self.active_loans_count = self
            .active_loans_count
            .checked_add(1)
            .ok_or_else(|| DomainError::invalid_state("active loan count overflow"))?;
        Ok(())
    }

    pub fn decrement_loans(&mut self) -> DomainResult<()> {
        self.active_loans_count = self
            .active_loans_count
            .checked_sub(1)
            .ok_or_else(|| DomainError::invalid_state("user has no active loans"))?;
        Ok(())
    }

    /// Charge an amount to the account.
    pub fn add_amount(&mut self, amount: Money) -> DomainResult<()> {
        self.amount_due = self.amount_due.checked_add(amount)?;
        Ok(())
    }

    /// Record a payment. Overpaying leaves a negative balance (a credit);
    /// this is accepted as-is.
    pub fn pay_amount(&mut self, amount: Money) -> DomainResult<()> {
        self.amount_due = self.amount_due.checked_sub(amount)?;
        Ok(())
    }
}

impl Entity for UserAccount {
    type Id = UserAccountId;

    fn id(&self) -> UserAccountId {
        self.id
    }
}
