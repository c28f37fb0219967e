use libris_core::{DomainError, Entity, LoanId, Money};

use super::{BorrowBook, HandlerResult, LibraryHandlers, Outcome, Rejection, ReturnBook};

impl LibraryHandlers {
    /// Lend the first available copy of the book at the requested site.
    ///
    /// The loan runs from the clock's current instant for the configured
    /// loan period. On success the copy, the user, and the new loan are all
    /// written back.
    pub fn borrow_book(&self, cmd: BorrowBook) -> HandlerResult<LoanId> {
        let Some(mut user) = self.repos.users.get(cmd.user_id)? else {
            tracing::info!(user_id = %cmd.user_id, "borrow rejected: unknown user");
            return Ok(Outcome::Rejected(Rejection::UserNotFound));
        };
        let Some(mut copy) = self.repos.copies.find_available(cmd.book_id, cmd.site_id)? else {
            tracing::info!(book_id = %cmd.book_id, site_id = %cmd.site_id, "borrow rejected: no copy on the shelf");
            return Ok(Outcome::Rejected(Rejection::NoCopyAvailableAtSite));
        };

        let borrowed_at = self.clock.now();
        let due_date = borrowed_at
            .checked_add_signed(self.policy.loan_period)
            .ok_or_else(|| DomainError::invalid_argument("due date is out of range"))?;

        let loan = match self
            .borrowing
            .try_borrow(&mut user, &mut copy, borrowed_at, due_date)?
        {
            Ok(loan) => loan,
            Err(rejection) => {
                tracing::warn!(
                    user_id = %cmd.user_id,
                    copy_id = %copy.id(),
                    code = rejection.code(),
                    "borrow rejected"
                );
                return Ok(Outcome::Rejected(rejection.into()));
            }
        };

        let loan_id = loan.id();
        self.repos.copies.update(copy)?;
        self.repos.users.update(user)?;
        self.repos.loans.insert(loan)?;

        tracing::info!(%loan_id, user_id = %cmd.user_id, %due_date, "book borrowed");
        Ok(Outcome::Accepted(loan_id))
    }

    /// Close a loan, charge any overdue fine, and put the copy back on the
    /// shelf. Returns the fine charged.
    ///
    /// Returning a loan twice is a fault (`InvalidState`), not a rejection.
    pub fn return_book(&self, cmd: ReturnBook) -> HandlerResult<Money> {
        let Some(mut loan) = self.repos.loans.get(cmd.loan_id)? else {
            tracing::info!(loan_id = %cmd.loan_id, "return rejected: unknown loan");
            return Ok(Outcome::Rejected(Rejection::LoanNotFound));
        };
        let Some(mut user) = self.repos.users.get(loan.user_account_id())? else {
            tracing::warn!(loan_id = %cmd.loan_id, user_id = %loan.user_account_id(), "return rejected: borrower missing");
            return Ok(Outcome::Rejected(Rejection::UserNotFound));
        };
        let Some(mut copy) = self.repos.copies.get(loan.book_copy_id())? else {
            tracing::warn!(loan_id = %cmd.loan_id, copy_id = %loan.book_copy_id(), "return rejected: copy missing");
            return Ok(Outcome::Rejected(Rejection::CopyNotFound));
        };

        let returned_at = self.clock.now();
        let penalty = self.returns.return_book(
            &mut user,
            &mut loan,
            returned_at,
            self.policy.daily_penalty_rate,
        )?;
        copy.mark_as_returned()?;

        self.repos.loans.update(loan)?;
        self.repos.users.update(user)?;
        self.repos.copies.update(copy)?;

        tracing::info!(loan_id = %cmd.loan_id, %penalty, "book returned");
        Ok(Outcome::Accepted(penalty))
    }
}
