//! Circulation domain module: copies, borrower accounts, loans, and the
//! services that move them through their lifecycle.
//!
//! Each aggregate is independent and refers to the others by id only. The
//! services here take `&mut` borrows of exactly the aggregates they change;
//! persisting the result is the caller's job.

pub mod account;
pub mod borrowing;
pub mod copy;
pub mod loan;
pub mod penalty;
pub mod returns;

pub use account::UserAccount;
pub use borrowing::{BorrowRejection, BorrowResult, BorrowingService, MAX_ACTIVE_LOANS};
pub use copy::{BookCopy, BookCopyStatus};
pub use loan::Loan;
pub use penalty::PenaltyService;
pub use returns::ReturnService;
