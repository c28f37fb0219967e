//! Integration tests for the full lending pipeline.
//!
//! Tests: Command → Handler → Domain services → Repositories
//!
//! Verifies:
//! - A copy's whole life (shelve, lend, return late, transfer) leaves every
//!   aggregate in a consistent state
//! - Rejections never write anything
//! - Contained faults leave the stored copy untouched

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, TimeZone, Utc};

    use libris_circulation::BookCopyStatus;
    use libris_core::{BookCopyId, BookId, ManualClock, Money, SiteId, UserAccountId};

    use crate::config::LendingPolicy;
    use crate::handlers::{
        AddBookCopy, BorrowBook, CreateSite, HandlerError, LibraryHandlers, ReceiveTransfer,
        RegisterBook, RegisterUser, Rejection, RequestTransfer, ReturnBook,
    };
    use crate::repository::Repositories;

    struct Library {
        handlers: LibraryHandlers,
        clock: Arc<ManualClock>,
        book: BookId,
        north: SiteId,
        south: SiteId,
    }

    impl Library {
        fn open(policy: LendingPolicy) -> Self {
            let clock = Arc::new(ManualClock::new(
                Utc.with_ymd_and_hms(2025, 1, 1, 9, 30, 0).unwrap(),
            ));
            let handlers = LibraryHandlers::new(Repositories::in_memory(), clock.clone(), policy);

            let book = *handlers
                .register_book(RegisterBook {
                    isbn: "978-0-14-118776-1".into(),
                    title: "The Trial".into(),
                    author: "Kafka".into(),
                })
                .unwrap()
                .payload()
                .unwrap();
            let north = *handlers
                .create_site(CreateSite { name: "North".into(), address: None })
                .unwrap()
                .payload()
                .unwrap();
            let south = *handlers
                .create_site(CreateSite { name: "South".into(), address: None })
                .unwrap()
                .payload()
                .unwrap();

            Self { handlers, clock, book, north, south }
        }

        fn shelve(&self, site_id: SiteId) -> BookCopyId {
            *self
                .handlers
                .add_book_copy(AddBookCopy { book_id: self.book, site_id })
                .unwrap()
                .payload()
                .unwrap()
        }

        fn member(&self, name: &str) -> UserAccountId {
            *self
                .handlers
                .register_user(RegisterUser { name: name.into() })
                .unwrap()
                .payload()
                .unwrap()
        }

        fn status(&self, copy_id: BookCopyId) -> BookCopyStatus {
            self.handlers
                .repositories()
                .copies
                .get(copy_id)
                .unwrap()
                .unwrap()
                .status()
        }
    }

    #[test]
    fn lend_return_late_then_transfer() {
        let lib = Library::open(LendingPolicy::default());
        let copy = lib.shelve(lib.north);
        let reader = lib.member("Josef");

        let loan_id = *lib
            .handlers
            .borrow_book(BorrowBook { user_id: reader, book_id: lib.book, site_id: lib.north })
            .unwrap()
            .payload()
            .unwrap();
        assert_eq!(lib.status(copy), BookCopyStatus::Borrowed);

        // A lent copy cannot be shipped.
        let blocked = lib
            .handlers
            .request_transfer(RequestTransfer {
                book_id: lib.book,
                source_site_id: lib.north,
                target_site_id: lib.south,
            })
            .unwrap();
        assert_eq!(blocked.rejection(), Some(Rejection::NoCopyAvailableAtSourceSite));

        // Due Jan 15; returned Jan 18 late in the evening: three days.
        lib.clock
            .set(Utc.with_ymd_and_hms(2025, 1, 18, 23, 59, 0).unwrap());
        let penalty = *lib
            .handlers
            .return_book(ReturnBook { loan_id })
            .unwrap()
            .payload()
            .unwrap();
        assert_eq!(penalty, Money::from_minor(150));
        assert_eq!(lib.status(copy), BookCopyStatus::Available);

        let summary = lib.handlers.user_summary(reader).unwrap().unwrap();
        assert_eq!(summary.account.amount_due(), Money::from_minor(150));
        assert_eq!(summary.account.active_loans_count(), 0);
        assert!(summary.active_loans.is_empty());

        let shipped = lib
            .handlers
            .request_transfer(RequestTransfer {
                book_id: lib.book,
                source_site_id: lib.north,
                target_site_id: lib.south,
            })
            .unwrap();
        assert_eq!(shipped.payload(), Some(&copy));
        assert_eq!(lib.status(copy), BookCopyStatus::InTransfer);

        let received = lib
            .handlers
            .receive_transfer(ReceiveTransfer { book_copy_id: copy, target_site_id: lib.south })
            .unwrap();
        assert!(received.is_success());

        let other = lib.member("Leni");
        let at_north = lib
            .handlers
            .borrow_book(BorrowBook { user_id: other, book_id: lib.book, site_id: lib.north })
            .unwrap();
        assert_eq!(at_north.error_code(), Some("NO_COPY_AVAILABLE_AT_SITE"));
        let at_south = lib
            .handlers
            .borrow_book(BorrowBook { user_id: other, book_id: lib.book, site_id: lib.south })
            .unwrap();
        assert!(at_south.is_success());
    }

    #[test]
    fn five_loans_then_the_limit() {
        let lib = Library::open(LendingPolicy::default());
        for _ in 0..6 {
            lib.shelve(lib.north);
        }
        let reader = lib.member("K.");
        let borrow = || {
            lib.handlers
                .borrow_book(BorrowBook { user_id: reader, book_id: lib.book, site_id: lib.north })
                .unwrap()
        };

        for expected in 1..=5 {
            assert!(borrow().is_success());
            let summary = lib.handlers.user_summary(reader).unwrap().unwrap();
            assert_eq!(summary.account.active_loans_count(), expected);
        }

        let sixth = borrow();
        assert_eq!(sixth.error_code(), Some("BORROW_LIMIT_REACHED"));

        // The sixth copy stays on the shelf.
        let available = lib
            .handlers
            .repositories()
            .copies
            .find_available(lib.book, lib.north)
            .unwrap();
        assert!(available.is_some());
    }

    #[test]
    fn double_return_surfaces_as_a_fault() {
        let lib = Library::open(LendingPolicy::default());
        lib.shelve(lib.north);
        let reader = lib.member("Frieda");
        let loan_id = *lib
            .handlers
            .borrow_book(BorrowBook { user_id: reader, book_id: lib.book, site_id: lib.north })
            .unwrap()
            .payload()
            .unwrap();

        assert!(lib.handlers.return_book(ReturnBook { loan_id }).unwrap().is_success());
        let err = lib.handlers.return_book(ReturnBook { loan_id }).unwrap_err();

        assert_eq!(err.code(), "INVALID_STATE");
        assert!(matches!(err, HandlerError::Domain(_)));
        assert!(err.to_string().contains("already returned"));
    }

    #[test]
    fn receive_at_nil_site_leaves_the_copy_in_transit() {
        let lib = Library::open(LendingPolicy::default());
        let copy = lib.shelve(lib.north);
        let shipped = lib
            .handlers
            .request_transfer(RequestTransfer {
                book_id: lib.book,
                source_site_id: lib.north,
                target_site_id: lib.south,
            })
            .unwrap();
        assert!(shipped.is_success());

        let outcome = lib
            .handlers
            .receive_transfer(ReceiveTransfer { book_copy_id: copy, target_site_id: SiteId::nil() })
            .unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.error_code(), Some("INVALID_ARGUMENT"));
        assert_eq!(lib.status(copy), BookCopyStatus::InTransfer);

        // A second, valid attempt still lands it.
        let retry = lib
            .handlers
            .receive_transfer(ReceiveTransfer { book_copy_id: copy, target_site_id: lib.south })
            .unwrap();
        assert!(retry.is_success());
    }

    #[test]
    fn transfer_to_the_same_site_is_refused() {
        let lib = Library::open(LendingPolicy::default());
        let copy = lib.shelve(lib.north);

        let outcome = lib
            .handlers
            .request_transfer(RequestTransfer {
                book_id: lib.book,
                source_site_id: lib.north,
                target_site_id: lib.north,
            })
            .unwrap();

        assert_eq!(outcome.error_code(), Some("SOURCE_AND_TARGET_MUST_DIFFER"));
        assert_eq!(lib.status(copy), BookCopyStatus::Available);
    }

    #[test]
    fn policy_drives_due_date_and_rate() {
        let policy = LendingPolicy {
            loan_period: Duration::days(7),
            daily_penalty_rate: Money::from_minor(25),
        };
        let lib = Library::open(policy);
        lib.shelve(lib.south);
        let reader = lib.member("Block");
        let loan_id = *lib
            .handlers
            .borrow_book(BorrowBook { user_id: reader, book_id: lib.book, site_id: lib.south })
            .unwrap()
            .payload()
            .unwrap();

        let loan = lib.handlers.repositories().loans.get(loan_id).unwrap().unwrap();
        assert_eq!(loan.due_date(), Utc.with_ymd_and_hms(2025, 1, 8, 9, 30, 0).unwrap());

        lib.clock.advance(Duration::days(11));
        let penalty = lib.handlers.return_book(ReturnBook { loan_id }).unwrap();
        assert_eq!(penalty.payload(), Some(&Money::from_minor(100)));
    }
}
