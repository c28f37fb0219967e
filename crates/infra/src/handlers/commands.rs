//! Command payloads accepted by [`LibraryHandlers`](super::LibraryHandlers).

use serde::{Deserialize, Serialize};

use libris_core::{BookCopyId, BookId, LoanId, SiteId, UserAccountId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSite {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
}

/// Shelve one more physical copy of a book at a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBookCopy {
    pub book_id: BookId,
    pub site_id: SiteId,
}

/// Lend any available copy of `book_id` held at `site_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub user_id: UserAccountId,
    pub book_id: BookId,
    pub site_id: SiteId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub loan_id: LoanId,
}

/// Ship an available copy of `book_id` from one site towards another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTransfer {
    pub book_id: BookId,
    pub source_site_id: SiteId,
    pub target_site_id: SiteId,
}

/// Land an in-transfer copy at `target_site_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiveTransfer {
    pub book_copy_id: BookCopyId,
    pub target_site_id: SiteId,
}
