use serde::{Deserialize, Serialize};

use libris_core::{BookCopyId, BookId, DomainError, DomainResult, Entity, SiteId};

/// Copy availability lifecycle.
///
/// ```text
/// Available --borrow--> Borrowed --return--> Available
/// Available --request transfer--> InTransfer --arrive--> Available
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookCopyStatus {
    Available,
    Borrowed,
    InTransfer,
}

/// A physical copy of a [`BookId`] located at a [`SiteId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCopy {
    id: BookCopyId,
    book_id: BookId,
    site_id: SiteId,
    status: BookCopyStatus,
}

impl BookCopy {
    /// Shelve a new copy. It starts `Available` with a fresh id.
    pub fn new(book_id: BookId, site_id: SiteId) -> DomainResult<Self> {
        if book_id.is_nil() {
            return Err(DomainError::invalid_argument("book id cannot be empty"));
        }
        ensure_site(site_id)?;

        Ok(Self {
            id: BookCopyId::new(),
            book_id,
            site_id,
            status: BookCopyStatus::Available,
        })
    }

    pub fn book_id(&self) -> BookId {
        self.book_id
    }

    pub fn site_id(&self) -> SiteId {
        self.site_id
    }

    pub fn status(&self) -> BookCopyStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == BookCopyStatus::Available
    }

    pub fn mark_as_borrowed(&mut self) -> DomainResult<()> {
        self.transition(
            BookCopyStatus::Available,
            BookCopyStatus::Borrowed,
            "copy must be available to be borrowed",
        )
    }

    pub fn mark_as_returned(&mut self) -> DomainResult<()> {
        self.transition(
            BookCopyStatus::Borrowed,
            BookCopyStatus::Available,
            "copy must be borrowed to be returned",
        )
    }

    pub fn mark_as_in_transfer(&mut self) -> DomainResult<()> {
        self.transition(
            BookCopyStatus::Available,
            BookCopyStatus::InTransfer,
            "copy must be available to be put in transfer",
        )
    }

    /// Complete a transfer: the copy becomes available at `new_site_id`.
    pub fn mark_as_arrived(&mut self, new_site_id: SiteId) -> DomainResult<()> {
        if self.status != BookCopyStatus::InTransfer {
            return Err(DomainError::invalid_state(
                "copy must be in transfer to arrive at a site",
            ));
        }
        ensure_site(new_site_id)?;

        self.site_id = new_site_id;
        self.status = BookCopyStatus::Available;
        Ok(())
    }

    /// Reassign the copy's site regardless of status.
    pub fn move_to_site(&mut self, new_site_id: SiteId) -> DomainResult<()> {
        ensure_site(new_site_id)?;
        self.site_id = new_site_id;
        Ok(())
    }

    fn transition(
        &mut self,
        from: BookCopyStatus,
        to: BookCopyStatus,
        violation: &'static str,
    ) -> DomainResult<()> {
        if self.status != from {
            return Err(DomainError::invalid_state(violation));
        }
        self.status = to;
        Ok(())
    }
}

impl Entity for BookCopy {
    type Id = BookCopyId;

    fn id(&self) -> BookCopyId {
        self.id
    }
}

fn ensure_site(site_id: SiteId) -> DomainResult<()> {
    if site_id.is_nil() {
        return Err(DomainError::invalid_argument("site id cannot be empty"));
    }
    Ok(())
}
