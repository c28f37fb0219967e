//! Moving copies between sites.
//!
//! A transfer is two commands. `request_transfer` takes an available copy
//! off the source shelf (`InTransfer`); `receive_transfer` lands it at the
//! target site and makes it available again.

use libris_circulation::{BookCopy, BookCopyStatus};
use libris_core::{BookCopyId, Entity, SiteId};

use super::{HandlerError, HandlerResult, LibraryHandlers, Outcome, ReceiveTransfer, Rejection, RequestTransfer};

impl LibraryHandlers {
    pub fn request_transfer(&self, cmd: RequestTransfer) -> HandlerResult<BookCopyId> {
        if cmd.source_site_id == cmd.target_site_id {
            tracing::info!(site_id = %cmd.source_site_id, "transfer rejected: source equals target");
            return Ok(Outcome::Rejected(Rejection::SourceAndTargetMustDiffer));
        }

        let Some(mut copy) = self
            .repos
            .copies
            .find_available(cmd.book_id, cmd.source_site_id)?
        else {
            tracing::info!(
                book_id = %cmd.book_id,
                source_site_id = %cmd.source_site_id,
                "transfer rejected: no copy at source"
            );
            return Ok(Outcome::Rejected(Rejection::NoCopyAvailableAtSourceSite));
        };

        copy.mark_as_in_transfer()?;
        let copy_id = copy.id();
        self.repos.copies.update(copy)?;

        tracing::info!(
            %copy_id,
            source_site_id = %cmd.source_site_id,
            target_site_id = %cmd.target_site_id,
            "transfer requested"
        );
        Ok(Outcome::Accepted(copy_id))
    }

    /// Land an in-transfer copy at the target site.
    ///
    /// Faults while landing or saving the copy do not propagate: they come
    /// back as `Rejection::Fault` carrying the fault's stable code, and the
    /// stored copy is left as it was.
    pub fn receive_transfer(&self, cmd: ReceiveTransfer) -> HandlerResult<BookCopyId> {
        let Some(mut copy) = self.repos.copies.get(cmd.book_copy_id)? else {
            tracing::info!(copy_id = %cmd.book_copy_id, "receive rejected: unknown copy");
            return Ok(Outcome::Rejected(Rejection::CopyNotFound));
        };
        if copy.status() != BookCopyStatus::InTransfer {
            tracing::info!(copy_id = %cmd.book_copy_id, status = ?copy.status(), "receive rejected: copy not in transfer");
            return Ok(Outcome::Rejected(Rejection::CopyNotInTransfer));
        }

        match self.land(&mut copy, cmd.target_site_id) {
            Ok(()) => {
                tracing::info!(copy_id = %cmd.book_copy_id, target_site_id = %cmd.target_site_id, "transfer received");
                Ok(Outcome::Accepted(cmd.book_copy_id))
            }
            Err(fault) => {
                tracing::warn!(
                    copy_id = %cmd.book_copy_id,
                    target_site_id = %cmd.target_site_id,
                    code = fault.code(),
                    error = %fault,
                    "receive failed"
                );
                Ok(Outcome::Rejected(Rejection::Fault(fault.code())))
            }
        }
    }

    fn land(&self, copy: &mut BookCopy, target_site_id: SiteId) -> Result<(), HandlerError> {
        copy.mark_as_arrived(target_site_id)?;
        self.repos.copies.update(copy.clone())?;
        Ok(())
    }
}
