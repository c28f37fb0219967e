use libris_catalog::{Book, Site};
use libris_circulation::{BookCopy, UserAccount};
use libris_core::{BookCopyId, BookId, DomainError, Entity, SiteId, UserAccountId};

use super::{AddBookCopy, CreateSite, HandlerResult, LibraryHandlers, Outcome, Rejection, RegisterBook, RegisterUser};

impl LibraryHandlers {
    pub fn register_book(&self, cmd: RegisterBook) -> HandlerResult<BookId> {
        let book = match Book::new(BookId::new(), &cmd.isbn, &cmd.title, &cmd.author) {
            Ok(book) => book,
            Err(DomainError::InvalidArgument(reason)) => {
                tracing::info!(%reason, "book registration rejected");
                return Ok(Outcome::Rejected(Rejection::InvalidBookData));
            }
            Err(err) => return Err(err.into()),
        };

        let book_id = book.id();
        self.repos.books.insert(book)?;
        tracing::info!(%book_id, isbn = %cmd.isbn, "book registered");
        Ok(Outcome::Accepted(book_id))
    }

    pub fn create_site(&self, cmd: CreateSite) -> HandlerResult<SiteId> {
        let site = match Site::new(SiteId::new(), &cmd.name, cmd.address) {
            Ok(site) => site,
            Err(DomainError::InvalidArgument(reason)) => {
                tracing::info!(%reason, "site creation rejected");
                return Ok(Outcome::Rejected(Rejection::InvalidSiteName));
            }
            Err(err) => return Err(err.into()),
        };

        let site_id = site.id();
        self.repos.sites.insert(site)?;
        tracing::info!(%site_id, "site created");
        Ok(Outcome::Accepted(site_id))
    }

    pub fn register_user(&self, cmd: RegisterUser) -> HandlerResult<UserAccountId> {
        let user = match UserAccount::new(UserAccountId::new(), &cmd.name) {
            Ok(user) => user,
            Err(DomainError::InvalidArgument(reason)) => {
                tracing::info!(%reason, "user registration rejected");
                return Ok(Outcome::Rejected(Rejection::InvalidUserName));
            }
            Err(err) => return Err(err.into()),
        };

        let user_id = user.id();
        self.repos.users.insert(user)?;
        tracing::info!(%user_id, "user registered");
        Ok(Outcome::Accepted(user_id))
    }

    pub fn add_book_copy(&self, cmd: AddBookCopy) -> HandlerResult<BookCopyId> {
        if self.repos.books.get(cmd.book_id)?.is_none() {
            tracing::info!(book_id = %cmd.book_id, "copy rejected: unknown book");
            return Ok(Outcome::Rejected(Rejection::BookNotFound));
        }
        if self.repos.sites.get(cmd.site_id)?.is_none() {
            tracing::info!(site_id = %cmd.site_id, "copy rejected: unknown site");
            return Ok(Outcome::Rejected(Rejection::SiteNotFound));
        }

        let copy = BookCopy::new(cmd.book_id, cmd.site_id)?;
        let copy_id = copy.id();
        self.repos.copies.insert(copy)?;
        tracing::info!(%copy_id, book_id = %cmd.book_id, site_id = %cmd.site_id, "copy shelved");
        Ok(Outcome::Accepted(copy_id))
    }
}
