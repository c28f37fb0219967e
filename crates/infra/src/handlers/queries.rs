//! Read-side lookups over the stores. Nothing here writes.

use libris_catalog::{Book, Site};
use libris_circulation::{BookCopy, UserAccount};
use libris_core::BookId;

use super::{HandlerError, LibraryHandlers};

impl LibraryHandlers {
    pub fn list_books(&self) -> Result<Vec<Book>, HandlerError> {
        Ok(self.repos.books.list()?)
    }

    pub fn list_sites(&self) -> Result<Vec<Site>, HandlerError> {
        Ok(self.repos.sites.list()?)
    }

    pub fn list_users(&self) -> Result<Vec<UserAccount>, HandlerError> {
        Ok(self.repos.users.list()?)
    }

    /// Every copy of a book across all sites, or `None` for an unknown book.
    pub fn copies_of_book(&self, book_id: BookId) -> Result<Option<Vec<BookCopy>>, HandlerError> {
        if self.repos.books.get(book_id)?.is_none() {
            return Ok(None);
        }
        Ok(Some(self.repos.copies.list_by_book(book_id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::handlers;
    use crate::handlers::{AddBookCopy, CreateSite, RegisterBook, RegisterUser};
    use libris_circulation::BookCopyStatus;
    use libris_core::Entity;

    #[test]
    fn empty_library_lists_nothing() {
        let (h, _) = handlers();
        assert!(h.list_books().unwrap().is_empty());
        assert!(h.list_sites().unwrap().is_empty());
        assert!(h.list_users().unwrap().is_empty());
        assert_eq!(h.copies_of_book(BookId::new()).unwrap(), None);
    }

    #[test]
    fn copies_are_listed_per_book_across_sites() {
        let (h, _) = handlers();
        let book_id = *h
            .register_book(RegisterBook {
                isbn: "978-3".into(),
                title: "Pedro Paramo".into(),
                author: "Rulfo".into(),
            })
            .unwrap()
            .payload()
            .unwrap();
        let other_book = *h
            .register_book(RegisterBook {
                isbn: "978-4".into(),
                title: "Aura".into(),
                author: "Fuentes".into(),
            })
            .unwrap()
            .payload()
            .unwrap();
        let mut shelved = Vec::new();
        for name in ["North", "South"] {
            let site_id = *h
                .create_site(CreateSite { name: name.into(), address: None })
                .unwrap()
                .payload()
                .unwrap();
            shelved.push(*h.add_book_copy(AddBookCopy { book_id, site_id }).unwrap().payload().unwrap());
        }
        assert!(h.register_user(RegisterUser { name: "Susana".into() }).unwrap().is_success());

        let copies = h.copies_of_book(book_id).unwrap().unwrap();
        let mut ids: Vec<_> = copies.iter().map(|c| c.id()).collect();
        ids.sort();
        shelved.sort();
        assert_eq!(ids, shelved);
        assert!(copies.iter().all(|c| c.status() == BookCopyStatus::Available));

        assert_eq!(h.copies_of_book(other_book).unwrap(), Some(Vec::new()));
        assert_eq!(h.list_books().unwrap().len(), 2);
        assert_eq!(h.list_sites().unwrap().len(), 2);
        assert_eq!(h.list_users().unwrap().len(), 1);
    }
}
