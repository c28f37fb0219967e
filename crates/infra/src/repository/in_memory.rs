use std::collections::BTreeMap;
use std::sync::RwLock;

use libris_catalog::{Book, Site};
use libris_circulation::{BookCopy, Loan, UserAccount};
use libris_core::{BookCopyId, BookId, Entity, LoanId, SiteId, UserAccountId};

use super::{
    BookCopyRepository, BookRepository, LoanRepository, RepositoryError, RepositoryResult,
    SiteRepository, UserAccountRepository,
};

/// Id-keyed in-memory store for one entity type, for tests/dev.
///
/// Entries iterate in ascending id order, which for UUIDv7 ids is roughly
/// creation order.
#[derive(Debug)]
pub struct InMemoryStore<V: Entity> {
    kind: &'static str,
    inner: RwLock<BTreeMap<V::Id, V>>,
}

impl<V> InMemoryStore<V>
where
    V: Entity + Clone,
{
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn get(&self, id: V::Id) -> RepositoryResult<Option<V>> {
        let map = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(map.get(&id).cloned())
    }

    pub fn insert(&self, value: V) -> RepositoryResult<()> {
        let mut map = self.inner.write().map_err(|_| self.poisoned())?;
        let id = value.id();
        if map.contains_key(&id) {
            return Err(RepositoryError::Duplicate {
                kind: self.kind,
                id: id.to_string(),
            });
        }
        map.insert(id, value);
        Ok(())
    }

    pub fn update(&self, value: V) -> RepositoryResult<()> {
        let mut map = self.inner.write().map_err(|_| self.poisoned())?;
        match map.get_mut(&value.id()) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(RepositoryError::Missing {
                kind: self.kind,
                id: value.id().to_string(),
            }),
        }
    }

    /// All values matching `predicate`, in id order.
    pub fn filter(&self, predicate: impl Fn(&V) -> bool) -> RepositoryResult<Vec<V>> {
        let map = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(map.values().filter(|v| predicate(v)).cloned().collect())
    }

    /// First value matching `predicate`, in id order.
    pub fn find(&self, predicate: impl Fn(&V) -> bool) -> RepositoryResult<Option<V>> {
        let map = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(map.values().find(|v| predicate(v)).cloned())
    }

    fn poisoned(&self) -> RepositoryError {
        RepositoryError::Unavailable(format!("{} store lock poisoned", self.kind))
    }
}

/// One in-memory store per aggregate, implementing every repository port.
#[derive(Debug)]
pub struct InMemoryRepositories {
    books: InMemoryStore<Book>,
    sites: InMemoryStore<Site>,
    users: InMemoryStore<UserAccount>,
    copies: InMemoryStore<BookCopy>,
    loans: InMemoryStore<Loan>,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self {
            books: InMemoryStore::new("book"),
            sites: InMemoryStore::new("site"),
            users: InMemoryStore::new("user account"),
            copies: InMemoryStore::new("book copy"),
            loans: InMemoryStore::new("loan"),
        }
    }
}

impl Default for InMemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for InMemoryRepositories {
    fn get(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        self.books.get(id)
    }

    fn list(&self) -> RepositoryResult<Vec<Book>> {
        self.books.filter(|_| true)
    }

    fn insert(&self, book: Book) -> RepositoryResult<()> {
        self.books.insert(book)
    }
}

impl SiteRepository for InMemoryRepositories {
    fn get(&self, id: SiteId) -> RepositoryResult<Option<Site>> {
        self.sites.get(id)
    }

    fn list(&self) -> RepositoryResult<Vec<Site>> {
        self.sites.filter(|_| true)
    }

    fn insert(&self, site: Site) -> RepositoryResult<()> {
        self.sites.insert(site)
    }
}

impl UserAccountRepository for InMemoryRepositories {
    fn get(&self, id: UserAccountId) -> RepositoryResult<Option<UserAccount>> {
        self.users.get(id)
    }

    fn list(&self) -> RepositoryResult<Vec<UserAccount>> {
        self.users.filter(|_| true)
    }

    fn insert(&self, user: UserAccount) -> RepositoryResult<()> {
        self.users.insert(user)
    }

    fn update(&self, user: UserAccount) -> RepositoryResult<()> {
        self.users.update(user)
    }
}

impl BookCopyRepository for InMemoryRepositories {
    fn get(&self, id: BookCopyId) -> RepositoryResult<Option<BookCopy>> {
        self.copies.get(id)
    }

    fn insert(&self, copy: BookCopy) -> RepositoryResult<()> {
        self.copies.insert(copy)
    }

    fn update(&self, copy: BookCopy) -> RepositoryResult<()> {
        self.copies.update(copy)
    }

    fn find_available(&self, book_id: BookId, site_id: SiteId) -> RepositoryResult<Option<BookCopy>> {
        self.copies
            .find(|c| c.book_id() == book_id && c.site_id() == site_id && c.is_available())
    }

    fn list_by_book(&self, book_id: BookId) -> RepositoryResult<Vec<BookCopy>> {
        self.copies.filter(|c| c.book_id() == book_id)
    }
}

impl LoanRepository for InMemoryRepositories {
    fn get(&self, id: LoanId) -> RepositoryResult<Option<Loan>> {
        self.loans.get(id)
    }

    fn insert(&self, loan: Loan) -> RepositoryResult<()> {
        self.loans.insert(loan)
    }

    fn update(&self, loan: Loan) -> RepositoryResult<()> {
        self.loans.update(loan)
    }

    fn find_active_by_user(&self, user_id: UserAccountId) -> RepositoryResult<Vec<Loan>> {
        self.loans
            .filter(|l| l.user_account_id() == user_id && l.is_active())
    }
}
