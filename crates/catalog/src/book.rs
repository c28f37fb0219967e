use serde::{Deserialize, Serialize};

use libris_core::{BookId, DomainResult, Entity};

use crate::required_text;

/// A catalogued title. Physical copies reference it by [`BookId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    isbn: String,
    title: String,
    author: String,
}

impl Book {
    /// Register a book. All text fields are trimmed and must be non-blank.
    pub fn new(id: BookId, isbn: &str, title: &str, author: &str) -> DomainResult<Self> {
        Ok(Self {
            id,
            isbn: required_text(isbn, "isbn")?,
            title: required_text(title, "title")?,
            author: required_text(author, "author")?,
        })
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl Entity for Book {
    type Id = BookId;

    fn id(&self) -> BookId {
        self.id
    }
}
