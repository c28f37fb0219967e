//! Strongly-typed identifiers used across the domain.
//!
//! Every aggregate gets its own id type so a `LoanId` can never be passed
//! where a `BookCopyId` is expected. The nil UUID stands for "empty".

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(Uuid);

        impl $t {
            /// Fresh time-ordered (v7) identifier.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// The empty identifier.
            pub const fn nil() -> Self {
                Self(Uuid::nil())
            }

            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl From<Uuid> for $t {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$t> for Uuid {
            fn from(id: $t) -> Self {
                id.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(raw.trim())
                    .map(Self)
                    .map_err(|err| DomainError::invalid_id(format!("{}: {err}", stringify!($t))))
            }
        }
    };
}

uuid_id! {
    /// Identifier of a catalogued book (title-level, not a physical copy).
    BookId
}

uuid_id! {
    /// Identifier of a library site.
    SiteId
}

uuid_id! {
    /// Identifier of a physical copy of a book.
    BookCopyId
}

uuid_id! {
    /// Identifier of a borrower account.
    UserAccountId
}

uuid_id! {
    LoanId
}
