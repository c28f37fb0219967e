//! `libris-core`: domain foundation building blocks for the lending system.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the fault model, money and time.

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{BookCopyId, BookId, LoanId, SiteId, UserAccountId};
pub use value_object::{Money, ValueObject};
