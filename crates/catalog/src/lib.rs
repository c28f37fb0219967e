//! Catalog domain module: books and the sites that hold their copies.
//!
//! Both are created once and never mutated afterwards. Pure domain logic
//! (no IO, no HTTP, no storage).

pub mod book;
pub mod site;

pub use book::Book;
pub use site::Site;

/// Trim `value`, rejecting blank input with an `InvalidArgument` fault naming `field`.
pub(crate) fn required_text(
    value: &str,
    field: &str,
) -> libris_core::DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(libris_core::DomainError::invalid_argument(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(trimmed.to_string())
}
