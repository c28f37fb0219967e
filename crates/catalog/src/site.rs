use serde::{Deserialize, Serialize};

use libris_core::{DomainResult, Entity, SiteId};

use crate::required_text;

/// A physical library location holding book copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    id: SiteId,
    name: String,
    address: Option<String>,
}

impl Site {
    /// Create a site. The name is trimmed and must be non-blank; the address
    /// is kept as given.
    pub fn new(id: SiteId, name: &str, address: Option<String>) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: required_text(name, "site name")?,
            address,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

impl Entity for Site {
    type Id = SiteId;

    fn id(&self) -> SiteId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_core::DomainError;

    #[test]
    fn new_trims_name_and_keeps_address() {
        let site = Site::new(SiteId::new(), "  Central Library ", Some("1 Main St".to_string())).unwrap();
        assert_eq!(site.name(), "Central Library");
        assert_eq!(site.address(), Some("1 Main St"));
    }

    #[test]
    fn address_is_optional() {
        let site = Site::new(SiteId::new(), "Annex", None).unwrap();
        assert_eq!(site.address(), None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Site::new(SiteId::new(), " \t ", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }
}
