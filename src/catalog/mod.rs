//! Catalog of AI use cases.
//!
//! The catalog is an immutable, ordered list of [`UseCase`] records. The
//! built-in dataset ships with the crate; a configuration file may append
//! further entries. Order is significant: ranking ties are broken by catalog
//! position.
//!
//! ```rust
//! use airoi::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 6);
//! assert!(catalog.get("chatbot").is_some());
//! ```

mod builtin;
pub mod use_case;

pub use builtin::CATALOG_VERSION;
pub use use_case::{BenefitDrivers, IndustryFit, UseCase, UseCaseCategory};

use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    version: CATALOG_VERSION.to_string(),
    use_cases: builtin::builtin_use_cases(),
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    version: String,
    use_cases: Vec<UseCase>,
}

impl Catalog {
    /// The built-in dataset.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Built-in dataset followed by `extensions`, in the given order.
    ///
    /// Every extension is validated; an id that is already taken is rejected.
    pub fn with_extensions(extensions: Vec<UseCase>) -> Result<Self> {
        let mut catalog = Self::builtin();
        if extensions.is_empty() {
            return Ok(catalog);
        }

        let mut seen: HashSet<String> = catalog.use_cases.iter().map(|u| u.id.clone()).collect();
        let mut problems = Vec::new();
        for use_case in &extensions {
            if let Err(errs) = use_case.validate() {
                problems.extend(errs);
            }
            if !seen.insert(use_case.id.clone()) {
                problems.push(format!("duplicate use case id '{}'", use_case.id));
            }
        }
        if !problems.is_empty() {
            return Err(Error::Catalog(problems.join("; ")));
        }

        tracing::debug!(count = extensions.len(), "extending built-in catalog");
        catalog.version = format!("{}+{}", CATALOG_VERSION, extensions.len());
        catalog.use_cases.extend(extensions);
        Ok(catalog)
    }

    /// Dataset version. Extended catalogs carry a `+N` suffix.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn get(&self, id: &str) -> Option<&UseCase> {
        self.use_cases.iter().find(|use_case| use_case.id == id)
    }

    /// Look up `id`, failing with [`Error::UnknownUseCase`].
    pub fn require(&self, id: &str) -> Result<&UseCase> {
        self.get(id)
            .ok_or_else(|| Error::UnknownUseCase(id.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UseCase> {
        self.use_cases.iter()
    }

    pub fn use_cases(&self) -> &[UseCase] {
        &self.use_cases
    }

    pub fn len(&self) -> usize {
        self.use_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.use_cases.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a UseCase;
    type IntoIter = std::slice::Iter<'a, UseCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
