//! Personalization option catalogs.
//!
//! A [`Catalog`] is an immutable, ordered list of options. Sections hold a
//! handle to a catalog rather than a copy, so the two default sections share
//! the exact same entries.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One personalizable data category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizeOption {
    /// Label shown next to the checkbox (not required to be unique)
    pub name: String,
    /// Disabled options can never be checked
    #[serde(default)]
    pub disabled: bool,
}

impl PersonalizeOption {
    pub fn new(name: impl Into<String>, disabled: bool) -> Self {
        Self {
            name: name.into(),
            disabled,
        }
    }
}

/// Shared, read-only option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Arc<[PersonalizeOption]>);

impl Catalog {
    pub fn new(options: Vec<PersonalizeOption>) -> Self {
        Self(options.into())
    }

    /// The built-in six entry catalog
    pub fn personalization() -> Self {
        Self::new(vec![
            PersonalizeOption::new("LinkedIn Bio", false),
            PersonalizeOption::new("List of past jobs", false),
            PersonalizeOption::new("Years of experience", false),
            PersonalizeOption::new("Current job description", true),
            PersonalizeOption::new("Current experience", false),
            PersonalizeOption::new("Current job specialities", true),
        ])
    }

    pub fn options(&self) -> &[PersonalizeOption] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&PersonalizeOption> {
        self.0.get(index)
    }

    /// Whether two handles point at the same underlying list
    #[cfg(test)]
    pub fn shares_with(&self, other: &Catalog) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A titled group of options rendered as one grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub catalog: Catalog,
}

impl Section {
    pub fn new(title: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            title: title.into(),
            catalog,
        }
    }

    /// "Profile:" and "Account:", both backed by one shared catalog
    pub fn defaults() -> Vec<Section> {
        let catalog = Catalog::personalization();
        vec![
            Section::new("Profile:", catalog.clone()),
            Section::new("Account:", catalog),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = Catalog::personalization();
        let names: Vec<&str> = catalog.options().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "LinkedIn Bio",
                "List of past jobs",
                "Years of experience",
                "Current job description",
                "Current experience",
                "Current job specialities",
            ]
        );
    }

    #[test]
    fn test_default_catalog_disabled_entries() {
        let catalog = Catalog::personalization();
        let disabled: Vec<usize> = catalog
            .options()
            .iter()
            .enumerate()
            .filter(|(_, o)| o.disabled)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(disabled, [4, 6]);
    }

    #[test]
    fn test_default_sections_share_catalog() {
        let sections = Section::defaults();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Profile:");
        assert_eq!(sections[1].title, "Account:");
        assert!(sections[0].catalog.shares_with(&sections[1].catalog));
    }

    #[test]
    fn test_separately_built_catalogs_do_not_share() {
        let a = Catalog::personalization();
        let b = Catalog::personalization();
        assert_eq!(a, b);
        assert!(!a.shares_with(&b));
    }
}
