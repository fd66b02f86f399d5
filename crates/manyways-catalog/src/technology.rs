//! Technology registry.
//!
//! Technologies are registered once and then referenced by every entry that
//! uses them. Handles are cheap to clone and compare by display name.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A tool or language whose command-line idiom an entry demonstrates.
#[derive(Debug, Clone)]
pub struct Technology(Arc<TechnologyInfo>);

#[derive(Debug)]
struct TechnologyInfo {
    name: String,
    url: String,
}

impl Technology {
    /// Display name, unique within its registry.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Reference link, if one was registered.
    pub fn url(&self) -> Option<&str> {
        if self.0.url.is_empty() {
            None
        } else {
            Some(&self.0.url)
        }
    }
}

impl PartialEq for Technology {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Technology {}

impl PartialOrd for Technology {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Technology {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when registering technologies.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Technology '{0}' is already registered")]
    DuplicateTechnology(String),

    #[error("Technology name must not be empty")]
    EmptyName,
}

/// The closed set of technologies entries can be attributed to.
#[derive(Debug, Default)]
pub struct TechnologyRegistry {
    /// Registration order
    technologies: Vec<Technology>,

    /// Index into `technologies` by name
    by_name: HashMap<String, usize>,
}

impl TechnologyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a technology and return a handle to it.
    ///
    /// `url` may be empty.
    pub fn register(&mut self, name: &str, url: &str) -> Result<Technology, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateTechnology(name.to_string()));
        }

        let technology = Technology(Arc::new(TechnologyInfo {
            name: name.to_string(),
            url: url.trim().to_string(),
        }));

        self.by_name
            .insert(name.to_string(), self.technologies.len());
        self.technologies.push(technology.clone());

        Ok(technology)
    }

    /// Look up a technology by its display name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&Technology> {
        self.by_name.get(name).map(|&i| &self.technologies[i])
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Technology> {
        self.technologies.iter()
    }

    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }
}
