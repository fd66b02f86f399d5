//! Catalog model and rendering for manyways.
//!
//! A [`Catalog`] holds task groups, each holding entries that solve the same
//! task with different technologies. Rendering sorts every group's entries,
//! escapes all authored text and composes the `entry`, `group`, `toc_entry`
//! and `page` fragments into a single HTML document.

pub mod bindings;
pub mod catalog;
pub mod entry;
pub mod group;
pub mod output;
pub mod source;
pub mod technology;

pub use catalog::{Catalog, RenderError};
pub use entry::{Entry, EntryError};
pub use group::TaskGroup;
pub use output::{write_document, WriteError};
pub use source::{load_catalog, parse_catalog, LoadedCatalog, SourceError};
pub use technology::{RegistryError, Technology, TechnologyRegistry};
