//! Template fragments for manyways.
//!
//! Loads the fixed set of named fragments and composes them with strict
//! placeholder substitution. Escaping is carried by the binding value
//! types rather than done by the template engine.

pub mod composer;
pub mod defaults;
pub mod escape;
pub mod fragments;

pub use composer::{compose, ComposeError, Composer};
pub use escape::{Escaped, Markup};
pub use fragments::{
    DirectoryStore, Fragment, FragmentError, FragmentStore, MemoryStore, FRAGMENT_SUFFIX,
};
