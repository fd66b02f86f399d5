//! Placeholder bindings for each fragment.
//!
//! Each struct is exactly the set of values its fragment may reference.
//! Text written by catalog authors is always [`Escaped`]; composed fragment
//! output is [`Markup`]; derived numbers are plain integers.

use serde::Serialize;

use manyways_templates::{Escaped, Markup};

use crate::entry::Entry;
use crate::group::TaskGroup;

/// Bindings of the `entry` fragment.
#[derive(Debug, Serialize)]
pub struct EntryBindings {
    pub technology: Escaped,
    pub command: Escaped,
    pub comment: Escaped,
    /// Character count of the unescaped command
    pub char_count: usize,
}

impl From<&Entry> for EntryBindings {
    fn from(entry: &Entry) -> Self {
        Self {
            technology: Escaped::new(entry.technology().name()),
            command: Escaped::new(entry.command()),
            comment: Escaped::new(entry.comment()),
            char_count: entry.char_count(),
        }
    }
}

/// Bindings of the `group` fragment.
#[derive(Debug, Serialize)]
pub struct GroupBindings {
    pub title: Escaped,
    pub id: Escaped,
    pub task: Escaped,
    pub content: Markup,
}

impl GroupBindings {
    pub fn new(group: &TaskGroup, content: Markup) -> Self {
        Self {
            title: Escaped::new(group.title()),
            id: Escaped::new(group.id()),
            task: Escaped::new(group.task()),
            content,
        }
    }
}

/// Bindings of the `toc_entry` fragment.
#[derive(Debug, Serialize)]
pub struct TocBindings {
    pub title: Escaped,
    pub id: Escaped,
}

impl From<&TaskGroup> for TocBindings {
    fn from(group: &TaskGroup) -> Self {
        Self {
            title: Escaped::new(group.title()),
            id: Escaped::new(group.id()),
        }
    }
}

/// Bindings of the `page` fragment.
#[derive(Debug, Serialize)]
pub struct PageBindings {
    pub content: Markup,
    pub toc: Markup,
}
