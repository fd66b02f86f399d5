//! Fragment stores: where the page, group, entry and toc fragments come from.
//!
//! Fragments are minijinja templates. Placeholders are written `{{ name }}`.
//! Since `{%` and `{#` open minijinja blocks and comments, a literal one in
//! inline CSS or JavaScript makes the fragment fail to load with
//! `ComposeError::InvalidFragment`. Wrap such text in
//! `{% raw %}...{% endraw %}`.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::defaults;

/// File name suffix of fragments stored on disk.
pub const FRAGMENT_SUFFIX: &str = ".template.html";

/// The fixed set of fragments the document is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fragment {
    /// Outer document, bound with `content` and `toc`
    Page,
    /// One task group, bound with `title`, `id`, `task` and `content`
    Group,
    /// One entry row, bound with `technology`, `command`, `comment` and `char_count`
    Entry,
    /// One table-of-contents line, bound with `title` and `id`
    TocEntry,
}

impl Fragment {
    pub const ALL: [Fragment; 4] = [
        Fragment::Page,
        Fragment::Group,
        Fragment::Entry,
        Fragment::TocEntry,
    ];

    /// Store name of the fragment.
    pub fn name(self) -> &'static str {
        match self {
            Fragment::Page => "page",
            Fragment::Group => "group",
            Fragment::Entry => "entry",
            Fragment::TocEntry => "toc_entry",
        }
    }

    /// Look a fragment up by its store name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// File name used by [`DirectoryStore`].
    pub fn file_name(self) -> String {
        format!("{}{}", self.name(), FRAGMENT_SUFFIX)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur when loading a fragment.
#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    #[error("Fragment '{fragment}' not found at {path}")]
    NotFound { fragment: Fragment, path: PathBuf },

    #[error("Fragment '{0}' not found")]
    Missing(Fragment),

    #[error("Failed to read fragment '{fragment}': {message}")]
    Unreadable { fragment: Fragment, message: String },
}

/// Source of fragment text.
pub trait FragmentStore {
    /// Load the text of one fragment.
    fn load(&self, fragment: Fragment) -> Result<String, FragmentError>;
}

/// Fragments stored as `<name>.template.html` files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a fragment is read from.
    pub fn path_of(&self, fragment: Fragment) -> PathBuf {
        self.dir.join(fragment.file_name())
    }

    /// List template files in the directory that are not one of the known fragments.
    pub fn unrecognized(&self) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = WalkDir::new(&self.dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|path| path.is_file())
            .filter(|path| {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    return false;
                };
                match name.strip_suffix(FRAGMENT_SUFFIX) {
                    Some(stem) => Fragment::from_name(stem).is_none(),
                    None => false,
                }
            })
            .collect();

        found.sort();
        found
    }
}

impl FragmentStore for DirectoryStore {
    fn load(&self, fragment: Fragment) -> Result<String, FragmentError> {
        let path = self.path_of(fragment);

        if !path.is_file() {
            return Err(FragmentError::NotFound { fragment, path });
        }

        let text = fs::read_to_string(&path).map_err(|e| FragmentError::Unreadable {
            fragment,
            message: format!("{}: {}", path.display(), e),
        })?;

        tracing::debug!("Loaded fragment {} from {}", fragment, path.display());

        Ok(text)
    }
}

/// Fragments held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    fragments: HashMap<Fragment, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the built-in default fragments.
    pub fn defaults() -> Self {
        let mut store = Self::new();
        for fragment in Fragment::ALL {
            store.insert(fragment, defaults::text(fragment));
        }
        store
    }

    /// Add or replace a fragment.
    pub fn insert(&mut self, fragment: Fragment, text: impl Into<String>) -> &mut Self {
        self.fragments.insert(fragment, text.into());
        self
    }

    pub fn with(mut self, fragment: Fragment, text: impl Into<String>) -> Self {
        self.insert(fragment, text);
        self
    }
}

impl FragmentStore for MemoryStore {
    fn load(&self, fragment: Fragment) -> Result<String, FragmentError> {
        self.fragments
            .get(&fragment)
            .cloned()
            .ok_or(FragmentError::Missing(fragment))
    }
}
