//! Binding value types that carry their escaping policy.
//!
//! Fragments are rendered with auto-escaping turned off, so every string
//! that reaches a placeholder has to be either [`Escaped`] (user-authored
//! text, HTML-escaped on construction) or [`Markup`] (already composed
//! fragment output that must pass through untouched).

use std::fmt;

use minijinja::HtmlEscape;
use serde::Serialize;

/// User-authored text, HTML-escaped once on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Escaped(String);

impl Escaped {
    /// Escape raw text for use inside HTML content or attribute values.
    ///
    /// Besides `<`, `>`, `&` and `"`, this also escapes `'` as `&#x27;` and
    /// `/` as `&#x2f;`, so a path like `/usr/bin` reads `&#x2f;usr&#x2f;bin`
    /// in the page source. Browsers display both unchanged.
    pub fn new(raw: &str) -> Self {
        Self(HtmlEscape(raw).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composed fragment output, inserted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    pub fn new(html: String) -> Self {
        Self(html)
    }

    /// Join fragments with newline separators, preserving their order.
    pub fn join_lines<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Markup>,
    {
        let parts: Vec<String> = parts.into_iter().map(|m| m.0).collect();
        Self(parts.join("\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
