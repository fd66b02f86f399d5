//! The catalog and its render pipeline.

use std::collections::HashMap;

use manyways_templates::{ComposeError, Composer, Fragment, FragmentError, FragmentStore, Markup};

use crate::bindings::{EntryBindings, GroupBindings, PageBindings, TocBindings};
use crate::group::TaskGroup;

/// Errors that abort rendering. No partial document is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    MissingFragment(FragmentError),

    #[error("Fragment '{fragment}' uses placeholder '{placeholder}' but no value is bound to it")]
    MissingBinding {
        fragment: String,
        placeholder: String,
    },

    #[error(transparent)]
    Template(ComposeError),
}

impl From<ComposeError> for RenderError {
    fn from(err: ComposeError) -> Self {
        match err {
            ComposeError::MissingFragment(e) => RenderError::MissingFragment(e),
            ComposeError::MissingBinding {
                fragment,
                placeholder,
            } => RenderError::MissingBinding {
                fragment,
                placeholder,
            },
            other => RenderError::Template(other),
        }
    }
}

/// All task groups of the document, in document order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<TaskGroup>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new task group and return it for population.
    ///
    /// `id` is not checked for uniqueness; see [`Catalog::duplicate_ids`].
    pub fn add_group(
        &mut self,
        title: impl Into<String>,
        id: impl Into<String>,
        task: impl Into<String>,
    ) -> &mut TaskGroup {
        self.groups
            .push(TaskGroup::new(title.into(), id.into(), task.into()));
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    pub fn groups(&self) -> &[TaskGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries().len()).sum()
    }

    /// Group ids used more than once, in order of first use.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for group in &self.groups {
            *seen.entry(group.id()).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for group in &self.groups {
            let id = group.id();
            if seen.get(id).copied().unwrap_or(0) > 1 && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// Render the whole catalog into one HTML document.
    ///
    /// Every fragment is loaded before anything is rendered. Nothing is
    /// returned unless the whole document composed cleanly.
    pub fn render(&self, store: &dyn FragmentStore) -> Result<String, RenderError> {
        let composer = Composer::load(store)?;
        self.render_with(&composer)
    }

    /// Render with fragments that are already loaded.
    pub fn render_with(&self, composer: &Composer) -> Result<String, RenderError> {
        for id in self.duplicate_ids() {
            tracing::warn!("Group id '{}' is used more than once", id);
        }

        let toc = self
            .groups
            .iter()
            .map(|group| {
                composer
                    .compose(Fragment::TocEntry, &TocBindings::from(group))
                    .map(Markup::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let sections = self
            .groups
            .iter()
            .map(|group| render_group(composer, group))
            .collect::<Result<Vec<_>, _>>()?;

        let page = PageBindings {
            content: Markup::join_lines(sections),
            toc: Markup::join_lines(toc),
        };

        Ok(composer.compose(Fragment::Page, &page)?)
    }
}

/// Render one group with its entries in sorted order.
fn render_group(composer: &Composer, group: &TaskGroup) -> Result<Markup, ComposeError> {
    let entries = group
        .sorted_entries()
        .into_iter()
        .map(|entry| {
            composer
                .compose(Fragment::Entry, &EntryBindings::from(entry))
                .map(Markup::new)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Rendered group {} with {} entries", group.id(), entries.len());

    let bindings = GroupBindings::new(group, Markup::join_lines(entries));
    composer
        .compose(Fragment::Group, &bindings)
        .map(Markup::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technology::TechnologyRegistry;
    use manyways_templates::MemoryStore;
    use pretty_assertions::assert_eq;

    const PAGE: &str = "<toc>\n{{ toc }}\n</toc>\n<content>\n{{ content }}\n</content>";
    const GROUP: &str =
        r#"<group id="{{ id }}" title="{{ title }}" task="{{ task }}">{{ content }}</group>"#;
    const ENTRY: &str = r#"<entry tech="{{ technology }}" chars="{{ char_count }}" comment="{{ comment }}">{{ command }}</entry>"#;
    const TOC_ENTRY: &str = r#"<toc-entry id="{{ id }}">{{ title }}</toc-entry>"#;

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with(Fragment::Page, PAGE)
            .with(Fragment::Group, GROUP)
            .with(Fragment::Entry, ENTRY)
            .with(Fragment::TocEntry, TOC_ENTRY)
    }

    #[test]
    fn renders_single_entry_scenario() {
        let mut registry = TechnologyRegistry::new();
        let awk = registry.register("AWK", "").unwrap();
        let mut catalog = Catalog::new();
        catalog
            .add_group("Demo", "demo", "Do X")
            .add_entry(&awk, "awk '{print}' file", "")
            .unwrap();

        let html = catalog.render(&store()).unwrap();

        assert_eq!(html.matches("<entry ").count(), 1);
        assert_eq!(html.matches("<toc-entry ").count(), 1);
        assert!(html.contains(r#"<toc-entry id="demo">Demo</toc-entry>"#));
        assert!(html.contains(r#"chars="18""#));
        assert!(html.contains(r#"<group id="demo" title="Demo" task="Do X">"#));
    }

    #[test]
    fn renders_entries_in_sorted_order() {
        let mut registry = TechnologyRegistry::new();
        let perl = registry.register("Perl", "").unwrap();
        let awk = registry.register("AWK", "").unwrap();
        let mut catalog = Catalog::new();
        let group = catalog.add_group("Lines", "lines", "Print lines");
        group.add_entry(&perl, "perl -pe 1", "").unwrap();
        group.add_entry(&awk, "awk 1", "").unwrap();

        let html = catalog.render(&store()).unwrap();

        let awk_at = html.find(r#"tech="AWK""#).unwrap();
        let perl_at = html.find(r#"tech="Perl""#).unwrap();
        assert!(awk_at < perl_at);
    }

    #[test]
    fn escapes_entry_fields() {
        let mut registry = TechnologyRegistry::new();
        let shell = registry.register("Shell", "").unwrap();
        let mut catalog = Catalog::new();
        catalog
            .add_group("XSS", "xss", "Escape it")
            .add_entry(&shell, "echo '<script>' && \"x\"", "<b>bold</b>")
            .unwrap();

        let html = catalog.render(&store()).unwrap();

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;&amp;"));
        // length of the raw command, not of its escaped form
        assert!(html.contains(r#"chars="22""#));
    }

    #[test]
    fn escapes_group_text_everywhere() {
        let mut catalog = Catalog::new();
        catalog.add_group("Fish & <Chips>", "fish", "Use \"quotes\"");

        let html = catalog.render(&store()).unwrap();

        assert!(html.contains(r#"<toc-entry id="fish">Fish &amp; &lt;Chips&gt;</toc-entry>"#));
        assert!(html.contains(r#"title="Fish &amp; &lt;Chips&gt;""#));
        assert!(html.contains(r#"task="Use &quot;quotes&quot;""#));
    }

    #[test]
    fn renders_empty_catalog() {
        let html = Catalog::new().render(&store()).unwrap();

        assert_eq!(html, "<toc>\n\n</toc>\n<content>\n\n</content>");
    }

    #[test]
    fn renders_group_without_entries() {
        let mut catalog = Catalog::new();
        catalog.add_group("Empty", "empty", "Nothing yet");

        let html = catalog.render(&store()).unwrap();

        assert!(html.contains(r#"<group id="empty" title="Empty" task="Nothing yet"></group>"#));
    }

    #[test]
    fn toc_follows_insertion_order() {
        let mut catalog = Catalog::new();
        for (title, id) in [("Zeta", "z"), ("Alpha", "a"), ("Mid", "m")] {
            catalog.add_group(title, id, "task");
        }

        let html = catalog.render(&store()).unwrap();

        let toc = html
            .split("</toc>")
            .next()
            .unwrap()
            .lines()
            .filter(|l| l.starts_with("<toc-entry"))
            .collect::<Vec<_>>();
        assert_eq!(
            toc,
            vec![
                r#"<toc-entry id="z">Zeta</toc-entry>"#,
                r#"<toc-entry id="a">Alpha</toc-entry>"#,
                r#"<toc-entry id="m">Mid</toc-entry>"#,
            ]
        );
    }

    #[test]
    fn joins_fragments_with_newlines() {
        let mut registry = TechnologyRegistry::new();
        let awk = registry.register("AWK", "").unwrap();
        let mut catalog = Catalog::new();
        let group = catalog.add_group("G", "g", "t");
        group.add_entry(&awk, "awk 2", "").unwrap();
        group.add_entry(&awk, "awk 1", "").unwrap();
        catalog.add_group("H", "h", "u");

        let html = catalog.render(&store()).unwrap();

        assert_eq!(
            html,
            concat!(
                "<toc>\n",
                "<toc-entry id=\"g\">G</toc-entry>\n",
                "<toc-entry id=\"h\">H</toc-entry>\n",
                "</toc>\n<content>\n",
                "<group id=\"g\" title=\"G\" task=\"t\">",
                "<entry tech=\"AWK\" chars=\"5\" comment=\"\">awk 1</entry>\n",
                "<entry tech=\"AWK\" chars=\"5\" comment=\"\">awk 2</entry>",
                "</group>\n",
                "<group id=\"h\" title=\"H\" task=\"u\"></group>\n",
                "</content>",
            )
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut registry = TechnologyRegistry::new();
        let ruby = registry.register("Ruby", "").unwrap();
        let awk = registry.register("AWK", "").unwrap();
        let mut catalog = Catalog::new();
        let group = catalog.add_group("G", "g", "t");
        group.add_entry(&ruby, "ruby -e 'puts 1'", "").unwrap();
        group.add_entry(&awk, "awk 'BEGIN{print 1}'", "short").unwrap();

        let store = store();
        let first = catalog.render(&store).unwrap();
        let second = catalog.render(&store).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_ids_render_and_are_reported() {
        let mut catalog = Catalog::new();
        catalog.add_group("One", "same", "t");
        catalog.add_group("Two", "other", "t");
        catalog.add_group("Three", "same", "t");

        let html = catalog.render(&store()).unwrap();

        assert_eq!(html.matches(r#"id="same""#).count(), 4);
        assert_eq!(catalog.duplicate_ids(), vec!["same"]);
    }

    #[test]
    fn missing_fragment_fails_before_rendering() {
        let store = MemoryStore::new()
            .with(Fragment::Page, PAGE)
            .with(Fragment::Group, GROUP)
            .with(Fragment::TocEntry, TOC_ENTRY);

        let result = Catalog::new().render(&store);

        assert!(matches!(
            result,
            Err(RenderError::MissingFragment(FragmentError::Missing(
                Fragment::Entry
            )))
        ));
    }

    #[test]
    fn unbound_placeholder_aborts_render() {
        let mut registry = TechnologyRegistry::new();
        let awk = registry.register("AWK", "").unwrap();
        let mut catalog = Catalog::new();
        catalog
            .add_group("G", "g", "t")
            .add_entry(&awk, "awk 1", "")
            .unwrap();
        let store = store().with(Fragment::Entry, "{{ command }} {{ url }}");

        let result = catalog.render(&store);

        match result {
            Err(RenderError::MissingBinding {
                fragment,
                placeholder,
            }) => {
                assert_eq!(fragment, "entry");
                assert_eq!(placeholder, "url");
            }
            other => panic!("expected MissingBinding, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_fragment_is_a_template_error() {
        let store = store().with(Fragment::Page, "{% if %}");

        let result = Catalog::new().render(&store);

        assert!(matches!(
            result,
            Err(RenderError::Template(ComposeError::InvalidFragment { .. }))
        ));
    }

    #[test]
    fn counts_groups_and_entries() {
        let mut registry = TechnologyRegistry::new();
        let awk = registry.register("AWK", "").unwrap();
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.add_group("A", "a", "t").add_entry(&awk, "awk 1", "").unwrap();
        let group = catalog.add_group("B", "b", "t");
        group.add_entry(&awk, "awk 2", "").unwrap();
        group.add_entry(&awk, "awk 3", "").unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entry_count(), 3);
    }
}
