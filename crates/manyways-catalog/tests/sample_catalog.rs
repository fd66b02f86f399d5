//! Renders the catalog and fragments shipped at the repository root.

use std::path::PathBuf;

use manyways_catalog::{load_catalog, Catalog};
use manyways_templates::{DirectoryStore, Fragment, FragmentStore, MemoryStore};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn sample() -> Catalog {
    load_catalog(&repo_root().join("catalog.toml"))
        .expect("sample catalog loads")
        .catalog
}

#[test]
fn sample_catalog_renders_with_shipped_fragments() {
    let catalog = sample();
    let store = DirectoryStore::new(repo_root().join("templates"));

    let html = catalog.render(&store).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<section class=\"ways\"").count(), catalog.len());
    assert_eq!(html.matches("<tr class=\"way\">").count(), catalog.entry_count());
    assert!(html.contains(r##"<a href="#each-file-with-header">"##));
    assert!(!html.contains("{{"));
}

#[test]
fn sample_catalog_sorts_every_group() {
    let catalog = sample();
    let html = catalog.render(&MemoryStore::defaults()).unwrap();

    for group in catalog.groups() {
        let start = html
            .find(&format!("id=\"{}\"", group.id()))
            .expect("group is rendered");
        let section = &html[start..];
        let section = &section[..section.find("</section>").unwrap()];

        let technologies: Vec<&str> = section
            .match_indices("<td class=\"technology\">")
            .map(|(i, tag)| {
                let rest = &section[i + tag.len()..];
                &rest[..rest.find("</td>").unwrap()]
            })
            .collect();

        let mut sorted = technologies.clone();
        sorted.sort();
        assert_eq!(technologies, sorted, "group {} is not sorted", group.id());
        assert_eq!(technologies.len(), group.entries().len());
    }
}

#[test]
fn sample_ids_are_unique() {
    assert!(sample().duplicate_ids().is_empty());
}

#[test]
fn shipped_fragments_match_built_in_defaults() {
    let shipped = DirectoryStore::new(repo_root().join("templates"));
    let defaults = MemoryStore::defaults();

    for fragment in Fragment::ALL {
        assert_eq!(
            shipped.load(fragment).unwrap().trim_end(),
            defaults.load(fragment).unwrap().trim_end(),
            "templates/{} differs from the built-in default",
            fragment.file_name()
        );
    }
}
