//! Task groups: every entry in a group solves the same task.

use crate::entry::{Entry, EntryError};
use crate::technology::Technology;

/// An identified collection of entries solving one task.
#[derive(Debug, Clone)]
pub struct TaskGroup {
    /// Heading text
    title: String,

    /// Anchor ID, expected to be unique within the catalog
    id: String,

    /// Description of the problem every entry solves
    task: String,

    /// Entries in insertion order
    entries: Vec<Entry>,
}

impl TaskGroup {
    pub(crate) fn new(title: String, id: String, task: String) -> Self {
        Self {
            title,
            id,
            task,
            entries: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append an entry. The command must not be blank.
    pub fn add_entry(
        &mut self,
        technology: &Technology,
        command: &str,
        comment: &str,
    ) -> Result<&Entry, EntryError> {
        let entry = Entry::new(technology, command, comment)?;
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Entries in render order: by technology name, then by command.
    pub fn sorted_entries(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::technology::TechnologyRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn appends_one_entry_per_call() {
        let mut registry = TechnologyRegistry::new();
        let awk = registry.register("AWK", "").unwrap();
        let mut group = TaskGroup::new("T".into(), "t".into(), "task".into());

        group.add_entry(&awk, "awk 1", "").unwrap();
        group.add_entry(&awk, "awk 2", "").unwrap();

        assert_eq!(group.entries().len(), 2);
        assert_eq!(group.entries()[1].command(), "awk 2");
    }

    #[test]
    fn failed_add_leaves_group_unchanged() {
        let mut registry = TechnologyRegistry::new();
        let awk = registry.register("AWK", "").unwrap();
        let mut group = TaskGroup::new("T".into(), "t".into(), "task".into());

        assert!(group.add_entry(&awk, "   ", "").is_err());
        assert!(group.entries().is_empty());
    }

    #[test]
    fn sorts_by_technology_then_command() {
        let mut registry = TechnologyRegistry::new();
        let perl = registry.register("Perl", "").unwrap();
        let coreutils = registry.register("Coreutils", "").unwrap();
        let awk = registry.register("AWK", "").unwrap();

        let mut group = TaskGroup::new("T".into(), "t".into(), "task".into());
        group.add_entry(&perl, "perl -ne print", "").unwrap();
        group.add_entry(&coreutils, "tail -n +1 *.log", "").unwrap();
        group.add_entry(&awk, "awk 1", "").unwrap();
        group.add_entry(&coreutils, "head -n -0 *.log", "").unwrap();

        let order: Vec<&str> = group.sorted_entries().iter().map(|e| e.command()).collect();

        assert_eq!(
            order,
            vec!["awk 1", "head -n -0 *.log", "tail -n +1 *.log", "perl -ne print"]
        );
        // insertion order is untouched
        assert_eq!(group.entries()[0].command(), "perl -ne print");
    }

    #[test]
    fn sort_is_case_sensitive() {
        let mut registry = TechnologyRegistry::new();
        let lower = registry.register("awk", "").unwrap();
        let upper = registry.register("Zsh", "").unwrap();

        let mut group = TaskGroup::new("T".into(), "t".into(), "task".into());
        group.add_entry(&lower, "awk 1", "").unwrap();
        group.add_entry(&upper, "zsh -c true", "").unwrap();

        let order: Vec<&str> = group
            .sorted_entries()
            .iter()
            .map(|e| e.technology().name())
            .collect();

        assert_eq!(order, vec!["Zsh", "awk"]);
    }
}
