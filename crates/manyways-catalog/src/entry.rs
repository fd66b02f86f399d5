//! A single command-line invocation.

use crate::technology::Technology;

/// One way of solving a task group's task with one technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    technology: Technology,
    command: String,
    comment: String,
}

/// Errors that can occur when creating an entry.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("Entry for {technology} has an empty command")]
    EmptyCommand { technology: String },
}

impl Entry {
    /// Create an entry, trimming surrounding whitespace from command and comment.
    pub(crate) fn new(
        technology: &Technology,
        command: &str,
        comment: &str,
    ) -> Result<Self, EntryError> {
        let command = command.trim();
        if command.is_empty() {
            return Err(EntryError::EmptyCommand {
                technology: technology.name().to_string(),
            });
        }

        Ok(Self {
            technology: technology.clone(),
            command: command.to_string(),
            comment: comment.trim().to_string(),
        })
    }

    pub fn technology(&self) -> &Technology {
        &self.technology
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Explanatory note; empty when none was given.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Number of characters in the command.
    pub fn char_count(&self) -> usize {
        self.command.chars().count()
    }

    /// Render order within a group: technology name, then command.
    pub fn sort_key(&self) -> (&str, &str) {
        (self.technology.name(), &self.command)
    }
}
