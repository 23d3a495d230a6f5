//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::{models::ImplementationTask, store::IntentEntry};

/// Newtype wrapper for displaying the intents found in a store.
///
/// Each entry renders as a level-two heading with its goal, path and
/// modification time. Entries whose file could not be parsed show
/// "(unreadable)" in place of the goal.
pub struct IntentEntries(pub Vec<IntentEntry>);

impl IntentEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&IntentEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntentEntry> {
        self.0.iter()
    }
}

impl Index<usize> for IntentEntries {
    type Output = IntentEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for IntentEntries {
    type Item = IntentEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntentEntries {
    type Item = &'a IntentEntry;
    type IntoIter = std::slice::Iter<'a, IntentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for IntentEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No intents found.");
        }
        for entry in &self.0 {
            writeln!(f, "## {}", entry.name)?;
            writeln!(f)?;
            writeln!(
                f,
                "- Goal: {}",
                entry.goal.as_deref().unwrap_or("(unreadable)")
            )?;
            writeln!(f, "- Path: {}", entry.path.display())?;
            writeln!(f, "- Modified: {}", LocalDateTime(&entry.modified))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a subset of tasks, such as the ones that
/// are ready to start.
pub struct Tasks<'a>(pub Vec<&'a ImplementationTask>);

impl Tasks<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Tasks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}
