//! Tag set reconciliation.
//!
//! # Responsibility
//! - Compute the minimal add/remove tag operations between an old and a new
//!   tag list.
//!
//! # Invariants
//! - Each input list is treated as a set; duplicates collapse.
//! - `add` and `remove` are disjoint and never contain shared tags.
//! - Output order is first-seen order, old list before new list.

use std::collections::HashMap;

const IN_OLD: u8 = 0b01;
const IN_NEW: u8 = 0b10;

/// Tag changes required to move a note from one tag set to another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDiff {
    /// Tags present in the new list but not the old one.
    pub add: Vec<String>,
    /// Tags present in the old list but not the new one.
    pub remove: Vec<String>,
}

impl TagDiff {
    /// Diffs `old_tags` against `new_tags` in one pass over both lists.
    pub fn between(old_tags: &[String], new_tags: &[String]) -> Self {
        let mut membership: HashMap<&str, u8> =
            HashMap::with_capacity(old_tags.len() + new_tags.len());
        let mut first_seen: Vec<&str> = Vec::new();

        let tagged = old_tags
            .iter()
            .map(|tag| (tag.as_str(), IN_OLD))
            .chain(new_tags.iter().map(|tag| (tag.as_str(), IN_NEW)));
        for (tag, side) in tagged {
            let bits = membership.entry(tag).or_insert_with(|| {
                first_seen.push(tag);
                0
            });
            *bits |= side;
        }

        let mut diff = Self::default();
        for tag in first_seen {
            match membership.get(tag).copied() {
                Some(IN_OLD) => diff.remove.push(tag.to_string()),
                Some(IN_NEW) => diff.add.push(tag.to_string()),
                _ => {}
            }
        }
        diff
    }

    /// Diff that indexes a brand new note carrying `tags`.
    pub fn insertion_of(tags: &[String]) -> Self {
        Self::between(&[], tags)
    }

    /// Diff that removes a note carrying `tags` from the index entirely.
    pub fn removal_of(tags: &[String]) -> Self {
        Self::between(tags, &[])
    }

    /// Returns `true` when no index changes are required.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}
