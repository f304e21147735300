//! Change summaries between an environment list and its merged successor.

use std::collections::{HashMap, HashSet};

use envsync_types::EnvEntry;
use serde::Serialize;

/// A single difference between two environment lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EnvChange {
    /// A name that was not present before.
    Added { name: String, value: String },
    /// A name whose value changed.
    Modified {
        name: String,
        old: String,
        new: String,
    },
    /// A name that is no longer present.
    Removed { name: String, value: String },
}

impl EnvChange {
    /// The variable name this change applies to.
    pub fn name(&self) -> &str {
        match self {
            Self::Added { name, .. } | Self::Modified { name, .. } | Self::Removed { name, .. } => {
                name
            }
        }
    }
}

/// The set of changes between two environment lists, ignoring order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EnvChangeSet {
    pub changes: Vec<EnvChange>,
    /// Names present in both lists with the same value.
    pub unchanged: usize,
}

impl EnvChangeSet {
    /// Compare `before` with `after`, keyed by name.
    ///
    /// When a list repeats a name, its first occurrence is the one compared.
    /// Every later occurrence in `before` that `after` no longer carries is
    /// reported as `Removed`.
    pub fn between(before: &[EnvEntry], after: &[EnvEntry]) -> Self {
        let old = first_by_name(before);
        let new = first_by_name(after);

        let mut set = Self::default();
        let mut seen = HashSet::with_capacity(after.len());
        for entry in after {
            if !seen.insert(entry.name.as_str()) {
                continue;
            }
            match old.get(entry.name.as_str()) {
                None => set.changes.push(EnvChange::Added {
                    name: entry.name.clone(),
                    value: entry.value.clone(),
                }),
                Some(previous) if *previous != entry.value => {
                    set.changes.push(EnvChange::Modified {
                        name: entry.name.clone(),
                        old: (*previous).to_string(),
                        new: entry.value.clone(),
                    })
                }
                Some(_) => set.unchanged += 1,
            }
        }
        seen.clear();
        for entry in before {
            let first = seen.insert(entry.name.as_str());
            if !first || !new.contains_key(entry.name.as_str()) {
                set.changes.push(EnvChange::Removed {
                    name: entry.name.clone(),
                    value: entry.value.clone(),
                });
            }
        }
        set
    }

    /// Returns `true` if no name was added, modified, or removed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn additions(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, EnvChange::Added { .. }))
            .count()
    }

    pub fn modifications(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, EnvChange::Modified { .. }))
            .count()
    }

    pub fn removals(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, EnvChange::Removed { .. }))
            .count()
    }
}

/// Returns `true` if both lists hold the same (name, value) pairs with the
/// same multiplicity, in any order.
pub fn same_entries(a: &[EnvEntry], b: &[EnvEntry]) -> bool {
    a.len() == b.len() && sorted_pairs(a) == sorted_pairs(b)
}

fn sorted_pairs(list: &[EnvEntry]) -> Vec<(&str, &str)> {
    let mut pairs: Vec<_> = list
        .iter()
        .map(|e| (e.name.as_str(), e.value.as_str()))
        .collect();
    pairs.sort_unstable();
    pairs
}

fn first_by_name(list: &[EnvEntry]) -> HashMap<&str, &str> {
    let mut map = HashMap::with_capacity(list.len());
    for entry in list {
        map.entry(entry.name.as_str())
            .or_insert(entry.value.as_str());
    }
    map
}
