use std::collections::{HashMap, HashSet};

use envsync_types::EnvEntry;

/// Merge `overrides` into `existing`, producing the list to persist.
///
/// The computation is keyed by name and only converted back to an ordered
/// list at the end. Non-overridden existing entries come first in their
/// original order, followed by one entry per override name in order of first
/// appearance.
pub fn merge_env(existing: &[EnvEntry], overrides: &[EnvEntry]) -> Vec<EnvEntry> {
    let mut resolved: HashMap<&str, &str> = HashMap::with_capacity(overrides.len());
    let mut override_order: Vec<&str> = Vec::with_capacity(overrides.len());
    for entry in overrides {
        if resolved
            .insert(entry.name.as_str(), entry.value.as_str())
            .is_none()
        {
            override_order.push(entry.name.as_str());
        }
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len());
    let mut merged = Vec::with_capacity(existing.len() + override_order.len());
    for entry in existing {
        if resolved.contains_key(entry.name.as_str()) {
            continue;
        }
        // A malformed existing list may repeat a name; keep the first.
        if seen.insert(entry.name.as_str()) {
            merged.push(entry.clone());
        }
    }

    merged.extend(
        override_order
            .into_iter()
            .map(|name| EnvEntry::new(name, resolved[name])),
    );
    merged
}
