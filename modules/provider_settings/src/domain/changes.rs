//! Change sets between two provider settings mappings
//!
//! Used at bootstrap to report how a loaded configuration departs from a baseline:
//! - Added: name present only in the new mapping
//! - Removed: name present only in the old mapping
//! - Modified: name present in both with different values

use crate::contract::SettingValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// A single difference between two mappings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum SettingChange {
    Added {
        name: String,
        value: SettingValue,
    },
    Removed {
        name: String,
        value: SettingValue,
    },
    Modified {
        name: String,
        old: SettingValue,
        new: SettingValue,
    },
}

impl SettingChange {
    pub fn name(&self) -> &str {
        match self {
            Self::Added { name, .. } | Self::Removed { name, .. } | Self::Modified { name, .. } => {
                name
            }
        }
    }
}

/// Compute the changes turning `before` into `after`, ordered by name
pub fn diff(
    before: &HashMap<String, SettingValue>,
    after: &HashMap<String, SettingValue>,
) -> Vec<SettingChange> {
    let names: BTreeSet<&String> = before.keys().chain(after.keys()).collect();

    names
        .into_iter()
        .filter_map(|name| match (before.get(name), after.get(name)) {
            (None, Some(value)) => Some(SettingChange::Added {
                name: name.clone(),
                value: value.clone(),
            }),
            (Some(value), None) => Some(SettingChange::Removed {
                name: name.clone(),
                value: value.clone(),
            }),
            (Some(old), Some(new)) if old != new => Some(SettingChange::Modified {
                name: name.clone(),
                old: old.clone(),
                new: new.clone(),
            }),
            _ => None,
        })
        .collect()
}
