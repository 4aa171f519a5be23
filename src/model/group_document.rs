// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde_yaml::{Mapping, Value};

use super::{key_matches, key_text, value_kind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDocumentError {
    NotASequence { found: &'static str },
}

impl fmt::Display for GroupDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotASequence { found } => {
                write!(f, "expected a list of groups, found {found}")
            }
        }
    }
}

impl std::error::Error for GroupDocumentError {}

/// A services or bookmarks document: a list of `{ group: [items...] }` mappings.
///
/// Entries are kept as raw YAML so malformed neighbours survive a rewrite untouched. The group
/// name of an entry is its mapping's first key; when a name repeats, only the first entry is
/// ever acted on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDocument {
    entries: Vec<Value>,
}

impl GroupDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, GroupDocumentError> {
        match value {
            Value::Sequence(entries) => Ok(Self { entries }),
            Value::Null => Ok(Self::default()),
            other => Err(GroupDocumentError::NotASequence {
                found: value_kind(&other),
            }),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Sequence(self.entries.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Sequence(self.entries)
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group names in document order, duplicates included.
    pub fn group_names(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().filter_map(|entry| {
            let (key, _) = entry.as_mapping()?.iter().next()?;
            key_text(key)
        })
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| {
            entry
                .as_mapping()
                .and_then(|mapping| mapping.iter().next())
                .is_some_and(|(key, _)| key_matches(key, name))
        })
    }

    pub fn contains_group(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Items of a group. `None` when the group is missing or its value is not a list.
    pub fn items(&self, name: &str) -> Option<&[Value]> {
        let index = self.position(name)?;
        let (_, value) = self.entries[index].as_mapping()?.iter().next()?;
        value.as_sequence().map(Vec::as_slice)
    }

    /// Replaces the group key `old` with `new`, leaving its items untouched.
    pub fn rename_group(&mut self, old: &str, new: &str) -> bool {
        let Some(index) = self.position(old) else {
            return false;
        };
        let Value::Mapping(mapping) = &mut self.entries[index] else {
            return false;
        };

        let renamed = std::mem::take(mapping)
            .into_iter()
            .enumerate()
            .map(|(i, (key, value))| {
                if i == 0 {
                    (Value::String(new.to_owned()), value)
                } else {
                    (key, value)
                }
            })
            .collect::<Mapping>();
        *mapping = renamed;
        true
    }

    /// Removes a group and returns its items.
    ///
    /// A group whose value is not a list (or is empty) yields an empty item list.
    pub fn take_group(&mut self, name: &str) -> Option<Vec<Value>> {
        let index = self.position(name)?;
        let removed = self.entries.remove(index);
        let items = match removed {
            Value::Mapping(mapping) => match mapping.into_iter().next() {
                Some((_, Value::Sequence(items))) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Some(items)
    }

    /// Appends items to a group, creating it at the end if absent.
    ///
    /// A group whose stored value is not a list is overwritten with a fresh list.
    pub fn append_items(&mut self, name: &str, items: Vec<Value>) {
        let Some(index) = self.position(name) else {
            let mut mapping = Mapping::with_capacity(1);
            mapping.insert(Value::String(name.to_owned()), Value::Sequence(items));
            self.entries.push(Value::Mapping(mapping));
            return;
        };

        let Value::Mapping(mapping) = &mut self.entries[index] else {
            return;
        };
        let Some((_, value)) = mapping.iter_mut().next() else {
            return;
        };
        match value {
            Value::Sequence(existing) => existing.extend(items),
            other => *other = Value::Sequence(items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{parse, SERVICES_YAML};

    fn doc(raw: &str) -> GroupDocument {
        GroupDocument::from_value(parse(raw)).expect("group document")
    }

    #[test]
    fn group_names_follow_document_order() {
        let doc = doc(SERVICES_YAML);
        assert_eq!(
            doc.group_names().collect::<Vec<_>>(),
            vec!["Media", "Infra", "Old"]
        );
    }

    #[test]
    fn rename_keeps_items_and_position() {
        let mut doc = doc(SERVICES_YAML);
        let before = doc.items("Media").expect("items").to_vec();
        assert!(doc.rename_group("Media", "Entertainment"));
        assert_eq!(doc.position("Entertainment"), Some(0));
        assert_eq!(doc.items("Entertainment").expect("items"), before.as_slice());
        assert!(!doc.contains_group("Media"));
        assert!(!doc.rename_group("Media", "Again"));
    }

    #[test]
    fn rename_only_touches_first_duplicate() {
        let mut doc = doc("- A:\n  - x\n- A:\n  - y\n");
        assert!(doc.rename_group("A", "B"));
        assert_eq!(doc.group_names().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn numeric_group_keys_are_matched_by_text() {
        let mut doc = doc("- 2024:\n  - x\n");
        assert_eq!(doc.group_names().collect::<Vec<_>>(), vec!["2024"]);
        assert!(doc.rename_group("2024", "Archive"));
        assert!(doc.contains_group("Archive"));
    }

    #[test]
    fn take_group_returns_items() {
        let mut doc = doc(SERVICES_YAML);
        let items = doc.take_group("Old").expect("taken");
        assert_eq!(items.len(), 3);
        assert!(!doc.contains_group("Old"));
        assert!(doc.take_group("Old").is_none());
    }

    #[test]
    fn take_group_tolerates_non_list_values() {
        let mut doc = doc("- Broken: not-a-list\n- Empty:\n");
        assert_eq!(doc.take_group("Broken"), Some(Vec::new()));
        assert_eq!(doc.take_group("Empty"), Some(Vec::new()));
        assert!(doc.is_empty());
    }

    #[test]
    fn append_items_creates_or_extends() {
        let mut doc = doc("- Uncategorized:\n  - a\n");
        doc.append_items("Uncategorized", vec![Value::from("b")]);
        doc.append_items("New", vec![Value::from("c")]);
        assert_eq!(
            doc.items("Uncategorized").expect("items"),
            &[Value::from("a"), Value::from("b")]
        );
        assert_eq!(doc.position("New"), Some(1));
    }

    #[test]
    fn append_items_overwrites_corrupt_group_value() {
        let mut doc = doc("- Uncategorized: 5\n");
        doc.append_items("Uncategorized", vec![Value::from("a")]);
        assert_eq!(doc.items("Uncategorized").expect("items"), &[Value::from("a")]);
    }

    #[test]
    fn non_lists_are_rejected() {
        let err = GroupDocument::from_value(parse("a: 1\n")).unwrap_err();
        assert_eq!(err, GroupDocumentError::NotASequence { found: "a mapping" });
        assert!(GroupDocument::from_value(Value::Null).expect("null").is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped_but_kept() {
        let mut doc = doc("- just a string\n- A:\n  - x\n");
        assert_eq!(doc.group_names().collect::<Vec<_>>(), vec!["A"]);
        assert!(doc.rename_group("A", "B"));
        assert_eq!(doc.entries()[0], Value::from("just a string"));
    }
}
