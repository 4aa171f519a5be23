// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_yaml::{Mapping, Value};

use super::layout_entry::LayoutEntry;

pub(crate) const LAYOUT_KEY: &str = "layout";

/// In-memory settings document.
///
/// `layout` is always the ordered form. Every other top-level key is kept verbatim in `root`,
/// which also remembers where the `layout` key sat so a write puts it back in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    root: Mapping,
    layout: Vec<LayoutEntry>,
}

impl Settings {
    pub fn new(layout: Vec<LayoutEntry>) -> Self {
        Self {
            root: Mapping::new(),
            layout,
        }
    }

    pub(crate) fn from_parts(mut root: Mapping, layout: Vec<LayoutEntry>) -> Self {
        if let Some(slot) = root.get_mut(LAYOUT_KEY) {
            *slot = Value::Null;
        }
        Self { root, layout }
    }

    /// Top-level keys other than `layout`, in file order.
    pub fn other_keys(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.root
            .iter()
            .filter(|(key, _)| key.as_str() != Some(LAYOUT_KEY))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        if key == LAYOUT_KEY {
            return None;
        }
        self.root.get(key)
    }

    /// Sets an unrelated top-level key. `layout` is managed through the layout accessors.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if key == LAYOUT_KEY {
            return;
        }
        self.root.insert(Value::String(key), value);
    }

    pub(crate) fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn layout(&self) -> &[LayoutEntry] {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut Vec<LayoutEntry> {
        &mut self.layout
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.layout.iter().map(LayoutEntry::name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.layout.iter().position(|entry| entry.name() == name)
    }

    pub fn contains_group(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&LayoutEntry> {
        self.layout.iter().find(|entry| entry.name() == name)
    }

    /// Renames the first entry called `old` in place. Returns its index.
    pub fn rename_group(&mut self, old: &str, new: &str) -> Option<usize> {
        let index = self.position(old)?;
        self.layout[index].set_name(new);
        Some(index)
    }

    /// Removes the first entry called `name`, keeping the order of the rest.
    pub fn remove_group(&mut self, name: &str) -> Option<(usize, LayoutEntry)> {
        let index = self.position(name)?;
        Some((index, self.layout.remove(index)))
    }

    pub fn push_group(&mut self, entry: LayoutEntry) -> usize {
        self.layout.push(entry);
        self.layout.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(names: &[&str]) -> Settings {
        Settings::new(names.iter().map(|name| LayoutEntry::new(*name)).collect())
    }

    #[test]
    fn rename_keeps_position() {
        let mut settings = settings(&["A", "Media", "C"]);
        assert_eq!(settings.rename_group("Media", "Entertainment"), Some(1));
        assert_eq!(
            settings.group_names().collect::<Vec<_>>(),
            vec!["A", "Entertainment", "C"]
        );
        assert_eq!(settings.rename_group("Missing", "X"), None);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut settings = settings(&["A", "B", "C"]);
        let (index, entry) = settings.remove_group("B").expect("removed");
        assert_eq!(index, 1);
        assert_eq!(entry.name(), "B");
        assert_eq!(settings.group_names().collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn layout_key_is_not_exposed_as_other_key() {
        let root: Mapping = serde_yaml::from_str("title: Home\nlayout:\n  A: {}\ntheme: dark\n").unwrap();
        let mut settings = Settings::from_parts(root, vec![LayoutEntry::new("A")]);
        settings.set("layout", Value::from("nope"));
        assert!(settings.get("layout").is_none());
        let keys = settings
            .other_keys()
            .filter_map(|(key, _)| key.as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["title", "theme"]);
    }
}
