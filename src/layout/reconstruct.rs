// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde_yaml::{Mapping, Value};

use super::is_numeric_key;
use super::scan::layout_keys;
use crate::model::key_text;
use crate::model::layout_entry::record_name;
use crate::model::settings::LAYOUT_KEY;
use crate::model::{LayoutEntry, Settings};

/// Turns a parsed settings document into [`Settings`] with an ordered layout.
///
/// `raw_text` must be the text `document` was parsed from; it is the source of layout order.
pub fn reconstruct_settings(raw_text: &str, document: Value) -> Settings {
    let root = match document {
        Value::Mapping(root) => root,
        Value::Null => Mapping::new(),
        _ => {
            tracing::warn!("settings document is not a mapping, ignoring its content");
            Mapping::new()
        }
    };

    let layout = reconstruct_layout(raw_text, root.get(LAYOUT_KEY));
    Settings::from_parts(root, layout)
}

pub fn reconstruct_layout(raw_text: &str, layout: Option<&Value>) -> Vec<LayoutEntry> {
    match layout {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Sequence(items)) => from_sequence(items),
        Some(Value::Mapping(mapping)) if is_legacy_index_mapping(mapping) => {
            tracing::info!(entries = mapping.len(), "normalizing index-keyed settings layout");
            from_index_keys(mapping)
        }
        Some(Value::Mapping(mapping)) => from_name_keys(raw_text, mapping),
        Some(_) => {
            tracing::warn!("settings layout is neither a mapping nor a list, treating as empty");
            Vec::new()
        }
    }
}

#[derive(Debug, Default)]
struct LayoutBuilder {
    entries: Vec<LayoutEntry>,
    seen: HashSet<String>,
}

impl LayoutBuilder {
    fn push(&mut self, entry: LayoutEntry) {
        if !self.seen.insert(entry.name().to_owned()) {
            tracing::warn!(group = %entry.name(), "duplicate layout group, keeping the first");
            return;
        }
        self.entries.push(entry);
    }

    fn finish(self) -> Vec<LayoutEntry> {
        self.entries
    }
}

fn from_sequence(items: &[Value]) -> Vec<LayoutEntry> {
    let mut builder = LayoutBuilder::default();
    for item in items {
        if let Some(entry) = LayoutEntry::from_record(item) {
            builder.push(entry);
            continue;
        }

        let single = item
            .as_mapping()
            .filter(|mapping| mapping.len() == 1)
            .and_then(|mapping| mapping.iter().next());
        match single {
            Some((key, value)) if matches!(value, Value::Mapping(_) | Value::Null) => match key_text(key) {
                Some(name) => builder.push(keyed_entry(name, value)),
                None => tracing::warn!("layout list item has a non-scalar key, dropping"),
            },
            _ => tracing::warn!("layout list item has no usable group name, dropping"),
        }
    }
    builder.finish()
}

/// Every key is an index and at least one value does not simply repeat its own key as `name`.
///
/// Numerically named groups written by this crate carry `name` equal to the key, so they are not
/// mistaken for the legacy encoding.
fn is_legacy_index_mapping(mapping: &Mapping) -> bool {
    if mapping.is_empty() {
        return false;
    }

    let mut self_named = true;
    for (key, value) in mapping {
        let Some(key) = key_text(key).filter(|key| is_numeric_key(key)) else {
            return false;
        };
        let inner = value.as_mapping().and_then(record_name);
        if inner.as_deref() != Some(key.as_str()) {
            self_named = false;
        }
    }

    !self_named
}

fn compare_index_keys(a: &str, b: &str) -> Ordering {
    let normalize = |key: &str| -> String {
        let key = key.trim_matches('\'');
        let trimmed = key.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        digits.to_owned()
    };
    let (a, b) = (normalize(a), normalize(b));
    a.len().cmp(&b.len()).then_with(|| a.cmp(&b))
}

fn from_index_keys(mapping: &Mapping) -> Vec<LayoutEntry> {
    let mut indexed = mapping
        .iter()
        .filter_map(|(key, value)| Some((key_text(key)?, value)))
        .collect::<Vec<_>>();
    indexed.sort_by(|(a, _), (b, _)| compare_index_keys(a, b));

    let mut builder = LayoutBuilder::default();
    for (key, value) in indexed {
        let Some(record) = value.as_mapping() else {
            tracing::warn!(index = %key, "legacy layout entry is not a mapping, dropping");
            continue;
        };
        let Some(name) = record_name(record) else {
            tracing::warn!(index = %key, "legacy layout entry has no name, dropping");
            continue;
        };
        builder.push(LayoutEntry::with_props(name, record.clone()));
    }
    builder.finish()
}

fn keyed_entry(name: String, value: &Value) -> LayoutEntry {
    match value {
        Value::Mapping(props) => LayoutEntry::with_props(name, props.clone()),
        Value::Null => LayoutEntry::new(name),
        _ => {
            tracing::warn!(group = %name, "layout entry value is not a mapping, dropping its props");
            LayoutEntry::new(name)
        }
    }
}

fn from_name_keys(raw_text: &str, mapping: &Mapping) -> Vec<LayoutEntry> {
    if mapping.is_empty() {
        return Vec::new();
    }

    let parsed = mapping
        .iter()
        .map(|(key, value)| (key_text(key), value))
        .collect::<Vec<_>>();
    let mut used = vec![false; parsed.len()];

    let scanned = layout_keys(raw_text).unwrap_or_else(|| {
        tracing::warn!("no layout block found in settings text, group order may be unreliable");
        Vec::new()
    });

    let mut builder = LayoutBuilder::default();
    for key in scanned {
        let found = parsed
            .iter()
            .position(|(parsed_key, _)| parsed_key.as_deref() == Some(key.as_str()));
        match found {
            Some(index) if !used[index] => {
                used[index] = true;
                builder.push(keyed_entry(key, parsed[index].1));
            }
            Some(_) => {}
            None => {
                tracing::warn!(group = %key, "layout key found in settings text but not in parsed layout, dropping");
            }
        }
    }

    for (index, (key, value)) in parsed.iter().enumerate() {
        if used[index] {
            continue;
        }
        let Some(key) = key else {
            tracing::warn!("layout has a non-scalar key, dropping");
            continue;
        };

        if is_numeric_key(key) {
            if let Some(record) = value.as_mapping() {
                if let Some(name) = record_name(record) {
                    builder.push(LayoutEntry::with_props(name, record.clone()));
                    continue;
                }
            }
        }

        tracing::debug!(group = %key, "layout key not found in settings text, appending");
        builder.push(keyed_entry(key.clone(), value));
    }

    builder.finish()
}
