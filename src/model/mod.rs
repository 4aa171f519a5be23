// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core document model.
//!
//! Services and bookmarks are lists of single-key group mappings; settings carries the ordered
//! group layout plus unrelated top-level keys.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod group_document;
pub mod layout_entry;
pub mod settings;

pub use group_document::{GroupDocument, GroupDocumentError};
pub use layout_entry::LayoutEntry;
pub use settings::Settings;

use serde_yaml::Value;

/// Destination group for items whose owning group was deleted.
pub const UNCATEGORIZED_GROUP: &str = "Uncategorized";

/// Renders a scalar mapping key as text. Non-scalar keys have no group name.
pub(crate) fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn key_matches(key: &Value, name: &str) -> bool {
    match key {
        Value::String(s) => s == name,
        Value::Number(_) | Value::Bool(_) => key_text(key).is_some_and(|text| text == name),
        _ => false,
    }
}

/// Short description of a YAML value's shape for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
