// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_yaml::{Mapping, Value};

use super::is_numeric_key;
use crate::config::LayoutFormat;
use crate::model::settings::LAYOUT_KEY;
use crate::model::{LayoutEntry, Settings};

/// Folds ordered entries into the on-disk `layout` value.
///
/// In mapping form each entry becomes `name: props` with `name` dropped from the props, except
/// for numerically named groups which keep `name` so they read back as names and not as indices.
pub fn fold_layout(entries: &[LayoutEntry], format: LayoutFormat) -> Value {
    match format {
        LayoutFormat::Sequence => {
            Value::Sequence(entries.iter().map(LayoutEntry::to_record).collect())
        }
        LayoutFormat::Mapping => {
            let mut layout = Mapping::with_capacity(entries.len());
            for entry in entries {
                let key = Value::String(entry.name().to_owned());
                if layout.contains_key(&key) {
                    tracing::warn!(group = %entry.name(), "duplicate layout group on write, keeping the first");
                    continue;
                }
                let value = if is_numeric_key(entry.name()) {
                    entry.to_record()
                } else {
                    Value::Mapping(entry.props().clone())
                };
                layout.insert(key, value);
            }
            Value::Mapping(layout)
        }
    }
}

/// The full settings document as written to disk, `layout` in its original position.
pub fn settings_to_value(settings: &Settings, format: LayoutFormat) -> Value {
    let mut root = settings.root().clone();
    root.insert(Value::from(LAYOUT_KEY), fold_layout(settings.layout(), format));
    Value::Mapping(root)
}
