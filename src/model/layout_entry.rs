// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_yaml::{Mapping, Value};

use super::UNCATEGORIZED_GROUP;

const NAME_FIELD: &str = "name";

/// How one group is displayed: its name plus free-form display props.
///
/// Props keep their file order and never contain `name`; the name lives in its own field.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEntry {
    name: String,
    props: Mapping,
}

impl LayoutEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: Mapping::new(),
        }
    }

    pub fn with_props(name: impl Into<String>, props: Mapping) -> Self {
        Self {
            name: name.into(),
            props: without_name(props),
        }
    }

    /// Default entry synthesized for the `Uncategorized` group.
    pub fn uncategorized() -> Self {
        let mut props = Mapping::new();
        props.insert(Value::from("header"), Value::Bool(true));
        props.insert(Value::from("style"), Value::from("row"));
        props.insert(Value::from("columns"), Value::from(4));
        Self {
            name: UNCATEGORIZED_GROUP.to_owned(),
            props,
        }
    }

    /// Builds an entry from a `{ name: ..., ... }` record. `None` without a usable name.
    pub fn from_record(value: &Value) -> Option<Self> {
        let mapping = value.as_mapping()?;
        let name = record_name(mapping)?;
        Some(Self::with_props(name, mapping.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn props(&self) -> &Mapping {
        &self.props
    }

    pub fn set_prop(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if key == NAME_FIELD {
            return;
        }
        self.props.insert(Value::String(key), value);
    }

    pub fn header(&self) -> Option<bool> {
        self.props.get("header").and_then(Value::as_bool)
    }

    pub fn style(&self) -> Option<&str> {
        self.props.get("style").and_then(Value::as_str)
    }

    pub fn columns(&self) -> Option<u64> {
        self.props.get("columns").and_then(Value::as_u64)
    }

    /// The entry as a record with `name` first, followed by its props.
    pub fn to_record(&self) -> Value {
        let mut record = Mapping::with_capacity(self.props.len() + 1);
        record.insert(Value::from(NAME_FIELD), Value::String(self.name.clone()));
        for (key, value) in &self.props {
            record.insert(key.clone(), value.clone());
        }
        Value::Mapping(record)
    }
}

/// Non-empty string `name` field of a record.
pub(crate) fn record_name(mapping: &Mapping) -> Option<String> {
    let name = mapping.get(NAME_FIELD)?.as_str()?;
    if name.trim().is_empty() {
        return None;
    }
    Some(name.to_owned())
}

pub(crate) fn without_name(props: Mapping) -> Mapping {
    props
        .into_iter()
        .filter(|(key, _)| key.as_str() != Some(NAME_FIELD))
        .collect()
}
