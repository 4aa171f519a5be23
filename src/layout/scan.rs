// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;
use serde_yaml::Value;

use crate::model::key_text;

fn block_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^layout:[ \t]*(?:#.*)?$").expect("valid layout block regex"))
}

const QUOTED_KEY: &str = r#"'(?:[^']|'')*'|"(?:[^"\\]|\\.)*""#;

// A plain key may start with `?`, `:` or `-` only when a non-space follows.
const PLAIN_START: &str = r"(?:[^\s#'\x22?:\-]|[?:\-]\S)";
const PLAIN_REST: &str = r"(?:\S|[ \t]+[^\s#])";

// Group keys sit at exactly two spaces and carry no inline value. `{}`/`null`/`~` are accepted
// as "no value" since an entry without props is written as `Group: {}`.
fn group_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^  (?P<key>{QUOTED_KEY}|{PLAIN_START}{PLAIN_REST}*?)[ \t]*:(?:[ \t]+(?:\{{\}}|null|Null|NULL|~))?[ \t]*(?:#.*)?$"
        ))
        .expect("valid layout key regex")
    })
}

// Long keys are written in the explicit `? key` / `: value` form.
fn explicit_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r"^  \?[ \t]+(?P<key>{QUOTED_KEY}|{PLAIN_START}{PLAIN_REST}*)[ \t]*(?:#.*)?$"
        ))
        .expect("valid explicit layout key regex")
    })
}

/// Group keys of the top-level `layout:` block in file order.
///
/// Returns `None` when the text has no `layout:` line at column 0 followed by an indented block.
pub fn layout_keys(text: &str) -> Option<Vec<String>> {
    let mut lines = text.lines();
    lines.by_ref().find(|line| block_start_re().is_match(line))?;

    let mut keys = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        if !line.starts_with([' ', '\t']) {
            if line.starts_with('#') {
                continue;
            }
            break;
        }
        let caps = group_key_re()
            .captures(line)
            .or_else(|| explicit_key_re().captures(line));
        if let Some(key) = caps.and_then(|caps| decode_key(&caps["key"])) {
            keys.push(key);
        }
    }

    Some(keys)
}

/// Resolves key text the same way the YAML parser resolves the mapping key, so scanned keys
/// compare equal to parsed ones whatever quoting or escapes were used.
fn decode_key(raw: &str) -> Option<String> {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value) => key_text(&value),
        Err(err) => {
            tracing::debug!(key = %raw, error = %err, "cannot decode layout key");
            None
        }
    }
}
