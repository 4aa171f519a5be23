// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("dashgroups_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn groups(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 64,
            Self::Large => 512,
        }
    }

    pub fn items_per_group(self) -> usize {
        match self {
            Self::Small => 4,
            Self::Medium => 8,
            Self::Large => 16,
        }
    }
}

/// Group names deliberately out of alphabetical order so order recovery matters.
pub fn group_name(index: usize, groups: usize) -> String {
    format!("Group {:04}", (index * 7919) % groups.max(1))
}

pub fn settings_yaml(case: Case) -> String {
    let groups = case.groups();
    let mut out = String::from("title: Bench\nlayout:\n");
    for index in 0..groups {
        let _ = writeln!(out, "  {}:", group_name(index, groups));
        let _ = writeln!(out, "    style: row");
        let _ = writeln!(out, "    columns: {}", 1 + index % 4);
    }
    out.push_str("theme: dark\n");
    out
}

/// Same groups in the legacy index-keyed form, keys shuffled.
pub fn legacy_settings_yaml(case: Case) -> String {
    let groups = case.groups();
    let mut out = String::from("layout:\n");
    for slot in 0..groups {
        let index = (slot * 31) % groups;
        let _ = writeln!(out, "  '{index}':");
        let _ = writeln!(out, "    name: {}", group_name(index, groups));
    }
    out
}

pub fn groups_yaml(case: Case, kind: &str) -> String {
    let groups = case.groups();
    let mut out = String::new();
    for index in 0..groups {
        let _ = writeln!(out, "- {}:", group_name(index, groups));
        for item in 0..case.items_per_group() {
            let _ = writeln!(out, "    - {kind} {index}-{item}:");
            let _ = writeln!(out, "        href: http://{kind}-{index}-{item}.local");
        }
    }
    out
}

/// Writes a full config directory for `case` into `dir`.
pub fn seed_config_dir(dir: &Path, case: Case) {
    std::fs::write(dir.join("settings.yaml"), settings_yaml(case)).expect("write settings");
    std::fs::write(dir.join("services.yaml"), groups_yaml(case, "service"))
        .expect("write services");
    std::fs::write(dir.join("bookmarks.yaml"), groups_yaml(case, "bookmark"))
        .expect("write bookmarks");
}
