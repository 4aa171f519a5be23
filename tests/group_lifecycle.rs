// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use dashgroups::{EngineConfig, LayoutEntry, StepOutcome, Workspace, UNCATEGORIZED_GROUP};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = std::env::temp_dir();
        path.push(format!(
            "dashgroups_it_{prefix}_{}_{nanos}_{counter}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

const SERVICES: &str = "\
- Media:
    - Plex:
        href: http://plex.local
- Downloads:
    - Sonarr:
        href: http://sonarr.local
    - Radarr:
        href: http://radarr.local
";

const BOOKMARKS: &str = "\
- Downloads:
    - Indexer:
        - href: https://indexer.example
";

// Display order differs from both alphabetical and services order.
const SETTINGS: &str = "\
title: Lab
layout:
  Downloads:
    style: row
  Media:
    columns: 2
";

fn seeded(prefix: &str) -> (TempDir, Workspace) {
    let tmp = TempDir::new(prefix);
    fs::write(tmp.path().join("services.yaml"), SERVICES).expect("write services");
    fs::write(tmp.path().join("bookmarks.yaml"), BOOKMARKS).expect("write bookmarks");
    fs::write(tmp.path().join("settings.yaml"), SETTINGS).expect("write settings");
    let workspace = Workspace::new(EngineConfig::new(tmp.path())).expect("workspace");
    (tmp, workspace)
}

async fn layout_names(workspace: &Workspace) -> Vec<String> {
    let settings = workspace
        .read_settings()
        .await
        .expect("read settings")
        .expect("settings present");
    settings.group_names().map(str::to_owned).collect()
}

#[tokio::test]
async fn add_rename_delete_keeps_documents_in_step() {
    let (tmp, workspace) = seeded("lifecycle");

    assert_eq!(layout_names(&workspace).await, vec!["Downloads", "Media"]);

    let position = workspace
        .add_group(LayoutEntry::new("Games"))
        .await
        .expect("add group");
    assert_eq!(position, 2);

    let rename = workspace
        .rename_group("Downloads", "Arr")
        .await
        .expect("rename group");
    assert_eq!(rename.position, 0);
    assert_eq!(rename.services, StepOutcome::Committed);
    assert_eq!(rename.bookmarks, StepOutcome::Committed);
    assert_eq!(layout_names(&workspace).await, vec!["Arr", "Media", "Games"]);

    let delete = workspace.delete_group("Arr").await.expect("delete group");
    assert_eq!(delete.services_items_moved, 2);
    assert_eq!(delete.bookmarks_items_moved, 1);
    assert!(delete.is_clean());
    assert_eq!(
        layout_names(&workspace).await,
        vec!["Media", "Games", UNCATEGORIZED_GROUP]
    );

    let services = workspace
        .read_services()
        .await
        .expect("read services")
        .expect("services present");
    assert_eq!(
        services.group_names().collect::<Vec<_>>(),
        vec!["Media", UNCATEGORIZED_GROUP]
    );
    assert_eq!(
        services.items(UNCATEGORIZED_GROUP).map(<[_]>::len),
        Some(2)
    );

    let names = workspace
        .unified_group_names()
        .await
        .expect("group names");
    assert_eq!(names, vec!["Games", "Media", UNCATEGORIZED_GROUP]);

    let settings_text = fs::read_to_string(tmp.path().join("settings.yaml")).expect("read");
    assert!(settings_text.starts_with("title: Lab\nlayout:\n"), "{settings_text}");
}

#[tokio::test]
async fn hand_edited_order_survives_a_rewrite() {
    let tmp = TempDir::new("order");
    fs::write(
        tmp.path().join("settings.yaml"),
        "layout:\n  # pinned first\n  Zulu:\n  'Alpha': {}\n  \"Mike\":\n    header: false\n",
    )
    .expect("write settings");
    let workspace = Workspace::new(EngineConfig::new(tmp.path())).expect("workspace");

    assert_eq!(layout_names(&workspace).await, vec!["Zulu", "Alpha", "Mike"]);

    workspace
        .rename_group("Alpha", "Bravo")
        .await
        .expect("rename group");
    assert_eq!(layout_names(&workspace).await, vec!["Zulu", "Bravo", "Mike"]);
}
