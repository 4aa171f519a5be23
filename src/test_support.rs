// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::EngineConfig;
use crate::workspace::Workspace;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub(crate) struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub(crate) fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("dashgroups-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// A temp config directory plus a workspace pointed at it.
pub(crate) struct WorkspaceTestCtx {
    pub(crate) tmp: TempDir,
    pub(crate) workspace: Workspace,
}

impl WorkspaceTestCtx {
    pub(crate) fn new(prefix: &str) -> Self {
        Self::with_config(prefix, |config| config)
    }

    pub(crate) fn with_config(prefix: &str, adjust: impl FnOnce(EngineConfig) -> EngineConfig) -> Self {
        let tmp = TempDir::new(prefix);
        let workspace = Workspace::new(adjust(EngineConfig::new(tmp.path()))).unwrap();
        Self { tmp, workspace }
    }

    pub(crate) fn dir(&self) -> &Path {
        self.tmp.path()
    }

    pub(crate) fn put(&self, file_name: &str, contents: &str) {
        std::fs::write(self.dir().join(file_name), contents).unwrap();
    }

    pub(crate) fn get(&self, file_name: &str) -> String {
        std::fs::read_to_string(self.dir().join(file_name)).unwrap()
    }

    pub(crate) fn exists(&self, file_name: &str) -> bool {
        self.dir().join(file_name).exists()
    }
}
