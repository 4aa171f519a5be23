// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Engine configuration.
//!
//! Everything the engine needs is passed in explicitly; nothing here reads the environment. The
//! CLI is the only place that resolves defaults from flags and env vars.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::store::DocumentKind;

pub const DEFAULT_SERVICES_FILE: &str = "services.yaml";
pub const DEFAULT_BOOKMARKS_FILE: &str = "bookmarks.yaml";
pub const DEFAULT_SETTINGS_FILE: &str = "settings.yaml";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable storage where
    /// possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// On-disk shape of the settings `layout` section.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutFormat {
    /// `layout:` is a mapping keyed by group name. Order lives only in the text.
    #[default]
    Mapping,
    /// `layout:` is a sequence of `{ name: ... }` records and orders itself.
    Sequence,
}

impl FromStr for LayoutFormat {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mapping" => Ok(Self::Mapping),
            "sequence" => Ok(Self::Sequence),
            _ => Err(()),
        }
    }
}

/// What a rename/delete reports when a services/bookmarks step fails after settings committed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Secondary failures are logged and recorded in the report; the call still succeeds.
    #[default]
    BestEffort,
    /// Same steps, no rollback, but the call returns an error carrying the report.
    Strict,
}

impl FromStr for FailurePolicy {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "best_effort" | "best-effort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentNames {
    pub services: String,
    pub bookmarks: String,
    pub settings: String,
}

impl Default for DocumentNames {
    fn default() -> Self {
        Self {
            services: DEFAULT_SERVICES_FILE.to_owned(),
            bookmarks: DEFAULT_BOOKMARKS_FILE.to_owned(),
            settings: DEFAULT_SETTINGS_FILE.to_owned(),
        }
    }
}

impl DocumentNames {
    pub fn file_name(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Services => &self.services,
            DocumentKind::Bookmarks => &self.bookmarks,
            DocumentKind::Settings => &self.settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub config_dir: PathBuf,
    #[serde(default)]
    pub documents: DocumentNames,
    #[serde(default)]
    pub durability: WriteDurability,
    #[serde(default)]
    pub layout_format: LayoutFormat,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl EngineConfig {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            documents: DocumentNames::default(),
            durability: WriteDurability::default(),
            layout_format: LayoutFormat::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn with_layout_format(mut self, layout_format: LayoutFormat) -> Self {
        self.layout_format = layout_format;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_documents(mut self, documents: DocumentNames) -> Self {
        self.documents = documents;
        self
    }

    /// Parses a YAML engine config file body. Missing optional fields take their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
