// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Group lifecycle operations across the three config documents.
//!
//! Rename and delete are short sagas. Settings is authoritative: its step must succeed or the
//! operation fails before anything else is written. Services and bookmarks follow on a
//! best-effort basis; their outcome is recorded per step in the returned report instead of
//! failing the call (unless the workspace runs with [`FailurePolicy::Strict`]). There is no
//! rollback.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_yaml::Value;

use crate::config::FailurePolicy;
use crate::model::{GroupDocument, GroupDocumentError, LayoutEntry, Settings, UNCATEGORIZED_GROUP};
use crate::store::{DocumentKind, StoreError};
use crate::workspace::Workspace;

/// Result of one best-effort saga step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The document was rewritten.
    Committed,
    /// The document or the group in it does not exist; nothing written.
    NotFound,
    /// Already in the desired state; nothing written.
    Unchanged,
    /// Not applicable to this run (e.g. no items to relocate).
    Skipped,
    /// The step errored; logged and left as is.
    Failed { message: String },
}

impl StepOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    fn failed(err: &OpError) -> Self {
        Self::Failed {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameReport {
    pub old_name: String,
    pub new_name: String,
    /// Index of the renamed entry in the settings layout.
    pub position: usize,
    pub services: StepOutcome,
    pub bookmarks: StepOutcome,
}

impl RenameReport {
    /// Labels of the best-effort steps that failed.
    pub fn failed_steps(&self) -> Vec<&'static str> {
        [("services", &self.services), ("bookmarks", &self.bookmarks)]
            .into_iter()
            .filter(|(_, outcome)| outcome.is_failed())
            .map(|(label, _)| label)
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failed_steps().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub group: String,
    /// Index the entry had in the settings layout.
    pub position: usize,
    pub services: StepOutcome,
    pub bookmarks: StepOutcome,
    pub services_items_moved: usize,
    pub bookmarks_items_moved: usize,
    pub uncategorized_layout: StepOutcome,
    pub services_relocation: StepOutcome,
    pub bookmarks_relocation: StepOutcome,
}

impl DeleteReport {
    pub fn failed_steps(&self) -> Vec<&'static str> {
        [
            ("services", &self.services),
            ("bookmarks", &self.bookmarks),
            ("uncategorized_layout", &self.uncategorized_layout),
            ("services_relocation", &self.services_relocation),
            ("bookmarks_relocation", &self.bookmarks_relocation),
        ]
        .into_iter()
        .filter(|(_, outcome)| outcome.is_failed())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.failed_steps().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SagaReport {
    Rename(RenameReport),
    Delete(DeleteReport),
}

impl SagaReport {
    pub fn failed_steps(&self) -> Vec<&'static str> {
        match self {
            Self::Rename(report) => report.failed_steps(),
            Self::Delete(report) => report.failed_steps(),
        }
    }
}

#[derive(Debug)]
pub enum OpError {
    Store(StoreError),
    NotAGroupList {
        document: DocumentKind,
        source: GroupDocumentError,
    },
    SettingsMissing {
        path: PathBuf,
    },
    /// Settings parsed but its root is not a mapping, so it cannot be rewritten safely.
    SettingsNotAMapping {
        path: PathBuf,
        found: &'static str,
    },
    GroupNotFound {
        name: String,
    },
    GroupExists {
        name: String,
    },
    InvalidGroupName {
        name: String,
        reason: &'static str,
    },
    /// Settings committed but at least one best-effort step failed (strict policy only).
    SecondaryStepsFailed {
        report: Box<SagaReport>,
    },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(source) => write!(f, "{source}"),
            Self::NotAGroupList { document, source } => {
                write!(f, "{document} document is not a group list: {source}")
            }
            Self::SettingsMissing { path } => {
                write!(f, "settings document missing or unreadable at {path:?}")
            }
            Self::SettingsNotAMapping { path, found } => {
                write!(f, "settings document at {path:?} is {found}, expected a mapping")
            }
            Self::GroupNotFound { name } => write!(f, "group not found in settings layout: {name:?}"),
            Self::GroupExists { name } => {
                write!(f, "group already exists in settings layout: {name:?}")
            }
            Self::InvalidGroupName { name, reason } => {
                write!(f, "invalid group name {name:?}: {reason}")
            }
            Self::SecondaryStepsFailed { report } => write!(
                f,
                "settings updated but follow-up steps failed: {}",
                report.failed_steps().join(", ")
            ),
        }
    }
}

impl std::error::Error for OpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(source) => Some(source),
            Self::NotAGroupList { source, .. } => Some(source),
            Self::SettingsMissing { .. }
            | Self::SettingsNotAMapping { .. }
            | Self::GroupNotFound { .. }
            | Self::GroupExists { .. }
            | Self::InvalidGroupName { .. }
            | Self::SecondaryStepsFailed { .. } => None,
        }
    }
}

impl From<StoreError> for OpError {
    fn from(source: StoreError) -> Self {
        Self::Store(source)
    }
}

fn validate_group_name(name: &str) -> Result<&str, OpError> {
    if name.trim().is_empty() {
        return Err(OpError::InvalidGroupName {
            name: name.to_owned(),
            reason: "must not be empty",
        });
    }
    if name.contains(['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}']) {
        return Err(OpError::InvalidGroupName {
            name: name.to_owned(),
            reason: "must be a single line",
        });
    }
    Ok(name)
}

impl Workspace {
    /// Renames a group everywhere it appears, keeping its position and items.
    pub async fn rename_group(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<RenameReport, OpError> {
        let old_name = validate_group_name(old_name)?;
        let new_name = validate_group_name(new_name)?;
        if old_name == new_name {
            return Err(OpError::InvalidGroupName {
                name: new_name.to_owned(),
                reason: "new name equals the current name",
            });
        }

        let mut settings = self.require_settings().await?;
        if !settings.contains_group(old_name) {
            return Err(OpError::GroupNotFound {
                name: old_name.to_owned(),
            });
        }
        if settings.contains_group(new_name) {
            return Err(OpError::GroupExists {
                name: new_name.to_owned(),
            });
        }
        let Some(position) = settings.rename_group(old_name, new_name) else {
            return Err(OpError::GroupNotFound {
                name: old_name.to_owned(),
            });
        };
        self.write_settings(&settings).await?;
        tracing::info!(from = %old_name, to = %new_name, position, "renamed layout group");

        let services = self
            .best_effort_rename(DocumentKind::Services, old_name, new_name)
            .await;
        let bookmarks = self
            .best_effort_rename(DocumentKind::Bookmarks, old_name, new_name)
            .await;

        let report = RenameReport {
            old_name: old_name.to_owned(),
            new_name: new_name.to_owned(),
            position,
            services,
            bookmarks,
        };

        if self.failure_policy() == FailurePolicy::Strict && !report.is_clean() {
            return Err(OpError::SecondaryStepsFailed {
                report: Box::new(SagaReport::Rename(report)),
            });
        }
        Ok(report)
    }

    /// Deletes a group's layout entry and moves its items into `Uncategorized`.
    pub async fn delete_group(&self, name: &str) -> Result<DeleteReport, OpError> {
        let name = validate_group_name(name)?;

        let mut settings = self.require_settings().await?;
        let Some((position, _)) = settings.remove_group(name) else {
            return Err(OpError::GroupNotFound {
                name: name.to_owned(),
            });
        };
        self.write_settings(&settings).await?;
        tracing::info!(group = %name, position, "removed layout group");

        let (services, services_items) = self.best_effort_take(DocumentKind::Services, name).await;
        let (bookmarks, bookmarks_items) =
            self.best_effort_take(DocumentKind::Bookmarks, name).await;

        let uncategorized_layout = if services_items.is_empty() && bookmarks_items.is_empty() {
            StepOutcome::Skipped
        } else {
            self.best_effort_uncategorized_layout().await
        };

        let services_items_moved = services_items.len();
        let bookmarks_items_moved = bookmarks_items.len();
        let services_relocation = self
            .best_effort_relocate(DocumentKind::Services, services_items)
            .await;
        let bookmarks_relocation = self
            .best_effort_relocate(DocumentKind::Bookmarks, bookmarks_items)
            .await;

        let report = DeleteReport {
            group: name.to_owned(),
            position,
            services,
            bookmarks,
            services_items_moved,
            bookmarks_items_moved,
            uncategorized_layout,
            services_relocation,
            bookmarks_relocation,
        };

        if self.failure_policy() == FailurePolicy::Strict && !report.is_clean() {
            return Err(OpError::SecondaryStepsFailed {
                report: Box::new(SagaReport::Delete(report)),
            });
        }
        Ok(report)
    }

    /// Appends a new layout entry. Creates the settings document if it does not exist yet.
    pub async fn add_group(&self, entry: LayoutEntry) -> Result<usize, OpError> {
        validate_group_name(entry.name())?;

        let mut settings = self.read_settings().await?.unwrap_or_default();
        if settings.contains_group(entry.name()) {
            return Err(OpError::GroupExists {
                name: entry.name().to_owned(),
            });
        }
        let name = entry.name().to_owned();
        let position = settings.push_group(entry);
        self.write_settings(&settings).await?;
        tracing::info!(group = %name, position, "added layout group");
        Ok(position)
    }

    async fn require_settings(&self) -> Result<Settings, OpError> {
        self.read_settings()
            .await?
            .ok_or_else(|| OpError::SettingsMissing {
                path: self.store().path_for(DocumentKind::Settings),
            })
    }
}

// Extracted per-document helpers and best-effort step wrappers.
include!("ops_impl.rs");
