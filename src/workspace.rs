// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One dashboard config directory with typed document accessors.
//!
//! Group lifecycle operations (`ops`) and the group name index (`query`) are implemented as
//! further `impl Workspace` blocks in their own modules.

use std::path::Path;

use serde_yaml::Value;

use crate::config::{EngineConfig, FailurePolicy, LayoutFormat};
use crate::layout::{reconstruct_settings, settings_to_value};
use crate::model::{value_kind, GroupDocument, Settings};
use crate::ops::OpError;
use crate::store::{ConfigDir, DocumentKind};

#[derive(Debug, Clone)]
pub struct Workspace {
    store: ConfigDir,
    layout_format: LayoutFormat,
    failure_policy: FailurePolicy,
}

impl Workspace {
    pub fn new(config: EngineConfig) -> Result<Self, OpError> {
        let store = ConfigDir::new(config.config_dir)
            .with_documents(config.documents)?
            .with_durability(config.durability);
        Ok(Self {
            store,
            layout_format: config.layout_format,
            failure_policy: config.failure_policy,
        })
    }

    pub fn from_store(store: ConfigDir) -> Self {
        Self {
            store,
            layout_format: LayoutFormat::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_layout_format(mut self, layout_format: LayoutFormat) -> Self {
        self.layout_format = layout_format;
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn store(&self) -> &ConfigDir {
        &self.store
    }

    pub fn layout_format(&self) -> LayoutFormat {
        self.layout_format
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub async fn read_services(&self) -> Result<Option<GroupDocument>, OpError> {
        self.read_groups(DocumentKind::Services).await
    }

    pub async fn write_services(&self, services: &GroupDocument) -> Result<(), OpError> {
        self.write_groups(DocumentKind::Services, services).await
    }

    /// Validates that `value` is a group list before touching the file.
    pub async fn write_services_value(&self, value: Value) -> Result<(), OpError> {
        let services = group_document(DocumentKind::Services, value)?;
        self.write_services(&services).await
    }

    pub async fn read_bookmarks(&self) -> Result<Option<GroupDocument>, OpError> {
        self.read_groups(DocumentKind::Bookmarks).await
    }

    pub async fn write_bookmarks(&self, bookmarks: &GroupDocument) -> Result<(), OpError> {
        self.write_groups(DocumentKind::Bookmarks, bookmarks).await
    }

    /// Validates that `value` is a group list before touching the file.
    pub async fn write_bookmarks_value(&self, value: Value) -> Result<(), OpError> {
        let bookmarks = group_document(DocumentKind::Bookmarks, value)?;
        self.write_bookmarks(&bookmarks).await
    }

    /// Settings with the layout in display order.
    ///
    /// A settings document whose root is not a mapping is an error rather than empty settings, so
    /// callers never write over content they could not read.
    pub async fn read_settings(&self) -> Result<Option<Settings>, OpError> {
        let Some(doc) = self.store.read_document(DocumentKind::Settings).await? else {
            return Ok(None);
        };
        if !doc.value.is_mapping() {
            let found = value_kind(&doc.value);
            tracing::error!(path = %doc.path.display(), found, "settings document is not a mapping");
            return Err(OpError::SettingsNotAMapping {
                path: doc.path,
                found,
            });
        }
        Ok(Some(reconstruct_settings(&doc.text, doc.value)))
    }

    pub async fn write_settings(&self, settings: &Settings) -> Result<(), OpError> {
        let value = settings_to_value(settings, self.layout_format);
        self.store.write(DocumentKind::Settings, &value).await?;
        Ok(())
    }

    pub async fn write_raw(&self, file_name: impl AsRef<Path>, text: &str) -> Result<(), OpError> {
        self.store.write_raw(file_name, text).await?;
        Ok(())
    }

    pub(crate) async fn read_groups(
        &self,
        kind: DocumentKind,
    ) -> Result<Option<GroupDocument>, OpError> {
        match self.store.read(kind).await? {
            Some(value) => group_document(kind, value).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) async fn write_groups(
        &self,
        kind: DocumentKind,
        groups: &GroupDocument,
    ) -> Result<(), OpError> {
        self.store.write(kind, &groups.to_value()).await?;
        Ok(())
    }
}

fn group_document(kind: DocumentKind, value: Value) -> Result<GroupDocument, OpError> {
    GroupDocument::from_value(value).map_err(|source| OpError::NotAGroupList {
        document: kind,
        source,
    })
}
