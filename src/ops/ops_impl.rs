// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Per-document group helpers used by the rename/delete sagas.
/// "Not found" is `Ok(false)`/`Ok(None)`; errors are I/O or document-shape failures only.
impl Workspace {
    pub async fn rename_group_in_services(&self, old: &str, new: &str) -> Result<bool, OpError> {
        self.rename_group_in(DocumentKind::Services, old, new).await
    }

    pub async fn rename_group_in_bookmarks(&self, old: &str, new: &str) -> Result<bool, OpError> {
        self.rename_group_in(DocumentKind::Bookmarks, old, new).await
    }

    pub async fn remove_group_from_services(&self, name: &str) -> Result<Option<Vec<Value>>, OpError> {
        self.remove_group_from(DocumentKind::Services, name).await
    }

    pub async fn remove_group_from_bookmarks(
        &self,
        name: &str,
    ) -> Result<Option<Vec<Value>>, OpError> {
        self.remove_group_from(DocumentKind::Bookmarks, name).await
    }

    pub async fn append_to_group_in_services(
        &self,
        name: &str,
        items: Vec<Value>,
    ) -> Result<(), OpError> {
        self.append_to_group_in(DocumentKind::Services, name, items).await
    }

    pub async fn append_to_group_in_bookmarks(
        &self,
        name: &str,
        items: Vec<Value>,
    ) -> Result<(), OpError> {
        self.append_to_group_in(DocumentKind::Bookmarks, name, items).await
    }

    /// Adds the default `Uncategorized` layout entry unless present. Returns whether it was added.
    pub async fn ensure_uncategorized_layout(&self) -> Result<bool, OpError> {
        let mut settings = self.require_settings().await?;
        if settings.contains_group(UNCATEGORIZED_GROUP) {
            return Ok(false);
        }
        settings.push_group(LayoutEntry::uncategorized());
        self.write_settings(&settings).await?;
        Ok(true)
    }

    async fn rename_group_in(&self, kind: DocumentKind, old: &str, new: &str) -> Result<bool, OpError> {
        let Some(mut groups) = self.read_groups(kind).await? else {
            return Ok(false);
        };
        if !groups.rename_group(old, new) {
            return Ok(false);
        }
        self.write_groups(kind, &groups).await?;
        Ok(true)
    }

    async fn remove_group_from(
        &self,
        kind: DocumentKind,
        name: &str,
    ) -> Result<Option<Vec<Value>>, OpError> {
        let Some(mut groups) = self.read_groups(kind).await? else {
            return Ok(None);
        };
        let Some(items) = groups.take_group(name) else {
            return Ok(None);
        };
        self.write_groups(kind, &groups).await?;
        Ok(Some(items))
    }

    async fn append_to_group_in(
        &self,
        kind: DocumentKind,
        name: &str,
        items: Vec<Value>,
    ) -> Result<(), OpError> {
        let mut groups = self.read_groups(kind).await?.unwrap_or_else(GroupDocument::new);
        groups.append_items(name, items);
        self.write_groups(kind, &groups).await
    }

    async fn best_effort_rename(&self, kind: DocumentKind, old: &str, new: &str) -> StepOutcome {
        match self.rename_group_in(kind, old, new).await {
            Ok(true) => {
                tracing::info!(document = %kind, from = %old, to = %new, "renamed group");
                StepOutcome::Committed
            }
            Ok(false) => {
                tracing::info!(document = %kind, group = %old, "group not present, nothing to rename");
                StepOutcome::NotFound
            }
            Err(err) => {
                tracing::error!(document = %kind, group = %old, error = %err, "cannot rename group");
                StepOutcome::failed(&err)
            }
        }
    }

    /// Items are only handed on when the group was removed from disk, so a failed write
    /// never leads to the same items being relocated while still present under the old group.
    async fn best_effort_take(&self, kind: DocumentKind, name: &str) -> (StepOutcome, Vec<Value>) {
        match self.remove_group_from(kind, name).await {
            Ok(Some(items)) => {
                tracing::info!(document = %kind, group = %name, items = items.len(), "removed group");
                (StepOutcome::Committed, items)
            }
            Ok(None) => {
                tracing::info!(document = %kind, group = %name, "group not present, nothing to remove");
                (StepOutcome::NotFound, Vec::new())
            }
            Err(err) => {
                tracing::error!(document = %kind, group = %name, error = %err, "cannot remove group");
                (StepOutcome::failed(&err), Vec::new())
            }
        }
    }

    async fn best_effort_uncategorized_layout(&self) -> StepOutcome {
        match self.ensure_uncategorized_layout().await {
            Ok(true) => {
                tracing::info!(group = UNCATEGORIZED_GROUP, "added layout group for relocated items");
                StepOutcome::Committed
            }
            Ok(false) => StepOutcome::Unchanged,
            Err(err) => {
                tracing::error!(group = UNCATEGORIZED_GROUP, error = %err, "cannot add layout group");
                StepOutcome::failed(&err)
            }
        }
    }

    async fn best_effort_relocate(&self, kind: DocumentKind, items: Vec<Value>) -> StepOutcome {
        if items.is_empty() {
            return StepOutcome::Skipped;
        }
        let count = items.len();
        match self.append_to_group_in(kind, UNCATEGORIZED_GROUP, items).await {
            Ok(()) => {
                tracing::info!(
                    document = %kind,
                    group = UNCATEGORIZED_GROUP,
                    items = count,
                    "relocated orphaned items"
                );
                StepOutcome::Committed
            }
            Err(err) => {
                tracing::error!(
                    document = %kind,
                    group = UNCATEGORIZED_GROUP,
                    items = count,
                    error = %err,
                    "cannot relocate orphaned items"
                );
                StepOutcome::failed(&err)
            }
        }
    }
}
