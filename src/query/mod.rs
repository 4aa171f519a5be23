// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the config directory.
//!
//! Queries provide derived views (e.g. the union of group names) that power autocomplete in the
//! admin UI.

use std::collections::BTreeSet;

use crate::layout::reconstruct_settings;
use crate::model::key_text;
use crate::model::settings::LAYOUT_KEY;
use crate::model::GroupDocument;
use crate::ops::OpError;
use crate::store::DocumentKind;
use crate::workspace::Workspace;

impl Workspace {
    /// Every group name known to services, bookmarks, or the settings layout, sorted.
    ///
    /// Missing documents contribute nothing; so does a services/bookmarks document that is not a
    /// group list.
    pub async fn unified_group_names(&self) -> Result<Vec<String>, OpError> {
        let mut names = BTreeSet::new();

        for kind in [DocumentKind::Services, DocumentKind::Bookmarks] {
            if let Some(groups) = self.groups_for_index(kind).await? {
                names.extend(groups.group_names());
            }
        }

        if let Some(doc) = self.store().read_document(DocumentKind::Settings).await? {
            let raw_keys = doc
                .value
                .get(LAYOUT_KEY)
                .and_then(|layout| layout.as_mapping())
                .map(|layout| layout.keys().filter_map(key_text).collect::<Vec<_>>())
                .unwrap_or_default();

            let settings = reconstruct_settings(&doc.text, doc.value);
            if settings.layout().is_empty() {
                names.extend(raw_keys);
            } else {
                names.extend(settings.group_names().map(str::to_owned));
            }
        }

        Ok(names.into_iter().collect())
    }

    async fn groups_for_index(&self, kind: DocumentKind) -> Result<Option<GroupDocument>, OpError> {
        match self.read_groups(kind).await {
            Ok(groups) => Ok(groups),
            Err(OpError::NotAGroupList { document, source }) => {
                tracing::warn!(document = %document, error = %source, "skipping document for group names");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
