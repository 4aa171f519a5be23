// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dashgroups: group lifecycle and layout-order sync for dashboard YAML configs.
//!
//! A dashboard config directory holds `services.yaml`, `bookmarks.yaml` and `settings.yaml`.
//! Groups appear in all three; `settings.yaml` owns their display order. This crate recovers that
//! order from disk and keeps the three documents in step when groups are renamed or deleted.

pub mod config;
pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
pub mod workspace;

pub use config::{EngineConfig, FailurePolicy, LayoutFormat, WriteDurability};
pub use model::{GroupDocument, LayoutEntry, Settings, UNCATEGORIZED_GROUP};
pub use ops::{DeleteReport, OpError, RenameReport, SagaReport, StepOutcome};
pub use workspace::Workspace;

#[cfg(test)]
pub(crate) mod test_support;
