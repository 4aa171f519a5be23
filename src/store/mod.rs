// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the dashboard config directory.
//!
//! The store module reads/writes the three YAML documents (services, bookmarks, settings) that
//! live side by side in one config directory. It knows nothing about groups or layout order; it
//! only owns the missing/empty/malformed read semantics and the atomic overwrite contract.

pub mod config_dir;

pub use config_dir::{ConfigDir, DocumentKind, RawDocument, StoreError};
