// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout order recovery for `settings.yaml`.
//!
//! On disk the `layout` section is a mapping keyed by group name, and the order of those keys is
//! the display order. The parsed tree is not trusted for ordering: the order is recovered from the
//! raw text and the parsed values are attached to the recovered keys. A legacy encoding keyed by
//! `"0"`, `"1"`, ... with the real name nested as `name` is normalized on the way in.
//!
//! The write path folds the ordered entries back into the same mapping shape.

pub mod fold;
pub mod reconstruct;
pub mod scan;

pub use fold::{fold_layout, settings_to_value};
pub use reconstruct::{reconstruct_layout, reconstruct_settings};
pub use scan::layout_keys;

/// `^\d+$` or `^'\d+'$`.
pub(crate) fn is_numeric_key(key: &str) -> bool {
    let digits = key
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .unwrap_or(key);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
