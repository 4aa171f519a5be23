// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared test documents.

use serde_yaml::Value;

pub(crate) const SERVICES_YAML: &str = "\
- Media:
    - Plex:
        href: http://plex.local
        icon: plex.png
    - Jellyfin:
        href: http://jellyfin.local
- Infra:
    - Router:
        href: http://192.168.1.1
- Old:
    - One:
        href: http://one.local
    - Two:
        href: http://two.local
    - Three:
        href: http://three.local
";

pub(crate) const BOOKMARKS_YAML: &str = "\
- Media:
    - IMDb:
        - href: https://imdb.com
- Old:
    - Forum:
        - href: https://forum.example
    - Wiki:
        - href: https://wiki.example
";

pub(crate) const SETTINGS_YAML: &str = "\
title: Home
layout:
  Media:
    header: true
    style: row
    columns: 3
  Infra:
    style: column
  Old:
    header: false
theme: dark
";

/// Settings whose layout was written in the legacy index-keyed form.
pub(crate) const LEGACY_SETTINGS_YAML: &str = "\
layout:
  '2':
    name: Old
    header: false
  '0':
    name: Media
    columns: 3
  '1':
    name: Infra
";

pub(crate) fn parse(raw: &str) -> Value {
    serde_yaml::from_str(raw).expect("fixture yaml")
}
