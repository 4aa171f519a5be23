// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_yaml::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::{DocumentNames, WriteDurability};

/// The three logical documents of a dashboard config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Services,
    Bookmarks,
    Settings,
}

impl DocumentKind {
    pub const ALL: [Self; 3] = [Self::Services, Self::Bookmarks, Self::Settings];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Bookmarks => "bookmarks",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    InvalidFileName {
        value: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Yaml { path, source } => {
                write!(f, "cannot serialize yaml for {path:?}: {source}")
            }
            Self::InvalidFileName { value } => {
                write!(f, "invalid file name inside config dir: {value:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml { source, .. } => Some(source),
            Self::InvalidFileName { .. } => None,
        }
    }
}

/// A document as found on disk: the raw text and its parsed value.
///
/// The text is kept next to the value because the settings layout order is recovered from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub path: PathBuf,
    pub text: String,
    pub value: Value,
}

#[derive(Debug, Clone)]
pub struct ConfigDir {
    root: PathBuf,
    documents: DocumentNames,
    durability: WriteDurability,
}

impl ConfigDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            documents: DocumentNames::default(),
            durability: WriteDurability::default(),
        }
    }

    /// Every configured file name must stay inside the config dir.
    pub fn with_documents(mut self, documents: DocumentNames) -> Result<Self, StoreError> {
        for kind in DocumentKind::ALL {
            validate_file_name(Path::new(documents.file_name(kind)))?;
        }
        self.documents = documents;
        Ok(self)
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn documents(&self) -> &DocumentNames {
        &self.documents
    }

    pub fn path_for(&self, kind: DocumentKind) -> PathBuf {
        self.root.join(self.documents.file_name(kind))
    }

    /// Reads and parses one document.
    ///
    /// Returns `Ok(None)` when the file is missing, blank, parses to null, or is not valid YAML.
    /// Only genuine I/O failures are errors.
    pub async fn read_document(&self, kind: DocumentKind) -> Result<Option<RawDocument>, StoreError> {
        let path = self.path_for(kind);
        let text = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::info!(document = %kind, path = %path.display(), "document not found");
                return Ok(None);
            }
            Err(source) => {
                tracing::error!(
                    document = %kind,
                    path = %path.display(),
                    error = %source,
                    "cannot read document"
                );
                return Err(StoreError::Io { path, source });
            }
        };

        if text.trim().is_empty() {
            tracing::info!(document = %kind, path = %path.display(), "document is empty");
            return Ok(None);
        }

        let value: Value = match serde_yaml::from_str(&text) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    document = %kind,
                    path = %path.display(),
                    error = %err,
                    "document is not valid yaml, treating as absent"
                );
                return Ok(None);
            }
        };

        if value.is_null() {
            tracing::info!(document = %kind, path = %path.display(), "document has no content");
            return Ok(None);
        }

        tracing::debug!(document = %kind, path = %path.display(), "document read");
        Ok(Some(RawDocument { path, text, value }))
    }

    pub async fn read(&self, kind: DocumentKind) -> Result<Option<Value>, StoreError> {
        Ok(self.read_document(kind).await?.map(|doc| doc.value))
    }

    /// Serializes `value` and atomically replaces the document on disk.
    pub async fn write(&self, kind: DocumentKind, value: &Value) -> Result<(), StoreError> {
        let path = self.path_for(kind);
        let text = to_yaml_string(&path, value)?;

        match write_atomic_in_dir(&self.root, &path, text.as_bytes(), self.durability).await {
            Ok(()) => {
                tracing::debug!(document = %kind, path = %path.display(), "document written");
                Ok(())
            }
            Err(err) => {
                tracing::error!(document = %kind, path = %path.display(), error = %err, "cannot write document");
                Err(err)
            }
        }
    }

    /// Writes caller-provided text verbatim to `file_name` inside the config dir.
    pub async fn write_raw(&self, file_name: impl AsRef<Path>, text: &str) -> Result<(), StoreError> {
        let file_name = file_name.as_ref();
        validate_file_name(file_name)?;

        let path = self.root.join(file_name);
        match write_atomic_in_dir(&self.root, &path, text.as_bytes(), self.durability).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "raw file written");
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "cannot write raw file");
                Err(err)
            }
        }
    }
}

// Extracted serialization and atomic write helpers for `ConfigDir`.
include!("config_dir/helpers.rs");
