// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dashgroups and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// `serde_yaml` emits block style with 2-space indentation, never emits anchors, does not fold
/// long scalars, and keeps mapping keys in insertion order.
fn to_yaml_string(path: &Path, value: &Value) -> Result<String, StoreError> {
    let mut text = serde_yaml::to_string(value).map_err(|source| StoreError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

fn validate_file_name(path: &Path) -> Result<(), StoreError> {
    if path.as_os_str().is_empty() || path.is_absolute() {
        return Err(StoreError::InvalidFileName {
            value: path.to_path_buf(),
        });
    }

    let mut has_normal = false;
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::ParentDir => {
                return Err(StoreError::InvalidFileName {
                    value: path.to_path_buf(),
                });
            }
            Component::CurDir => {}
            Component::Normal(_) => has_normal = true,
        }
    }

    if !has_normal {
        return Err(StoreError::InvalidFileName {
            value: path.to_path_buf(),
        });
    }

    Ok(())
}

async fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to).await {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to).await;
                fs::rename(from, to).await
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to).await
    }
}

async fn write_atomic_in_dir(
    root: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    fs::create_dir_all(root).await.map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let Some(parent) = path.parent() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no parent"),
        });
    };

    if parent != root {
        fs::create_dir_all(parent).await.map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".dashgroups.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .await
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    let written = async {
        file.write_all(contents).await?;
        file.flush().await?;
        if durability == WriteDurability::Durable {
            file.sync_all().await?;
        }
        Ok::<(), io::Error>(())
    }
    .await;
    drop(file);

    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(StoreError::Io {
            path: tmp_path,
            source,
        });
    }

    if let Err(source) = rename_overwrite(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    // The rename already committed the document. A failed directory sync is logged, not returned.
    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            if let Err(err) = sync_dir(parent).await {
                tracing::warn!(dir = %parent.display(), error = %err, "directory sync failed after rename");
            }
        }
    }

    Ok(())
}

#[cfg(unix)]
async fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir).await?.sync_all().await
}
