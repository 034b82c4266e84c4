use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::model::warnings::WarningMap;

/// Read the snapshot at `path`. A missing file yields an empty map.
pub(crate) async fn load(path: &Path) -> anyhow::Result<WarningMap> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "No warning snapshot found; starting with an empty store.");
            return Ok(WarningMap::new());
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read warning snapshot `{}`", path.display()));
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(WarningMap::new());
    }

    let mut warnings: WarningMap = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse warning snapshot `{}`", path.display()))?;
    warnings.retain(|_, records| !records.is_empty());

    Ok(warnings)
}

/// Check that every id is unique across all users and return the largest one.
pub(crate) fn validate(warnings: &WarningMap) -> anyhow::Result<u64> {
    let mut seen = HashSet::new();
    let mut max_id = 0;

    for (user_id, records) in warnings {
        for record in records {
            if !seen.insert(record.id) {
                bail!(
                    "integrity check failed: warning id {} is duplicated (seen again under user {})",
                    record.id,
                    user_id
                );
            }
            max_id = max_id.max(record.id);
        }
    }

    Ok(max_id)
}

/// Replace the snapshot at `path` with `warnings`.
///
/// The document is written to a sibling temp file, flushed to disk and then
/// renamed over the target so a crash mid-write never leaves a torn file.
pub(crate) async fn save(path: &Path, warnings: &WarningMap) -> anyhow::Result<()> {
    let payload =
        serde_json::to_vec_pretty(warnings).context("failed to serialize warning snapshot")?;
    let staging = staging_path(path);

    if let Err(err) = write_staging(&staging, &payload).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(err);
    }

    if let Err(err) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(err).with_context(|| {
            format!("failed to replace warning snapshot `{}`", path.display())
        });
    }

    debug!(path = %path.display(), users = warnings.len(), "Warning snapshot written.");
    Ok(())
}

async fn write_staging(staging: &Path, payload: &[u8]) -> anyhow::Result<()> {
    let mut file = tokio::fs::File::create(staging)
        .await
        .with_context(|| format!("failed to create `{}`", staging.display()))?;
    file.write_all(payload)
        .await
        .with_context(|| format!("failed to write `{}`", staging.display()))?;
    file.flush()
        .await
        .with_context(|| format!("failed to write `{}`", staging.display()))?;
    file.sync_all()
        .await
        .with_context(|| format!("failed to sync `{}`", staging.display()))?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "warnings.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
