use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::model::warnings::WarningMap;
use crate::snapshot;

/// In-memory warnings plus the next id to hand out.
#[derive(Clone, Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) warnings: WarningMap,
    pub(crate) next_id: u64,
}

/// Shared warning store handle passed across crates.
///
/// All mutations go through one lock that covers id allocation, the
/// in-memory map and the snapshot write, so concurrent commands can never
/// hand out the same id or interleave file writes.
#[derive(Clone, Debug)]
pub struct Database {
    path: Arc<PathBuf>,
    state: Arc<Mutex<StoreState>>,
}

impl Database {
    /// Load the snapshot at `path` (or start empty) and seed the id counter.
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let warnings = snapshot::load(&path).await?;
        let max_id = snapshot::validate(&warnings)?;

        info!(
            path = %path.display(),
            users = warnings.len(),
            records = warnings.values().map(Vec::len).sum::<usize>(),
            next_id = max_id + 1,
            "Warning store loaded."
        );

        Ok(Self {
            path: Arc::new(path),
            state: Arc::new(Mutex::new(StoreState {
                warnings,
                next_id: max_id + 1,
            })),
        })
    }

    /// Location of the persisted snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current warnings.
    pub async fn snapshot(&self) -> WarningMap {
        self.state.lock().await.warnings.clone()
    }

    /// Id the next recorded warning will receive.
    pub async fn next_id(&self) -> u64 {
        self.state.lock().await.next_id
    }

    /// Run `apply` against a staged copy of the state and persist the result.
    ///
    /// The staged copy only replaces the live state once the snapshot write
    /// succeeds; on failure memory keeps matching what is on disk. Nothing is
    /// written when `apply` leaves the warnings untouched.
    pub(crate) async fn mutate<T, F>(&self, apply: F) -> anyhow::Result<T>
    where
        F: FnOnce(&mut StoreState) -> anyhow::Result<T>,
    {
        let mut state = self.state.lock().await;
        let mut staged = state.clone();
        let outcome = apply(&mut staged)?;

        if staged.warnings != state.warnings {
            snapshot::save(&self.path, &staged.warnings).await?;
        }

        *state = staged;
        Ok(outcome)
    }

    #[cfg(test)]
    pub(crate) fn from_state(path: impl Into<PathBuf>, state: StoreState) -> Self {
        Self {
            path: Arc::new(path.into()),
            state: Arc::new(Mutex::new(state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Database;

    #[tokio::test]
    async fn fresh_store_starts_counting_at_one() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path().join("warnings.json")).await.unwrap();

        assert!(db.snapshot().await.is_empty());
        assert_eq!(db.next_id().await, 1);
    }

    #[tokio::test]
    async fn counter_resumes_after_highest_persisted_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warnings.json");
        tokio::fs::write(
            &path,
            r#"{
                "10": [{"id": 4, "reason": "a", "moderator": "m", "date": "2024-01-01 10:00:00"}],
                "20": [{"id": 11, "reason": "b", "moderator": "m"}]
            }"#,
        )
        .await
        .unwrap();

        let db = Database::open(&path).await.unwrap();
        assert_eq!(db.next_id().await, 12);
    }

    #[tokio::test]
    async fn open_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warnings.json");
        tokio::fs::write(
            &path,
            r#"{
                "10": [{"id": 4, "reason": "a", "moderator": "m"}],
                "20": [{"id": 4, "reason": "b", "moderator": "m"}]
            }"#,
        )
        .await
        .unwrap();

        assert!(Database::open(&path).await.is_err());
    }

    #[tokio::test]
    async fn open_rejects_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warnings.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        assert!(Database::open(&path).await.is_err());
    }
}
