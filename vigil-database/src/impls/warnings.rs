use anyhow::{Context as _, bail};
use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::{
    database::Database,
    model::warnings::{WarningMap, WarningRecord},
};

/// Record a warning for `user_id` and return its store-wide id.
pub async fn record_warning(
    db: &Database,
    user_id: &str,
    reason: &str,
    moderator: &str,
    date: NaiveDateTime,
) -> anyhow::Result<u64> {
    let reason = reason.trim();
    if reason.is_empty() {
        bail!("warning reason must not be empty");
    }

    db.mutate(|state| {
        let id = state.next_id;
        state.next_id = id.checked_add(1).context("warning id counter overflowed")?;

        state
            .warnings
            .entry(user_id.to_owned())
            .or_default()
            .push(WarningRecord {
                id,
                reason: reason.to_owned(),
                moderator: moderator.to_owned(),
                date: Some(date.trunc_subsecs(0)),
            });

        Ok(id)
    })
    .await
}

/// Every user with outstanding warnings, each with their records oldest first.
pub async fn list_warnings(db: &Database) -> WarningMap {
    db.snapshot().await
}

/// Remove the warning with `warn_id`, wherever it lives. Returns whether one was found.
///
/// Finding the id more than once means the store is corrupt; that is reported
/// as an error and nothing is removed.
pub async fn remove_warning_by_id(db: &Database, warn_id: u64) -> anyhow::Result<bool> {
    db.mutate(|state| {
        let owners: Vec<String> = state
            .warnings
            .iter()
            .flat_map(|(user_id, records)| {
                records
                    .iter()
                    .filter(|record| record.id == warn_id)
                    .map(move |_| user_id.clone())
            })
            .collect();

        let owner = match owners.as_slice() {
            [] => return Ok(false),
            [owner] => owner,
            _ => bail!(
                "integrity check failed: warning id {} found {} times",
                warn_id,
                owners.len()
            ),
        };

        if let Some(records) = state.warnings.get_mut(owner) {
            records.retain(|record| record.id != warn_id);
            if records.is_empty() {
                state.warnings.remove(owner);
            }
        }

        Ok(true)
    })
    .await
}

/// Remove every warning for `user_id` and return how many were removed.
pub async fn clear_warnings(db: &Database, user_id: &str) -> anyhow::Result<usize> {
    db.mutate(|state| {
        Ok(state
            .warnings
            .remove(user_id)
            .map_or(0, |records| records.len()))
    })
    .await
}

/// Current local time at second precision, as stored on new warnings.
pub fn now_timestamp() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
