use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used for the `date` field of persisted warnings.
pub const WARNING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// User id (as a string) to that user's warnings, oldest first.
pub type WarningMap = BTreeMap<String, Vec<WarningRecord>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    pub id: u64,
    pub reason: String,
    pub moderator: String,
    /// Older snapshots may lack a date; new records always carry one.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "warning_date"
    )]
    pub date: Option<NaiveDateTime>,
}

impl WarningRecord {
    pub fn date_label(&self) -> String {
        match self.date {
            Some(date) => date.format(WARNING_DATE_FORMAT).to_string(),
            None => "no date".to_owned(),
        }
    }
}

mod warning_date {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::WARNING_DATE_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => {
                serializer.serialize_str(&date.format(WARNING_DATE_FORMAT).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|value| {
            NaiveDateTime::parse_from_str(value.trim(), WARNING_DATE_FORMAT)
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::WarningRecord;

    #[test]
    fn serializes_date_in_snapshot_format() {
        let record = WarningRecord {
            id: 7,
            reason: "spam".to_owned(),
            moderator: "mod1".to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9)
                .and_then(|day| day.and_hms_opt(14, 5, 0)),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "reason": "spam",
                "moderator": "mod1",
                "date": "2024-03-09 14:05:00"
            })
        );
    }

    #[test]
    fn accepts_records_without_date() {
        let record: WarningRecord =
            serde_json::from_str(r#"{"id": 3, "reason": "flood", "moderator": "mod2"}"#).unwrap();

        assert_eq!(record.date, None);
        assert_eq!(record.date_label(), "no date");
    }

    #[test]
    fn rejects_malformed_dates() {
        let parsed = serde_json::from_str::<WarningRecord>(
            r#"{"id": 3, "reason": "flood", "moderator": "mod2", "date": "yesterday"}"#,
        );

        assert!(parsed.is_err());
    }
}
