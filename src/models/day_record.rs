use crate::core::calculator::shift;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single worked day, as stored under the `registrosHorasExtras` key.
///
/// Field names on the wire follow the stored layout:
/// `{ "id", "data": "YYYY-MM-DD", "entrada": ISO-8601 | "", "saida": ISO-8601 | "" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: String,
    #[serde(rename = "data", with = "date_format")]
    pub date: NaiveDate,
    #[serde(rename = "entrada", with = "timestamp_format", default)]
    pub entry: Option<NaiveDateTime>,
    #[serde(rename = "saida", with = "timestamp_format", default)]
    pub exit: Option<NaiveDateTime>,
}

impl DayRecord {
    /// New empty day with a fresh id.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            entry: None,
            exit: None,
        }
    }

    pub fn with_times(
        date: NaiveDate,
        entry: Option<NaiveDateTime>,
        exit: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            entry,
            exit,
            ..Self::new(date)
        }
    }

    pub fn worked_minutes(&self) -> i64 {
        shift::worked_minutes(self.entry, self.exit)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Short id shown in tables (first block of the UUID).
    pub fn short_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        // stored dates may carry a time part ("2024-03-01T00:00:00.000Z")
        let day = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_err(|_| D::Error::custom(format!("invalid date '{raw}'")))
    }
}

mod timestamp_format {
    use crate::core::calculator::shift::{format_timestamp, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match ts {
            Some(t) => s.serialize_str(&format_timestamp(*t)),
            None => s.serialize_str(""),
        }
    }

    /// Empty, null or unparseable values load as absent.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(parse_timestamp))
    }
}
