//! Data models shared by the collection and query pipelines.
//!
//! - [`RawItem`]: one article block as read from a results page
//! - [`NormalizedDate`]: an absolute timestamp plus whether it was actually read
//! - [`NewsRecord`]: the persisted, fully-populated article
//!
//! Timestamps are local wall-clock times without an offset, matching the
//! snapshot format consumed by the dashboard.

use crate::dates;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single article block extracted by the parser.
///
/// Optional fields are empty strings when the block did not carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub press: String,
    /// The source's own date text, e.g. `"3시간 전"` or `"2024.01.01."`.
    pub date_text: String,
}

/// Whether a timestamp came from the source text or was filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateConfidence {
    Parsed,
    /// The text was empty or unrecognised; the timestamp is the evaluation time.
    Defaulted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedDate {
    pub at: NaiveDateTime,
    pub confidence: DateConfidence,
}

impl NormalizedDate {
    pub fn parsed(at: NaiveDateTime) -> Self {
        Self {
            at,
            confidence: DateConfidence::Parsed,
        }
    }

    pub fn defaulted(now: NaiveDateTime) -> Self {
        Self {
            at: now,
            confidence: DateConfidence::Defaulted,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        self.confidence == DateConfidence::Defaulted
    }
}

/// One collected article, as stored in the snapshot.
///
/// Within one collection run `title` is unique across the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub press: String,
    /// Original date text, kept for display.
    #[serde(rename = "date", default)]
    pub display_date: String,
    pub link: String,
    #[serde(with = "iso_datetime")]
    pub parsed_date: NaiveDateTime,
    pub keyword: String,
    #[serde(with = "iso_datetime")]
    pub collected_at: NaiveDateTime,
}

impl NewsRecord {
    /// Build a record from a parsed item.
    pub fn from_item(
        item: RawItem,
        parsed_date: NaiveDateTime,
        keyword: &str,
        collected_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: item.title,
            summary: item.summary,
            press: item.press,
            display_date: item.date_text,
            link: item.link,
            parsed_date,
            keyword: keyword.to_string(),
            collected_at,
        }
    }

    /// Re-derive whether `parsed_date` was read from the source or defaulted.
    ///
    /// The snapshot does not store this, but the display text is retained and
    /// the outcome does not depend on the evaluation time.
    pub fn date_confidence(&self) -> DateConfidence {
        dates::normalize(&self.display_date, self.collected_at).confidence
    }
}

/// Serde adapter for `YYYY-MM-DDTHH:MM:SS[.fraction]` local timestamps.
///
/// Reading also accepts RFC 3339 values with an offset (including `Z`),
/// converted to local time.
pub mod iso_datetime {
    use chrono::{DateTime, Local, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {text}")))
    }

    pub fn parse(text: &str) -> Option<NaiveDateTime> {
        let text = text.trim();
        text.parse::<NaiveDateTime>().ok().or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn sample() -> NewsRecord {
        NewsRecord {
            title: "외국인 알바 채용".to_string(),
            summary: "요약".to_string(),
            press: "연합뉴스".to_string(),
            display_date: "3시간 전".to_string(),
            link: "https://example.com/a".to_string(),
            parsed_date: at(9, 0, 0),
            keyword: "외국인 알바".to_string(),
            collected_at: at(12, 0, 0),
        }
    }

    #[test]
    fn test_record_uses_snapshot_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "title",
            "summary",
            "press",
            "date",
            "link",
            "parsed_date",
            "keyword",
            "collected_at",
        ] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(json["parsed_date"], "2024-01-01T09:00:00");
        assert_eq!(json["date"], "3시간 전");
    }

    #[test]
    fn test_record_reads_fractional_seconds() {
        let json = r#"{
            "title": "t", "summary": "", "press": "", "date": "",
            "link": "https://example.com",
            "parsed_date": "2024-01-01T09:00:00.123456",
            "keyword": "k",
            "collected_at": "2024-01-01T12:00:00"
        }"#;
        let record: NewsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.parsed_date.format("%H:%M:%S%.6f").to_string(), "09:00:00.123456");
        assert_eq!(record.collected_at, at(12, 0, 0));
    }

    #[test]
    fn test_record_rejects_garbage_timestamp() {
        let json = r#"{"title": "t", "link": "l", "parsed_date": "yesterday",
                       "keyword": "k", "collected_at": "2024-01-01T12:00:00"}"#;
        assert!(serde_json::from_str::<NewsRecord>(json).is_err());
    }

    #[test]
    fn test_iso_parse_accepts_offsets() {
        assert!(iso_datetime::parse("2024-01-01T09:00:00Z").is_some());
        assert!(iso_datetime::parse("2024-01-01T09:00:00+09:00").is_some());
        assert_eq!(iso_datetime::parse("2024-01-01T09:00:00"), Some(at(9, 0, 0)));
        assert_eq!(iso_datetime::parse("not a date"), None);
    }

    #[test]
    fn test_date_confidence_from_display_text() {
        let mut record = sample();
        assert_eq!(record.date_confidence(), DateConfidence::Parsed);
        record.display_date = "어제".to_string();
        assert_eq!(record.date_confidence(), DateConfidence::Defaulted);
        record.display_date = String::new();
        assert_eq!(record.date_confidence(), DateConfidence::Defaulted);
    }
}
