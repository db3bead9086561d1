//! Labeled-record ingestion.
//!
//! Training data arrives in one of two shapes:
//!
//! 1. A single JSON object whose `samples` field holds an array of record
//!    objects (the app's batch-export shape).
//! 2. Newline-delimited JSON objects, one record per line (raw log
//!    extraction output).
//!
//! The shape is selected once, up front, by [`detect_format`]. A record
//! carries its text in `text` (preferred) or `merchant`, and its label in
//! `category` (preferred) or `label`. Records missing either value are
//! dropped silently; malformed JSON lines or array items are skipped.
//! Both kinds of drops are only counted in [`IngestStats`]; a bad record
//! never aborts ingestion.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Field of the batch-export object that holds the record list.
pub const BATCH_LIST_FIELD: &str = "samples";

/// The two supported input shapes.
///
/// Selected once by a deterministic probe of the input's first
/// non-whitespace character; never re-detected mid-stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// One JSON object with a `samples` array of records.
    BatchObject,
    /// One JSON record object per line.
    NewlineDelimited,
}

/// Probe the input and pick an ingestion strategy.
///
/// An input whose first non-whitespace character is `{` is treated as a
/// candidate batch object. The batch path still falls back to
/// newline-delimited parsing if the whole-input parse fails or the
/// `samples` list is absent, so a misdetection here costs one extra parse
/// attempt, not any records.
pub fn detect_format(input: &str) -> SourceFormat {
    match input.trim_start().chars().next() {
        Some('{') => SourceFormat::BatchObject,
        _ => SourceFormat::NewlineDelimited,
    }
}

/// A record as it appears on the wire, before field resolution.
///
/// Unknown fields (sender, amount, timestamps, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Primary text field.
    #[serde(default)]
    pub text: Option<String>,
    /// Fallback text field.
    #[serde(default)]
    pub merchant: Option<String>,
    /// Primary label field (app exports).
    #[serde(default)]
    pub category: Option<String>,
    /// Fallback label field (log extraction).
    #[serde(default)]
    pub label: Option<String>,
}

impl RawRecord {
    /// Resolve field precedence into a labeled record.
    ///
    /// Empty strings count as missing. Returns `None` when either the
    /// text or the label cannot be resolved.
    pub fn resolve(self) -> Option<LabeledRecord> {
        let text = pick(self.text, self.merchant)?;
        let category = pick(self.category, self.label)?;
        Some(LabeledRecord { text, category })
    }
}

fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
}

/// A normalized (text, category) record ready for tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRecord {
    pub text: String,
    pub category: String,
}

/// Counters for everything ingestion skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct IngestStats {
    /// Records (lines or array items) encountered, valid or not.
    pub records_seen: usize,
    /// Records skipped because their JSON did not parse.
    pub parse_errors: usize,
    /// Records dropped for lacking a resolvable text or label value.
    pub missing_fields: usize,
}

impl IngestStats {
    /// Total number of records skipped for any reason.
    pub fn skipped(&self) -> usize {
        self.parse_errors + self.missing_fields
    }
}

/// Normalize the input into labeled records, whatever its shape.
///
/// Never fails: an input that yields no usable records returns an empty
/// vector, and the caller decides whether that is fatal (it is, for
/// training).
pub fn read_records(input: &str) -> (Vec<LabeledRecord>, IngestStats) {
    match detect_format(input) {
        SourceFormat::BatchObject => match parse_batch_items(input) {
            Some(items) => {
                debug!("detected batch-export object with {} samples", items.len());
                collect_items(items)
            }
            None => {
                debug!(
                    "object-leading input has no '{BATCH_LIST_FIELD}' list; \
                     re-reading as newline-delimited records"
                );
                read_newline_delimited(input)
            }
        },
        SourceFormat::NewlineDelimited => read_newline_delimited(input),
    }
}

/// Try the batch-object parse: whole input as one JSON object holding a
/// `samples` array. `None` means "not this shape" and triggers the
/// newline-delimited fallback.
fn parse_batch_items(input: &str) -> Option<Vec<Value>> {
    let value: Value = serde_json::from_str(input).ok()?;
    match value.get(BATCH_LIST_FIELD) {
        Some(Value::Array(items)) => Some(items.clone()),
        _ => None,
    }
}

fn collect_items(items: Vec<Value>) -> (Vec<LabeledRecord>, IngestStats) {
    let mut stats = IngestStats::default();
    let mut records = Vec::new();

    for item in items {
        stats.records_seen += 1;
        match serde_json::from_value::<RawRecord>(item) {
            Ok(raw) => match raw.resolve() {
                Some(record) => records.push(record),
                None => stats.missing_fields += 1,
            },
            Err(e) => {
                debug!("skipping malformed batch item: {e}");
                stats.parse_errors += 1;
            }
        }
    }

    (records, stats)
}

fn read_newline_delimited(input: &str) -> (Vec<LabeledRecord>, IngestStats) {
    let mut stats = IngestStats::default();
    let mut records = Vec::new();

    for (line_num, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.records_seen += 1;

        match serde_json::from_str::<RawRecord>(line) {
            Ok(raw) => match raw.resolve() {
                Some(record) => records.push(record),
                None => stats.missing_fields += 1,
            },
            Err(e) => {
                debug!("skipping malformed record on line {}: {e}", line_num + 1);
                stats.parse_errors += 1;
            }
        }
    }

    (records, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(r#"{"samples": []}"#),
            SourceFormat::BatchObject
        );
        assert_eq!(
            detect_format("  \n {\"samples\": []}"),
            SourceFormat::BatchObject
        );
        assert_eq!(
            detect_format(r#"["not", "an", "object"]"#),
            SourceFormat::NewlineDelimited
        );
        assert_eq!(detect_format(""), SourceFormat::NewlineDelimited);
    }

    #[test]
    fn test_batch_object_ingestion() {
        let input = r#"{
            "exported_at": "2024-03-01",
            "samples": [
                {"text": "Zomato order", "category": "Food"},
                {"merchant": "Uber", "label": "Transport"}
            ]
        }"#;

        let (records, stats) = read_records(input);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "Zomato order");
        assert_eq!(records[0].category, "Food");
        assert_eq!(records[1].text, "Uber");
        assert_eq!(records[1].category, "Transport");
        assert_eq!(stats.records_seen, 2);
        assert_eq!(stats.skipped(), 0);
    }

    #[test]
    fn test_newline_delimited_ingestion() {
        let input = "\
{\"text\": \"Zomato order\", \"category\": \"Food\"}\n\
\n\
{\"merchant\": \"Shell fuel\", \"label\": \"Fuel\"}\n";

        let (records, stats) = read_records(input);

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category, "Fuel");
        // Blank lines are not records.
        assert_eq!(stats.records_seen, 2);
    }

    #[test]
    fn test_object_without_samples_falls_back_to_lines() {
        // A single JSONL record that happens to be a whole valid object.
        let input = r#"{"text": "Zomato order", "category": "Food"}"#;

        let (records, stats) = read_records(input);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Food");
        assert_eq!(stats.parse_errors, 0);
    }

    #[test]
    fn test_malformed_lines_are_counted_not_fatal() {
        let input = "\
{\"text\": \"Zomato\", \"category\": \"Food\"}\n\
not json at all\n\
{\"text\": \"Uber\", \"category\": \"Transport\"}\n";

        let (records, stats) = read_records(input);

        assert_eq!(records.len(), 2);
        assert_eq!(stats.records_seen, 3);
        assert_eq!(stats.parse_errors, 1);
    }

    #[test]
    fn test_field_precedence() {
        let raw = RawRecord {
            text: Some("primary text".to_string()),
            merchant: Some("fallback merchant".to_string()),
            category: Some("Food".to_string()),
            label: Some("Other".to_string()),
        };
        let record = raw.resolve().unwrap();

        assert_eq!(record.text, "primary text");
        assert_eq!(record.category, "Food");
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let raw = RawRecord {
            text: Some(String::new()),
            merchant: Some("Uber".to_string()),
            category: Some(String::new()),
            label: Some("Transport".to_string()),
        };
        let record = raw.resolve().unwrap();

        assert_eq!(record.text, "Uber");
        assert_eq!(record.category, "Transport");
    }

    #[test]
    fn test_unlabeled_record_is_dropped() {
        let input = "\
{\"text\": \"Zomato\", \"category\": \"Food\"}\n\
{\"text\": \"mystery charge\"}\n";

        let (records, stats) = read_records(input);

        assert_eq!(records.len(), 1);
        assert_eq!(stats.missing_fields, 1);
    }

    #[test]
    fn test_malformed_batch_item_is_counted() {
        let input = r#"{"samples": [
            {"text": "Zomato", "category": "Food"},
            {"text": 42, "category": "Food"}
        ]}"#;

        let (records, stats) = read_records(input);

        assert_eq!(records.len(), 1);
        assert_eq!(stats.parse_errors, 1);
    }
}
