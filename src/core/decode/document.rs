//! Export document decoding
//!
//! Streams an export document and produces the batch of records it contains.
//! The expected shape is a `HealthData` root whose `Record` children each
//! carry the six required attributes:
//!
//! ```xml
//! <HealthData>
//!   <Record type="..." sourceName="..." unit="..."
//!           startDate="..." endDate="..." value="123"/>
//! </HealthData>
//! ```
//!
//! Exports also carry other children under the root (workouts, activity
//! summaries, export metadata); those are skipped, as is any nested content
//! inside a `Record` element. Decoding is all-or-nothing: any structural
//! problem, missing attribute, or unparseable timestamp fails the whole
//! batch and no partial record set is returned.

use crate::core::decode::timestamp::TimestampParser;
use crate::domain::{DecodeError, Record, RecordBatch};
use chrono::{DateTime, FixedOffset};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Decode an export document into a [`RecordBatch`]
///
/// Consumes the stream; has no other side effects. Records are returned in
/// document order.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the document is malformed, a `Record`
/// element is missing a required attribute, its `value` is not an integer,
/// or a timestamp attribute matches none of `timestamps`' known formats.
pub fn decode_records<R: BufRead>(
    reader: R,
    timestamps: &dyn TimestampParser,
) -> Result<RecordBatch, DecodeError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut skip_buf = Vec::new();
    let mut batch = RecordBatch::new();
    let mut saw_root = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) if !saw_root => {
                if element.name().as_ref() != b"HealthData" {
                    return Err(DecodeError::Structure(format!(
                        "unexpected root element `{}`, expected `HealthData`",
                        String::from_utf8_lossy(element.name().as_ref())
                    )));
                }
                saw_root = true;
            }
            Ok(Event::Start(element)) => {
                if element.name().as_ref() == b"Record" {
                    batch.push(decode_record(&element, timestamps)?);
                }
                // Skip the subtree whether or not this was a Record;
                // nested content is not part of the record shape
                let end = element.to_end().into_owned();
                xml.read_to_end_into(end.name(), &mut skip_buf).map_err(|e| {
                    DecodeError::Structure(format!(
                        "XML parsing error at byte {}: {}",
                        xml.buffer_position(),
                        e
                    ))
                })?;
            }
            Ok(Event::Empty(element)) => {
                if element.name().as_ref() == b"Record" {
                    batch.push(decode_record(&element, timestamps)?);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DecodeError::Structure(format!(
                    "XML parsing error at byte {}: {}",
                    xml.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(DecodeError::Structure(
            "document has no HealthData root element".to_string(),
        ));
    }

    Ok(batch)
}

/// Assemble one record from a `Record` element's attributes
fn decode_record(
    element: &BytesStart<'_>,
    timestamps: &dyn TimestampParser,
) -> Result<Record, DecodeError> {
    let mut kind = None;
    let mut source = None;
    let mut unit = None;
    let mut value = None;
    let mut start_date = None;
    let mut end_date = None;

    for attribute in element.attributes() {
        let attribute = attribute
            .map_err(|e| DecodeError::Structure(format!("malformed attribute: {}", e)))?;
        let text = attribute
            .unescape_value()
            .map_err(|e| DecodeError::Structure(format!("malformed attribute value: {}", e)))?;

        match attribute.key.as_ref() {
            b"type" => kind = Some(text.into_owned()),
            b"sourceName" => source = Some(text.into_owned()),
            b"unit" => unit = Some(text.into_owned()),
            b"value" => value = Some(text.into_owned()),
            b"startDate" => start_date = Some(text.into_owned()),
            b"endDate" => end_date = Some(text.into_owned()),
            // Exporter metadata attributes (device, creationDate, ...) are
            // not part of the record shape
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| missing("type"))?;
    let source = source.ok_or_else(|| missing("sourceName"))?;
    let unit = unit.ok_or_else(|| missing("unit"))?;
    let raw_value = value.ok_or_else(|| missing("value"))?;
    let raw_start = start_date.ok_or_else(|| missing("startDate"))?;
    let raw_end = end_date.ok_or_else(|| missing("endDate"))?;

    let value = raw_value
        .trim()
        .parse::<i32>()
        .map_err(|_| DecodeError::InvalidValue {
            attribute: "value".to_string(),
            value: raw_value.clone(),
        })?;

    let start = parse_timestamp(timestamps, "startDate", &raw_start)?;
    let end = parse_timestamp(timestamps, "endDate", &raw_end)?;

    Ok(Record {
        kind,
        source,
        unit,
        start,
        end,
        value,
    })
}

fn missing(attribute: &str) -> DecodeError {
    DecodeError::MissingAttribute {
        attribute: attribute.to_string(),
    }
}

fn parse_timestamp(
    parser: &dyn TimestampParser,
    attribute: &str,
    raw: &str,
) -> Result<DateTime<FixedOffset>, DecodeError> {
    parser.parse(raw).ok_or_else(|| DecodeError::Timestamp {
        attribute: attribute.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decode::timestamp::PermissiveTimestampParser;

    fn decode(document: &str) -> Result<RecordBatch, DecodeError> {
        decode_records(document.as_bytes(), &PermissiveTimestampParser)
    }

    const WELL_FORMED: &str = r#"<HealthData>
  <Record type="HKQuantityTypeIdentifierStepCount" sourceName="Watch" unit="count"
          startDate="2021-01-02 15:04:05 -0700" endDate="2021-01-02 15:05:05 -0700" value="128"/>
  <Record type="HKQuantityTypeIdentifierHeartRate" sourceName="Watch" unit="count/min"
          startDate="2021-01-02T16:00:00-07:00" endDate="2021-01-02T16:00:00-07:00" value="72"/>
  <Record type="HKQuantityTypeIdentifierStepCount" sourceName="Phone" unit="count"
          startDate="2021-01-03 08:00:00 -0700" endDate="2021-01-03 08:01:00 -0700" value="40"/>
</HealthData>"#;

    #[test]
    fn test_decode_well_formed_document() {
        let batch = decode(WELL_FORMED).unwrap();
        assert_eq!(batch.len(), 3);

        let values: Vec<i32> = batch.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![128, 72, 40]);

        let first = &batch.records()[0];
        assert_eq!(first.kind, "HKQuantityTypeIdentifierStepCount");
        assert_eq!(first.source, "Watch");
        assert_eq!(first.unit, "count");
        assert_eq!(first.value, 128);
        assert_eq!(first.start.offset().local_minus_utc(), -7 * 3600);
        assert!(first.end > first.start);
    }

    #[test]
    fn test_decode_empty_root() {
        let batch = decode("<HealthData></HealthData>").unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_decode_self_closing_empty_root() {
        let batch = decode("<HealthData/>").unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_unexpected_root_rejected() {
        let err = decode("<WorkoutData></WorkoutData>").unwrap_err();
        assert!(matches!(err, DecodeError::Structure(_)));
        assert!(err.to_string().contains("WorkoutData"));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = decode("").unwrap_err();
        assert!(matches!(err, DecodeError::Structure(_)));
    }

    #[test]
    fn test_malformed_xml_rejected() {
        let err = decode("<HealthData><Record type=\"x\"").unwrap_err();
        assert!(matches!(err, DecodeError::Structure(_)));
    }

    #[test]
    fn test_missing_attribute_aborts_batch() {
        let doc = r#"<HealthData>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="2021-01-02 15:04:05 -0700" endDate="2021-01-02 15:05:05 -0700" value="1"/>
  <Record type="Steps" sourceName="Watch"
          startDate="2021-01-02 15:04:05 -0700" endDate="2021-01-02 15:05:05 -0700" value="2"/>
</HealthData>"#;
        let err = decode(doc).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingAttribute {
                attribute: "unit".to_string()
            }
        );
    }

    #[test]
    fn test_bad_timestamp_aborts_batch() {
        // Two good records around one bad one: the error must win
        let doc = r#"<HealthData>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="2021-01-02 15:04:05 -0700" endDate="2021-01-02 15:05:05 -0700" value="1"/>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="whenever" endDate="2021-01-02 15:05:05 -0700" value="2"/>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="2021-01-02 15:06:05 -0700" endDate="2021-01-02 15:07:05 -0700" value="3"/>
</HealthData>"#;
        let err = decode(doc).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Timestamp {
                attribute: "startDate".to_string(),
                value: "whenever".to_string()
            }
        );
    }

    #[test]
    fn test_non_integer_value_rejected() {
        let doc = r#"<HealthData>
  <Record type="Mass" sourceName="Scale" unit="kg"
          startDate="2021-01-02 15:04:05 -0700" endDate="2021-01-02 15:04:05 -0700" value="81.6"/>
</HealthData>"#;
        let err = decode(doc).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidValue {
                attribute: "value".to_string(),
                value: "81.6".to_string()
            }
        );
    }

    #[test]
    fn test_non_record_children_are_skipped() {
        let doc = r#"<HealthData>
  <ExportDate value="2021-02-01 09:00:00 -0700"/>
  <Me dateOfBirth="1990-01-01"/>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="2021-01-02 15:04:05 -0700" endDate="2021-01-02 15:05:05 -0700" value="5"/>
  <Workout workoutActivityType="Running" duration="31">
    <MetadataEntry key="HKIndoorWorkout" value="0"/>
  </Workout>
</HealthData>"#;
        let batch = decode(doc).unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch.records()[0].value, 5);
    }

    #[test]
    fn test_nested_record_content_is_skipped() {
        let doc = r#"<HealthData>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="2021-01-02 15:04:05 -0700" endDate="2021-01-02 15:05:05 -0700" value="5">
    <MetadataEntry key="HKMetadataKeySyncVersion" value="2"/>
  </Record>
</HealthData>"#;
        let batch = decode(doc).unwrap();
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_attribute_values_pass_through_verbatim() {
        let doc = r#"<HealthData>
  <Record type="HKCategoryTypeIdentifierSleepAnalysis" sourceName="Bob&apos;s Phone" unit="min"
          startDate="2021-01-02 22:00:00 -0700" endDate="2021-01-03 06:00:00 -0700" value="480"/>
</HealthData>"#;
        let batch = decode(doc).unwrap();
        let record = &batch.records()[0];
        assert_eq!(record.source, "Bob's Phone");
        assert_eq!(record.kind, "HKCategoryTypeIdentifierSleepAnalysis");
        assert_eq!(record.unit, "min");
    }

    #[test]
    fn test_mixed_timestamp_dialects_in_one_document() {
        let doc = r#"<HealthData>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="2021-01-02T15:04:05-07:00" endDate="2021-01-02T15:05:05-07:00" value="1"/>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="Jan 2, 2021 3:04pm" endDate="Jan 2, 2021 3:05pm" value="2"/>
  <Record type="Steps" sourceName="Watch" unit="count"
          startDate="2021-01-02 15:04:05" endDate="2021-01-02 15:05:05" value="3"/>
</HealthData>"#;
        let batch = decode(doc).unwrap();
        assert_eq!(batch.len(), 3);
    }
}
