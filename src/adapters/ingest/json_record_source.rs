//! JSON Record Source - reads alternatives from JSON documents.
//!
//! Two document shapes are accepted:
//!
//! - an object keyed by alternative id: `{"730": {"price": 0.0, ...}, ...}`
//! - an array of records carrying their own id: `[{"id": "x1", ...}, ...]`
//!
//! Field values map onto [`FieldValue`]: numbers, booleans, and strings pass
//! through; arrays become string lists; nested objects become the list of
//! their keys (tag maps such as `{"Indie": 120, "RPG": 80}`); nulls are
//! dropped.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::IngestError;
use crate::domain::decision::{Alternative, FieldValue};
use crate::domain::foundation::{AlternativeId, DomainError};
use crate::ports::AlternativeSource;

/// Default name of the id field in array-shaped documents.
pub const DEFAULT_ID_FIELD: &str = "id";

/// An in-memory JSON document of alternative records.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    document: Value,
    id_field: String,
}

impl JsonRecordSource {
    /// Wraps an already-parsed document.
    pub fn from_value(document: Value) -> Self {
        Self {
            document,
            id_field: DEFAULT_ID_FIELD.to_string(),
        }
    }

    /// Parses a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, IngestError> {
        Ok(Self::from_value(serde_json::from_str(raw)?))
    }

    /// Reads and parses a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| IngestError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "Read alternatives file");
        Self::from_json(&raw)
    }

    /// Uses a different id field for array-shaped documents.
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    /// Converts the document into alternatives, preserving document order.
    pub fn records(&self) -> Result<Vec<Alternative>, IngestError> {
        let alternatives = match &self.document {
            Value::Object(map) => map
                .iter()
                .map(|(id, record)| {
                    let fields = record.as_object().ok_or_else(|| {
                        IngestError::UnexpectedShape(format!("record '{}' is not an object", id))
                    })?;
                    Ok(to_alternative(AlternativeId::try_new(id.as_str())?, fields, None))
                })
                .collect::<Result<Vec<_>, IngestError>>()?,
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let fields = record.as_object().ok_or_else(|| {
                        IngestError::UnexpectedShape(format!("record {} is not an object", index))
                    })?;
                    let id = fields
                        .get(&self.id_field)
                        .and_then(id_text)
                        .ok_or(IngestError::MissingId { index })?;
                    Ok(to_alternative(
                        AlternativeId::try_new(id)?,
                        fields,
                        Some(&self.id_field),
                    ))
                })
                .collect::<Result<Vec<_>, IngestError>>()?,
            other => {
                return Err(IngestError::UnexpectedShape(format!(
                    "expected an object or an array, got {}",
                    json_type(other)
                )))
            }
        };

        let mut seen = HashSet::new();
        for alternative in &alternatives {
            if !seen.insert(alternative.id.as_str()) {
                return Err(IngestError::DuplicateId(alternative.id.to_string()));
            }
        }

        debug!(count = alternatives.len(), "Loaded alternatives");
        Ok(alternatives)
    }
}

impl AlternativeSource for JsonRecordSource {
    fn load(&self) -> Result<Vec<Alternative>, DomainError> {
        self.records().map_err(DomainError::from)
    }
}

fn to_alternative(
    id: AlternativeId,
    fields: &Map<String, Value>,
    skip: Option<&str>,
) -> Alternative {
    let mut alternative = Alternative::new(id);
    for (name, value) in fields {
        if Some(name.as_str()) == skip {
            continue;
        }
        match to_field_value(value) {
            Some(field) => alternative = alternative.with_field(name.as_str(), field),
            None if !value.is_null() => {
                warn!(alternative_id = %alternative.id, field = %name, "Skipping unreadable field")
            }
            None => {}
        }
    }
    alternative
}

fn to_field_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(FieldValue::Flag(*b)),
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Array(items) => Some(FieldValue::List(
            items.iter().filter_map(scalar_text).collect(),
        )),
        Value::Object(map) => Some(FieldValue::List(map.keys().cloned().collect())),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn reads_object_keyed_by_id() {
        let source = JsonRecordSource::from_value(json!({
            "730": {
                "price": 0.0,
                "windows": true,
                "supported_languages": ["English", "Polish"],
                "tags": {"FPS": 90, "Shooter": 65},
                "estimated_owners": "50000000 - 100000000",
                "metacritic_url": null
            }
        }));

        let records = source.records().unwrap();
        assert_eq!(records.len(), 1);
        let game = &records[0];
        assert_eq!(game.id.as_str(), "730");
        assert_eq!(game.number("price"), Some(0.0));
        assert!(game.flag("windows"));
        assert!(game.contains("supported_languages", "Polish"));
        assert!(game.contains("tags", "Shooter"));
        assert_eq!(
            game.number("estimated_owners"),
            Some(75_000_000.0)
        );
        assert!(game.field("metacritic_url").is_none());
    }

    #[test]
    fn reads_array_with_id_field() {
        let source = JsonRecordSource::from_json(
            r#"[{"id": 1, "ram": 16, "price": 8299}, {"id": "2", "ram": 8, "price": 4399}]"#,
        )
        .unwrap();

        let records = source.records().unwrap();
        assert_eq!(records[0].id.as_str(), "1");
        assert_eq!(records[1].id.as_str(), "2");
        assert!(records[0].field("id").is_none());
        assert_eq!(records[1].number("ram"), Some(8.0));
    }

    #[test]
    fn custom_id_field() {
        let source = JsonRecordSource::from_value(json!([{"sku": "L-1", "price": 1.0}]))
            .with_id_field("sku");
        assert_eq!(source.records().unwrap()[0].id.as_str(), "L-1");
    }

    #[test]
    fn missing_id_is_an_error() {
        let source = JsonRecordSource::from_value(json!([{"price": 1.0}]));
        assert_eq!(source.records(), Err(IngestError::MissingId { index: 0 }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let source = JsonRecordSource::from_value(json!([{"id": "a"}, {"id": "a"}]));
        assert_eq!(
            source.records(),
            Err(IngestError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn scalar_document_is_rejected() {
        let source = JsonRecordSource::from_value(json!(42));
        assert!(matches!(source.records(), Err(IngestError::UnexpectedShape(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            JsonRecordSource::from_json("{not json"),
            Err(IngestError::Parse(_))
        ));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": {{"price": 3}}}}"#).unwrap();

        let source = JsonRecordSource::from_path(file.path()).unwrap();
        assert_eq!(source.load().unwrap()[0].number("price"), Some(3.0));
    }

    #[test]
    fn missing_file_surfaces_as_ingest_failure() {
        let err = JsonRecordSource::from_path("/definitely/not/here.json").unwrap_err();
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::IngestFailed);
    }
}
