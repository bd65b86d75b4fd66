//! Canonical record types.
//!
//! The mock API does not enforce a schema: the display name may arrive as
//! `name` or `entity`, the request date under three spellings, and ids as either
//! strings or numbers. Everything is normalized once here so rendering and table
//! logic only ever see [`TaxRecord`] and [`Country`].

use log::warn;
use serde_json::{Map, Value};

/// Shown in place of any field a record does not carry.
pub const PLACEHOLDER: &str = "N/A";

const NAME_KEYS: [&str; 2] = ["name", "entity"];
const REQUEST_DATE_KEYS: [&str; 3] = ["requestDate", "request_date", "request date"];

/// One tax/customer entry, displayed as a table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxRecord {
    pub id: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub request_date: Option<String>,
    pub country: Option<String>,
    /// Fields the UI does not interpret; sent back untouched on update.
    pub extra: Map<String, Value>,
    request_date_key: &'static str,
}

/// Reads a JSON scalar as text. Empty strings, `null` and containers count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl TaxRecord {
    /// Normalizes one JSON object from the API.
    ///
    /// Returns `None` when the value is not an object or has no usable `id`.
    pub fn from_json(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };

        let id = fields.remove("id").as_ref().and_then(scalar_text)?;

        // `entity` stays in `extra` so it can be rewritten alongside `name` on save.
        let name = fields
            .remove("name")
            .as_ref()
            .and_then(scalar_text)
            .or_else(|| fields.get("entity").and_then(scalar_text));

        let mut request_date_key = REQUEST_DATE_KEYS[0];
        let mut request_date = None;
        for key in REQUEST_DATE_KEYS {
            if let Some(value) = fields.get(key).and_then(scalar_text) {
                request_date_key = key;
                request_date = Some(value);
                break;
            }
        }
        fields.remove(request_date_key);

        let gender = fields.remove("gender").as_ref().and_then(scalar_text);
        let country = fields.remove("country").as_ref().and_then(scalar_text);

        Some(Self {
            id,
            name,
            gender,
            request_date,
            country,
            extra: fields,
            request_date_key,
        })
    }

    /// Serializes the record back into the shape the API stores.
    pub fn to_json(&self) -> Value {
        let mut fields = self.extra.clone();
        fields.insert("id".to_owned(), Value::String(self.id.clone()));

        if let Some(name) = &self.name {
            fields.insert(NAME_KEYS[0].to_owned(), Value::String(name.clone()));
            if let Some(entity) = fields.get_mut(NAME_KEYS[1]) {
                *entity = Value::String(name.clone());
            }
        }

        let optional = [
            ("gender", &self.gender),
            (self.request_date_key, &self.request_date),
            ("country", &self.country),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                fields.insert(key.to_owned(), Value::String(value.clone()));
            }
        }

        Value::Object(fields)
    }

    /// Existing fields overlaid with the edited ones.
    pub fn merged(&self, patch: &RecordPatch) -> Self {
        let mut merged = self.clone();
        merged.name = Some(patch.name.trim().to_owned());
        merged.country = (!patch.country.is_empty()).then(|| patch.country.clone());
        merged
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn display_country(&self) -> &str {
        self.country.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn is_male(&self) -> bool {
        self.gender
            .as_deref()
            .is_some_and(|gender| gender.eq_ignore_ascii_case("male"))
    }
}

/// Normalizes a list payload, dropping entries without an id.
pub fn normalize_records(values: Vec<Value>) -> Vec<TaxRecord> {
    values
        .into_iter()
        .filter_map(|value| {
            let record = TaxRecord::from_json(value.clone());
            if record.is_none() {
                warn!("Dropping record without a usable id: {value}");
            }
            record
        })
        .collect()
}

/// Values collected by the edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordPatch {
    pub name: String,
    pub country: String,
}

/// A selectable country for the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: String,
    pub name: String,
}

impl Country {
    /// Accepts either a bare string or an object with a name-like and id-like field.
    pub fn from_json(index: usize, value: &Value) -> Self {
        match value {
            Value::String(name) => Self {
                id: index.to_string(),
                name: name.clone(),
            },
            Value::Object(fields) => {
                let pick = |keys: [&str; 2]| {
                    keys.iter()
                        .find_map(|key| fields.get(*key).and_then(scalar_text))
                };
                Self {
                    id: pick(["id", "code"]).unwrap_or_else(|| index.to_string()),
                    name: pick(["name", "country"]).unwrap_or_else(|| "Unknown".to_owned()),
                }
            }
            other => Self {
                id: index.to_string(),
                name: scalar_text(other).unwrap_or_else(|| "Unknown".to_owned()),
            },
        }
    }
}

pub fn normalize_countries(values: &[Value]) -> Vec<Country> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Country::from_json(index, value))
        .collect()
}
