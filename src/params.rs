//! Navigation parameters passed from the list screen to the detail screen.
//!
//! Every parameter travels as a string. The identifying key may arrive as a
//! single value, a list of values, or not at all; [`decode_param`] folds all
//! three into one canonical string where the empty string means "no selection".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, ListEntry};

pub const PARAM_NAME: &str = "name";
pub const PARAM_IMAGE: &str = "image";
pub const PARAM_IMAGE_BACK: &str = "imageBack";
pub const PARAM_TYPES: &str = "types";

/// A raw parameter value: one string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

/// Normalize a parameter into one canonical string.
///
/// Lists yield their first element (empty list: empty string); an absent
/// value yields the empty string.
pub fn decode_param(value: Option<&ParamValue>) -> String {
    match value {
        None => String::new(),
        Some(ParamValue::Single(s)) => s.clone(),
        Some(ParamValue::List(values)) => values.first().cloned().unwrap_or_default(),
    }
}

/// String-keyed parameter map for one navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams(BTreeMap<String, ParamValue>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for opening the detail screen of `entry`.
    ///
    /// Optional images are omitted when absent; categories are JSON-encoded.
    pub fn from_entry(entry: &ListEntry) -> Self {
        let mut params = Self::new();
        params.insert(PARAM_NAME, entry.name.as_str());
        if let Some(image) = &entry.primary_image_url {
            params.insert(PARAM_IMAGE, image.as_str());
        }
        if let Some(image) = &entry.secondary_image_url {
            params.insert(PARAM_IMAGE_BACK, image.as_str());
        }
        match serde_json::to_string(&entry.categories) {
            Ok(encoded) => params.insert(PARAM_TYPES, encoded),
            Err(e) => tracing::warn!(error = %e, "Failed to encode categories for route"),
        }
        params
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Decoded identifying key; empty when nothing is selected.
    pub fn key(&self) -> String {
        decode_param(self.get(PARAM_NAME))
    }

    /// Passed-through categories. Malformed or missing values decode empty.
    pub fn categories(&self) -> Vec<Category> {
        let raw = decode_param(self.get(PARAM_TYPES));
        if raw.is_empty() {
            return Vec::new();
        }
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring malformed categories parameter");
            Vec::new()
        })
    }
}
