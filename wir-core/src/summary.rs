//! The weather summary returned by the service.
//!
//! The shape is owned by the service: a JSON object of categories, each an
//! object of metric key to value. Key order is preserved (serde_json is built
//! with `preserve_order`) so the display follows the response order.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherSummary(Map<String, Value>);

impl WeatherSummary {
    /// Parse a response body. Anything other than a JSON object is rejected.
    pub fn from_json_str(body: &str) -> Result<Self, QueryError> {
        serde_json::from_str(body).map_err(|e| QueryError::Parse(e.to_string()))
    }

    /// Categories in response order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Metrics of one category in response order. Empty when the category is
    /// missing or is not an object.
    pub fn metrics(&self, category: &str) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .get(category)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|m| m.iter().map(|(k, v)| (k.as_str(), v)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for WeatherSummary {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Render a metric value for display. Strings lose their quotes; numbers are
/// printed in shortest form, so integral floats carry no `.0` (`25.0` and
/// `1e2` show as `25` and `100`).
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()).unwrap_or_default(),
        other => other.to_string(),
    }
}
