//! Response reshaping into output items.

use serde_json::Value;

/// Default envelope keys searched for the list of entries.
pub const DEFAULT_ENVELOPE_KEYS: &[&str] = &["data", "items", "results", "list"];

/// Turns a non-array API response into a list of entries.
pub trait ItemExtractor: Send + Sync {
    /// Extracts the entries carried by `response`.
    fn extract(&self, response: Value) -> Vec<Value>;
}

/// Flattens `{"data": [...]}`-style envelopes.
///
/// The first envelope key holding an array wins. An object with a single
/// array-valued field is flattened too. Any other object is one entry,
/// `null` is no entry and other scalars are one entry each.
#[derive(Debug, Clone)]
pub struct EnvelopeExtractor {
    keys: Vec<String>,
}

impl Default for EnvelopeExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_ENVELOPE_KEYS.iter().copied())
    }
}

impl EnvelopeExtractor {
    /// Creates an extractor searching `keys` in order.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the envelope keys in search order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl ItemExtractor for EnvelopeExtractor {
    fn extract(&self, response: Value) -> Vec<Value> {
        match response {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            Value::Object(mut object) => {
                let key = self
                    .keys
                    .iter()
                    .find(|key| object.get(key.as_str()).is_some_and(Value::is_array))
                    .cloned()
                    .or_else(|| match object.iter().next() {
                        Some((key, value)) if object.len() == 1 && value.is_array() => {
                            Some(key.clone())
                        }
                        _ => None,
                    });

                match key.and_then(|key| object.remove(&key)) {
                    Some(Value::Array(items)) => items,
                    _ => vec![Value::Object(object)],
                }
            }
            scalar => vec![scalar],
        }
    }
}

/// Items of one page inside a pagination loop.
pub(crate) fn page_items(response: Value, extractor: &dyn ItemExtractor) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        response => extractor.extract(response),
    }
}

/// Reshapes a response into output items.
///
/// Array elements become one item each, whatever `full_response` says. Any
/// other response is one item when `full_response` is set, and goes through
/// `extractor` otherwise.
pub fn normalize(response: Value, full_response: bool, extractor: &dyn ItemExtractor) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        response if full_response => vec![response],
        response => extractor.extract(response),
    }
}
