use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key/value data passed between the scripting layer and native code.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(Map<String, Value>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary(Map::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary(Map::with_capacity(capacity))
    }

    /// Inserts `value` under `key`, replacing any previous value.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the nested mapping stored under `key`, if there is one.
    pub fn get_dictionary(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Dictionary {
    fn from(map: Map<String, Value>) -> Self {
        Dictionary(map)
    }
}

impl From<Dictionary> for Value {
    fn from(dictionary: Dictionary) -> Self {
        dictionary.into_value()
    }
}

impl TryFrom<Value> for Dictionary {
    type Error = NotAnObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Dictionary(map)),
            other => Err(NotAnObjectError(other)),
        }
    }
}

#[derive(Error, Debug)]
#[error("expected a JSON object, found '{0}'")]
pub struct NotAnObjectError(pub Value);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn put_replaces_existing_values() {
        let mut dictionary = Dictionary::new();
        dictionary.put("status", 200);
        dictionary.put("status", 404);

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.keys().collect::<Vec<_>>(), vec!["status"]);
        assert_eq!(dictionary.get("status"), Some(&json!(404)));
    }

    #[test]
    fn nested_dictionaries_are_reachable() {
        let mut inner = Dictionary::new();
        inner.put("name", "gps");
        let mut dictionary = Dictionary::new();
        dictionary.put("provider", inner);

        let provider = dictionary.get_dictionary("provider").expect("expected a nested dictionary");
        assert_eq!(provider.get("name"), Some(&json!("gps")));
        assert!(dictionary.get_dictionary("missing").is_none());
    }

    #[test]
    fn try_from_rejects_non_objects() {
        let result = Dictionary::try_from(json!([1, 2]));

        assert!(matches!(result, Err(NotAnObjectError(Value::Array(_)))));
    }

    #[test]
    fn serializes_as_a_plain_object() {
        let dictionary = Dictionary::try_from(json!({ "a": 1 })).unwrap();

        assert_eq!(serde_json::to_string(&dictionary).unwrap(), r#"{"a":1}"#);
    }
}
