use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

/// Converts a key/value structure into a JSON object.
///
/// Returns `None` and logs the reason when the value cannot be serialized or is not a mapping.
pub fn convert_to_json<T: Serialize + ?Sized>(object: &T) -> Option<Map<String, Value>> {
    match serde_json::to_value(object) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            error!("Unable to convert to a JSON object, found '{}'", other);
            None
        }
        Err(err) => {
            error!("Unable to convert to a JSON object: {}", err);
            None
        }
    }
}

/// Converts every element into JSON, or returns `None` if any element fails.
pub fn convert_to_json_array<T: Serialize>(objects: &[T]) -> Option<Vec<Value>> {
    objects
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| error!("Unable to convert to a JSON array: {}", err))
        .ok()
}
