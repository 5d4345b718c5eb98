use crate::codec::reading_deserializer::Reading;
use crate::domain::{Dictionary, LocationRecord};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

const PROVIDER: &str = "provider";
const PROVIDER_NAME: &str = "name";
const COORDINATES: &str = "coords";
const ACCURACY: &str = "accuracy";
const ALTITUDE: &str = "altitude";
const LATITUDE: &str = "latitude";
const LONGITUDE: &str = "longitude";
const SPEED: &str = "speed";

/// Input accepted by [`decode`]: JSON text or data that is already structured.
#[derive(Debug, Clone)]
pub enum Payload {
    Text(String),
    Value(Value),
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

impl From<Dictionary> for Payload {
    fn from(dictionary: Dictionary) -> Self {
        Payload::Value(dictionary.into_value())
    }
}

impl From<&Dictionary> for Payload {
    fn from(dictionary: &Dictionary) -> Self {
        Payload::Value(dictionary.clone().into_value())
    }
}

/// Decodes a location payload of the shape
/// `{"provider": {"name": ..}, "coords": {"accuracy": .., "altitude": .., "latitude": .., "longitude": .., "speed": ..}}`.
///
/// Every key is optional. Missing readings default to zero and a missing provider name to the empty string.
/// Returns `Ok(None)` when neither `provider` nor `coords` is present. A reading that is present but not a
/// number fails the whole decode, no partially filled record is ever produced.
///
/// Note that this is deliberately not the inverse of [`encode`]: decoding suppresses an empty payload, while
/// encoding a record always emits both blocks.
pub fn decode(payload: impl Into<Payload>) -> Result<Option<LocationRecord>, DecodeError> {
    let root = match payload.into() {
        Payload::Text(text) => serde_json::from_str::<Value>(&text)?,
        Payload::Value(value) => value,
    };
    debug!("payload={}", root);

    let root = root.as_object().ok_or_else(|| DecodeError::NotAnObject {
        field: "payload",
        found: root.to_string(),
    })?;

    let coords = sub_object(root, COORDINATES)?;
    let provider = sub_object(root, PROVIDER)?;
    debug!("coords={:?}", coords);
    debug!("provider={:?}", provider);

    let name = provider.and_then(|provider| provider.get(PROVIDER_NAME)).map(provider_name).unwrap_or_default();
    let (accuracy, altitude, latitude, longitude, speed) = match coords {
        Some(coords) => (
            reading(coords, ACCURACY)?,
            reading(coords, ALTITUDE)?,
            reading(coords, LATITUDE)?,
            reading(coords, LONGITUDE)?,
            reading(coords, SPEED)?,
        ),
        None => Default::default(),
    };

    if provider.is_none() && coords.is_none() {
        warn!("Blank location provided");
        return Ok(None);
    }

    let record = LocationRecord::new(name)
        .with_accuracy(accuracy)
        .with_altitude(altitude)
        .with_latitude(latitude)
        .with_longitude(longitude)
        .with_speed(speed);
    debug!("Location created={:?}", record);

    Ok(Some(record))
}

/// Encodes a record into its dictionary form.
///
/// A present record always produces both the `provider` and the `coords` block with every field set, even if
/// all values are defaults. An absent record produces an empty dictionary.
///
/// JSON has no representation for non-finite numbers, so an infinite or NaN reading is written as `null`. Such a
/// dictionary does not decode again.
pub fn encode(record: Option<&LocationRecord>) -> Dictionary {
    let mut dictionary = Dictionary::with_capacity(2);
    let Some(record) = record else {
        return dictionary;
    };

    let mut provider = Dictionary::with_capacity(1);
    provider.put(PROVIDER_NAME, record.provider());

    let mut coords = Dictionary::with_capacity(5);
    coords.put(ACCURACY, record.accuracy());
    coords.put(ALTITUDE, record.altitude());
    coords.put(LATITUDE, record.latitude());
    coords.put(LONGITUDE, record.longitude());
    coords.put(SPEED, record.speed());

    dictionary.put(COORDINATES, coords);
    dictionary.put(PROVIDER, provider);
    dictionary
}

fn sub_object<'a>(root: &'a Map<String, Value>, field: &'static str) -> Result<Option<&'a Map<String, Value>>, DecodeError> {
    match root.get(field) {
        None => Ok(None),
        Some(Value::Object(object)) => Ok(Some(object)),
        Some(other) => Err(DecodeError::NotAnObject {
            field,
            found: other.to_string(),
        }),
    }
}

fn provider_name(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

fn reading(coords: &Map<String, Value>, field: &'static str) -> Result<f64, DecodeError> {
    match coords.get(field) {
        None => Ok(0.0),
        Some(raw) => Reading::deserialize(raw).map(|reading| reading.0).map_err(|_| DecodeError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed location payload: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("expected '{field}' to be an object, found '{found}'")]
    NotAnObject { field: &'static str, found: String },
    #[error("expected '{field}' to be a number, found '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
