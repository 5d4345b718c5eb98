use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

/// A numeric reading that arrives either as a JSON number or as a string holding a decimal number.
///
/// Strings must hold a finite number, so `"inf"`, `"NaN"` and overflowing values like `"1e400"` are rejected.
#[derive(Debug, PartialEq)]
pub(in crate::codec) struct Reading(pub f64);

impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(Reading)
                .ok_or_else(|| Error::custom(format!("number {} does not fit a 64-bit float", number))),
            serde_json::Value::String(text) => match text.trim().parse::<f64>() {
                Ok(reading) if reading.is_finite() => Ok(Reading(reading)),
                _ => Err(Error::invalid_value(Unexpected::Str(&text), &"a decimal number")),
            },
            _ => Err(Error::custom("expected the value to be a number or a numeric string")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer("42", Ok(Reading(42.0)))]
    #[case::negative_float("-122.1", Ok(Reading(-122.1)))]
    #[case::exponent("1e3", Ok(Reading(1000.0)))]
    #[case::numeric_string(r#""37.5""#, Ok(Reading(37.5)))]
    #[case::padded_numeric_string(r#"" 12.25 ""#, Ok(Reading(12.25)))]
    #[case::non_numeric_string(r#""abc""#, Err(Error::custom("invalid value: string \"abc\", expected a decimal number")))]
    #[case::empty_string(r#""""#, Err(Error::custom("invalid value: string \"\", expected a decimal number")))]
    #[case::inf_string(r#""inf""#, Err(Error::custom("invalid value: string \"inf\", expected a decimal number")))]
    #[case::infinity_string(r#""INFINITY""#, Err(Error::custom("invalid value: string \"INFINITY\", expected a decimal number")))]
    #[case::nan_string(r#""NaN""#, Err(Error::custom("invalid value: string \"NaN\", expected a decimal number")))]
    #[case::overflowing_string(r#""1e400""#, Err(Error::custom("invalid value: string \"1e400\", expected a decimal number")))]
    #[case::null("null", Err(Error::custom("expected the value to be a number or a numeric string")))]
    #[case::boolean("true", Err(Error::custom("expected the value to be a number or a numeric string")))]
    #[case::object(r#"{"value": 1}"#, Err(Error::custom("expected the value to be a number or a numeric string")))]
    fn deserializes_readings(#[case] json: &str, #[case] expected: serde_json::Result<Reading>) {
        let response = serde_json::from_str::<Reading>(json);

        // As serde_json::Error does not implement PartialEq, use debug print for comparison
        assert_eq!(format!("{:#?}", response), format!("{:#?}", expected));
    }
}
