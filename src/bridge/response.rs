use crate::domain::{Dictionary, NotAnObjectError};
use reqwest::header::HeaderMap;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, instrument, warn};

const STATUS: &str = "status";
const HEADERS: &str = "headers";
const RESPONSE: &str = "response";
const DEFAULT_STATUS: u16 = 200;

/// Shapes a transport response into `{status, headers, response}`.
///
/// A missing status is reported as 200. When a header is repeated, the last value wins.
pub fn shape_response(headers: &HeaderMap, status: Option<StatusCode>, body: Dictionary) -> Dictionary {
    let mut dictionary = status_and_headers(headers, status);
    dictionary.put(RESPONSE, body);
    dictionary
}

/// Reads a complete HTTP response and shapes it with [`shape_response`].
///
/// If the body cannot be read or is not a JSON object, the failure is logged and the returned dictionary
/// only holds `status` and `headers`.
#[instrument(skip_all, fields(url = %response.url()))]
pub async fn process_response(response: Response) -> Dictionary {
    let status = response.status();
    let mut dictionary = status_and_headers(response.headers(), Some(status));

    match read_body(response).await {
        Ok(body) => dictionary.put(RESPONSE, body),
        Err(err) => error!("Unable to process the response body: {}", err),
    }

    dictionary
}

fn status_and_headers(headers: &HeaderMap, status: Option<StatusCode>) -> Dictionary {
    let mut header_dictionary = Dictionary::with_capacity(headers.keys_len());
    for (name, value) in headers {
        match value.to_str() {
            Ok(value) => header_dictionary.put(name.as_str(), value),
            Err(err) => warn!("⚠️ Skipping header '{}': {}", name, err),
        }
    }

    let mut dictionary = Dictionary::with_capacity(3);
    dictionary.put(STATUS, status.map_or(DEFAULT_STATUS, |status| status.as_u16()));
    dictionary.put(HEADERS, header_dictionary);
    dictionary
}

async fn read_body(response: Response) -> Result<Dictionary, ResponseBodyError> {
    let body = response.json::<Value>().await?;
    Ok(Dictionary::try_from(body)?)
}

#[derive(Error, Debug)]
enum ResponseBodyError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    NotAnObject(#[from] NotAnObjectError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};
    use serde_json::json;

    #[test]
    fn shape_response_defaults_the_status_to_200() {
        let body = Dictionary::try_from(json!({ "ok": true })).unwrap();

        let dictionary = shape_response(&HeaderMap::new(), None, body);

        assert_eq!(
            dictionary.into_value(),
            json!({
                "status": 200,
                "headers": {},
                "response": { "ok": true }
            })
        );
    }

    #[test]
    fn shape_response_keeps_the_last_value_of_a_repeated_header() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.append("x-trace", HeaderValue::from_static("first"));
        headers.append("x-trace", HeaderValue::from_static("second"));

        let dictionary = shape_response(&headers, Some(StatusCode::CREATED), Dictionary::new());

        assert_eq!(dictionary.get("status"), Some(&json!(201)));
        assert_eq!(
            dictionary.get("headers"),
            Some(&json!({
                "content-type": "application/json",
                "x-trace": "second"
            }))
        );
    }

    #[test]
    fn shape_response_skips_headers_that_are_not_text() {
        let mut headers = HeaderMap::new();
        headers.insert("x-binary", HeaderValue::from_bytes(b"\xfa\xfb").unwrap());

        let dictionary = shape_response(&headers, None, Dictionary::new());

        assert_eq!(dictionary.get("headers"), Some(&json!({})));
    }

    #[tokio::test]
    async fn process_response_includes_status_headers_and_body() -> Result<(), reqwest::Error> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/location")
            .with_status(202)
            .with_header("content-type", "application/json")
            .with_body(r#"{"provider": {"name": "gps"}}"#)
            .create_async()
            .await;

        let response = reqwest::get(format!("{}/location", server.url())).await?;
        let dictionary = process_response(response).await;

        mock.assert();
        assert_eq!(dictionary.get("status"), Some(&json!(202)));
        assert_eq!(
            dictionary.get_dictionary("headers").and_then(|headers| headers.get("content-type")),
            Some(&json!("application/json"))
        );
        assert_eq!(dictionary.get("response"), Some(&json!({ "provider": { "name": "gps" } })));
        Ok(())
    }

    #[tokio::test]
    async fn process_response_omits_a_body_that_is_not_an_object() -> Result<(), reqwest::Error> {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("GET", "/").with_status(200).with_body("[1, 2, 3]").create_async().await;

        let response = reqwest::get(server.url()).await?;
        let dictionary = process_response(response).await;

        mock.assert();
        assert_eq!(dictionary.get("status"), Some(&json!(200)));
        assert!(dictionary.contains_key("headers"));
        assert!(!dictionary.contains_key("response"));
        Ok(())
    }
}
