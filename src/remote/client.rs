use crate::app_config::Remote;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{header, Client};

/// Builds the HTTP client used to fetch locations, bounded by the configured timeout.
pub fn new_client(remote: &Remote) -> Result<Client, reqwest::Error> {
    let mut headers = header::HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder().timeout(remote.timeout()).default_headers(headers).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_asks_for_json() -> Result<(), reqwest::Error> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("accept", "application/json")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().remote_url(server.url()).build();
        let remote = config.remote().expect("expected a remote configuration");
        let client = new_client(remote)?;

        client.get(remote.url()).send().await?;

        // Verify that the call came in and that the header is set
        mock.assert();

        Ok(())
    }
}
