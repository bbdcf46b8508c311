use crate::utils::error::{NewsError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// One-shot HTTP GET against the search API. No retries; a single attempt
/// per invocation is the complete contract.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Returns the body text on HTTP 200. Any other status yields
    /// `HttpStatus` with no body surfaced; transport-level failures
    /// (DNS, refused connection, timeout, broken stream) yield `Transport`.
    pub async fn fetch(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.as_u16() != 200 {
            return Err(NewsError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn fetcher() -> Fetcher {
        Fetcher::new(Duration::from_millis(15_000), Duration::from_millis(10_000)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_on_200() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).body(r#"{"response":{"results":[]}}"#);
        });

        let url = Url::parse(&server.url("/search")).unwrap();
        let body = fetcher().fetch(&url).await.unwrap();

        api_mock.assert();
        assert_eq!(body, r#"{"response":{"results":[]}}"#);
    }

    #[tokio::test]
    async fn test_fetch_404_yields_http_status_without_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(404).body("not found");
        });

        let url = Url::parse(&server.url("/search")).unwrap();
        let err = fetcher().fetch(&url).await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, NewsError::HttpStatus { code: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_non_200_success_codes_are_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(204);
        });

        let url = Url::parse(&server.url("/search")).unwrap();
        let err = fetcher().fetch(&url).await.unwrap_err();

        assert!(matches!(err, NewsError::HttpStatus { code: 204 }));
    }

    #[tokio::test]
    async fn test_fetch_slow_server_times_out_as_transport() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .body("{}")
                .delay(Duration::from_millis(1_500));
        });

        let slow = Fetcher::new(Duration::from_millis(15_000), Duration::from_millis(200)).unwrap();
        let url = Url::parse(&server.url("/search")).unwrap();
        let err = slow.fetch(&url).await.unwrap_err();

        assert!(matches!(err, NewsError::Transport(_)));
    }

    #[tokio::test]
    async fn test_fetch_refused_connection_is_transport() {
        // Port 1 on localhost is assumed closed.
        let url = Url::parse("http://127.0.0.1:1/search").unwrap();
        let err = fetcher().fetch(&url).await.unwrap_err();

        assert!(matches!(err, NewsError::Transport(_)));
    }
}
