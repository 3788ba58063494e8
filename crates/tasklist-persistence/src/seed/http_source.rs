use super::seeder::{RemoteTodo, SeedSource};
use async_trait::async_trait;
use tasklist_core::{SeedConfig, TaskError, TaskResult};

/// Fetches the seed batch with a single GET, capped by a `_limit` query
/// parameter. No retry and no pagination.
#[derive(Debug, Clone)]
pub struct HttpSeedSource {
    client: reqwest::Client,
    url: String,
    limit: u32,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>, limit: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            limit,
        }
    }

    pub fn from_config(config: &SeedConfig) -> Self {
        Self::new(config.url.clone(), config.limit)
    }

    fn request_url(&self) -> TaskResult<reqwest::Url> {
        reqwest::Url::parse_with_params(&self.url, &[("_limit", self.limit.to_string())])
            .map_err(|e| TaskError::Seed(format!("invalid seed url '{}': {}", self.url, e)))
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> TaskResult<Vec<RemoteTodo>> {
        let url = self.request_url()?;
        tracing::debug!("Fetching seed tasks from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TaskError::Seed(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaskError::Seed(format!("HTTP {} from {}", status, url)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TaskError::Seed(format!("failed reading body from {}: {}", url, e)))?;

        let items: Vec<RemoteTodo> =
            serde_json::from_slice(&body).map_err(|e| TaskError::Serialization(e.to_string()))?;
        tracing::debug!("Fetched {} seed items", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and hands back the request line.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request.lines().next().unwrap_or_default().to_string()
        });
        (format!("http://{}/todos", addr), handle)
    }

    #[test]
    fn test_request_url_carries_limit() {
        let source = HttpSeedSource::new("https://example.com/todos", 5);
        assert_eq!(
            source.request_url().unwrap().as_str(),
            "https://example.com/todos?_limit=5"
        );
    }

    #[test]
    fn test_invalid_url_is_seed_error() {
        let source = HttpSeedSource::new("not a url", 5);
        assert!(matches!(source.request_url(), Err(TaskError::Seed(_))));
    }

    #[tokio::test]
    async fn test_fetch_parses_items() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"userId":1,"id":1,"title":"delectus aut autem","completed":false},{"userId":1,"id":2,"title":"quis ut nam","completed":true}]"#,
        )
        .await;

        let items = HttpSeedSource::new(url, 2).fetch().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "delectus aut autem");
        assert!(items[1].completed);

        let request_line = server.await.unwrap();
        assert!(request_line.starts_with("GET /todos?_limit=2 "));
    }

    #[tokio::test]
    async fn test_error_status_fails() {
        let (url, _server) = serve_once("500 Internal Server Error", "oops").await;
        let err = HttpSeedSource::new(url, 5).fetch().await.unwrap_err();
        assert!(matches!(err, TaskError::Seed(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_fails() {
        let (url, _server) = serve_once("200 OK", r#"{"not":"a list"}"#).await;
        let err = HttpSeedSource::new(url, 5).fetch().await.unwrap_err();
        assert!(matches!(err, TaskError::Serialization(_)));
    }
}
