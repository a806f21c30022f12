use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use futures_timer::Delay;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::error::{ApiError, ErrorBody, Result};
use super::models::{
    DirectResponse, DownloadRequest, DownloadResult, ReadyResponse, UpdateInfo, VersionInfo,
};
use crate::config::BackendConfig;

/// Client for the download backend. Cheap to clone; every view that talks to
/// the backend gets one from context.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: BackendConfig,
}

impl ApiClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Where the browser goes to receive a direct download.
    pub fn file_url(&self, download_url: &str) -> Result<Url> {
        Ok(self.config.endpoint(download_url)?)
    }

    /// POST `/download`
    pub async fn submit_download(&self, request: &DownloadRequest) -> Result<DownloadResult> {
        let url = self.config.endpoint("/download")?;
        let body = request.to_body(self.config.wire, self.config.fill_defaults);

        tracing::info!(
            "Submitting {} download for {} (direct: {})",
            request.download_type.as_str(),
            request.url,
            request.direct_download
        );

        let builder = self.http.post(url).json(&body);
        let text = self.send(builder).await?;

        if request.direct_download {
            let response: DirectResponse = decode(&text)?;
            Ok(DownloadResult::Direct {
                download_url: response.download_url,
            })
        } else {
            let response: ReadyResponse = decode(&text)?;
            Ok(DownloadResult::Ready {
                title: response.title,
            })
        }
    }

    /// GET `/network-test`, abandoned after the configured network test timeout.
    pub async fn network_test(&self) -> Result<Value> {
        let url = self.config.endpoint("/network-test")?;
        let request = async {
            let text = self.send(self.http.get(url)).await?;
            decode::<Value>(&text)
        };
        with_timeout(request, self.config.network_test_timeout).await
    }

    /// GET `/version`
    pub async fn version(&self) -> Result<VersionInfo> {
        let url = self.config.endpoint("/version")?;
        let text = self.send(self.http.get(url)).await?;
        decode(&text)
    }

    /// POST `/update-ytdlp`
    pub async fn update_ytdlp(&self) -> Result<UpdateInfo> {
        let url = self.config.endpoint("/update-ytdlp")?;
        let text = self.send(self.http.post(url)).await?;
        decode(&text)
    }

    /// Sends the request and returns the body of a 2xx response. Any other
    /// status becomes [`ApiError::Http`] carrying whatever body came back.
    async fn send(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request to backend failed: {}", e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        tracing::info!("{} responded with {}", response.url(), status);

        let text = response.text().await?;
        if !status.is_success() {
            let body = ErrorBody::parse(text);
            tracing::warn!("Backend error {}: {:?}", status, body);
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(text)
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(format!("JSON decode error: {}", e)))
}

/// Races `fut` against a timer; the timer winning yields [`ApiError::TimedOut`].
pub async fn with_timeout<T, F>(fut: F, limit: Duration) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let fut = Box::pin(fut);
    match select(fut, Delay::new(limit)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            tracing::warn!("Gave up waiting after {:?}", limit);
            Err(ApiError::TimedOut(limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::DownloadType;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(BackendConfig::new(Url::parse(&server.url()).unwrap()))
    }

    fn request(direct_download: bool) -> DownloadRequest {
        DownloadRequest {
            url: "https://www.youtube.com/watch?v=jNQXAC9IVRw".to_string(),
            download_type: DownloadType::Video,
            format: None,
            quality: None,
            direct_download,
        }
    }

    #[tokio::test]
    async fn test_submit_returns_title() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/download")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "url": "https://www.youtube.com/watch?v=jNQXAC9IVRw",
                "type": "video",
                "directDownload": false,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"title": "Me at the zoo", "format": "mp4", "type": "video"}"#)
            .create_async()
            .await;

        let result = client_for(&server).submit_download(&request(false)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            result,
            DownloadResult::Ready {
                title: "Me at the zoo".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_submit_direct_returns_download_url() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/download")
            .with_status(200)
            .with_body(r#"{"title": "a", "download_url": "/files/a.mp4"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.submit_download(&request(true)).await.unwrap();

        assert_eq!(
            result,
            DownloadResult::Direct {
                download_url: "/files/a.mp4".to_string()
            }
        );
        assert_eq!(
            client.file_url("/files/a.mp4").unwrap().as_str(),
            format!("{}/files/a.mp4", server.url())
        );
    }

    #[tokio::test]
    async fn test_submit_surfaces_json_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/download")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "bad url"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .submit_download(&request(false))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Http { status: 400, .. }));
        assert_eq!(err.to_string(), "bad url");
    }

    #[tokio::test]
    async fn test_submit_surfaces_plain_text_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/download")
            .with_status(502)
            .with_header("content-type", "text/html")
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let err = client_for(&server)
            .submit_download(&request(false))
            .await
            .unwrap_err();

        match &err {
            ApiError::Http { status, body } => {
                assert_eq!(*status, 502);
                assert_eq!(body, &ErrorBody::Text("upstream unavailable".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_submit_with_unexpected_shape_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/download")
            .with_status(200)
            .with_body(r#"{"status": "queued"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .submit_download(&request(false))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_version_and_update() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/version")
            .with_status(200)
            .with_body(r#"{"yt_dlp_version": "2024.03.10", "python_version": "3.11.8"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/update-ytdlp")
            .with_status(200)
            .with_body(r#"{"message": "yt-dlp updated successfully", "new_version": "2024.04.09"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        assert_eq!(client.version().await.unwrap().yt_dlp_version, "2024.03.10");
        assert_eq!(client.update_ytdlp().await.unwrap().new_version, "2024.04.09");
    }

    #[tokio::test]
    async fn test_network_test_returns_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/network-test")
            .with_status(200)
            .with_body(r#"{"backend_hostname": "backend"}"#)
            .create_async()
            .await;

        let payload = client_for(&server).network_test().await.unwrap();
        assert_eq!(payload["backend_hostname"], "backend");
    }

    #[tokio::test]
    async fn test_with_timeout_gives_up() {
        let limit = Duration::from_millis(20);
        let err = with_timeout(futures::future::pending::<Result<()>>(), limit)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::TimedOut(d) if d == limit));
    }

    #[tokio::test]
    async fn test_with_timeout_passes_through_result() {
        let value = with_timeout(async { Ok(7) }, Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(value, 7);
    }
}
