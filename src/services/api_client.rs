use crate::config::ApiConfig;
use crate::error::AppError;
use crate::models::{
    ClassificationResult, ErrorResult, ImagePayload, ImpactData, ScanMode, UserProfile,
};
use crate::services::discriminator::{
    self, Contract, CONNECTIVITY_MESSAGE, PRODUCT_FAILURE_MESSAGE,
};
use crate::services::heuristic;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Extra time granted on top of the request timeout before the call is abandoned
const HARD_TIMEOUT_SLACK: Duration = Duration::from_secs(2);

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    image: &'a str,
}

/// `GET /health`
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub supported_formats: Vec<String>,
    pub classifiers: BTreeMap<String, String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// HTTP client for the EcoLife backend
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent("EcoLife/0.1.0")
            .build()
            .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))?;
        Ok(Self { config, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base.trim_end_matches('/'), path)
    }

    /// Classifies a waste photo. Never fails; problems come back as the `Error` variant.
    pub async fn classify_waste(&self, payload: &ImagePayload, mode: ScanMode) -> ClassificationResult {
        let contract = match mode {
            ScanMode::Legacy => Contract::Legacy,
            ScanMode::Advanced | ScanMode::Simple => Contract::Canonical,
        };
        log::info!("Classifying image ({:?} mode)", mode);
        self.post_image(
            mode.endpoint(),
            payload,
            self.config.classify_timeout(),
            contract,
            CONNECTIVITY_MESSAGE,
        )
        .await
    }

    /// Sends a product photo (or the demo placeholder) for sustainability analysis
    ///
    /// Products without an `analysis_method` get a keyword score computed locally.
    pub async fn analyze_product(&self, payload: &ImagePayload, contract: Contract) -> ClassificationResult {
        log::info!("Analyzing product ({:?} contract)", contract);
        let mut result = self
            .post_image(
                "/analyze-product",
                payload,
                self.config.product_timeout(),
                contract,
                PRODUCT_FAILURE_MESSAGE,
            )
            .await;
        if let ClassificationResult::Product(product) = &mut result {
            if product.analysis_method.is_none() {
                product.local_assessment = Some(heuristic::score_keywords(&product.found_keywords));
            }
        }
        result
    }

    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, AppError> {
        self.get_json("/profile", Some(token), self.config.profile_timeout())
            .await
    }

    pub async fn fetch_impact(&self, token: &str) -> Result<ImpactData, AppError> {
        self.get_json("/impact", Some(token), self.config.profile_timeout())
            .await
    }

    pub async fn health(&self) -> Result<HealthStatus, AppError> {
        self.get_json("/health", None, self.config.health_timeout())
            .await
    }

    async fn post_image(
        &self,
        path: &str,
        payload: &ImagePayload,
        timeout: Duration,
        contract: Contract,
        fallback: &str,
    ) -> ClassificationResult {
        let request = self.http.post(self.url(path)).json(&ImageRequest {
            image: payload.as_wire(),
        });

        match self.exchange(request, timeout).await {
            Ok((status, Some(body))) if (200..300).contains(&status) => {
                discriminator::discriminate_with(&body, contract)
            }
            Ok((status, None)) if (200..300).contains(&status) => {
                AppError::MalformedResponse(format!("{} returned a non-JSON body", path)).into()
            }
            Ok((status, body)) => {
                log::warn!("{} answered with status {}", path, status);
                discriminator::discriminate_failure(status, body.as_ref(), fallback)
            }
            Err(e) => {
                log::error!("{} failed: {}", path, e);
                ClassificationResult::Error(ErrorResult::new(fallback).with_details(e.to_string()))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<T, AppError> {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let (status, body) = self.exchange(request, timeout).await?;
        if !(200..300).contains(&status) {
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Server returned status: {}", status));
            log::warn!("{} rejected ({}): {}", path, status, message);
            return Err(AppError::Backend { status, message });
        }

        let body = body.ok_or_else(|| {
            AppError::MalformedResponse(format!("{} returned a non-JSON body", path))
        })?;
        Ok(serde_json::from_value(body)?)
    }

    /// Sends the request and reads the body, bounded by `timeout` plus a fixed slack.
    /// Returns the status code and the body if it parsed as JSON.
    async fn exchange(
        &self,
        request: reqwest::RequestBuilder,
        timeout: Duration,
    ) -> Result<(u16, Option<Value>), AppError> {
        let call = async {
            let response = request
                .header("Accept", "application/json")
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| transport_error(e, timeout))?;
            let status = response.status().as_u16();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| transport_error(e, timeout))?;
            Ok::<_, AppError>((status, serde_json::from_slice::<Value>(&bytes).ok()))
        };

        match tokio::time::timeout(timeout + HARD_TIMEOUT_SLACK, call).await {
            Ok(result) => result,
            Err(_) => Err(AppError::Timeout(timeout)),
        }
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> AppError {
    if e.is_timeout() {
        AppError::Timeout(timeout)
    } else {
        AppError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisMethod, SimpleWasteKind};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves one canned response and hands the raw request back to the test
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16384];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_string());
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        (format!("http://{}", addr), rx)
    }

    fn client(base: String) -> ApiClient {
        let config = ApiConfig {
            api_base: base,
            classify_timeout_secs: 1,
            product_timeout_secs: 1,
            profile_timeout_secs: 1,
            health_timeout_secs: 1,
            ..ApiConfig::default()
        };
        ApiClient::new(config).unwrap()
    }

    fn error_message(result: &ClassificationResult) -> &str {
        match result {
            ClassificationResult::Error(e) => &e.message,
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_simple_classification_posts_image() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"waste_type":"recyclable","confidence":0.83,"tips":["Rinse containers"],"mode":"simple"}"#,
        )
        .await;
        let result = client(base)
            .classify_waste(&ImagePayload::Base64("aGVsbG8=".into()), ScanMode::Simple)
            .await;
        match result {
            ClassificationResult::SimpleWaste(r) => assert_eq!(r.waste_type, SimpleWasteKind::Recyclable),
            other => panic!("unexpected {:?}", other),
        }
        let request = request.await.unwrap();
        assert!(request.starts_with("POST /classify-waste/simple "));
        assert!(request.contains(r#"{"image":"aGVsbG8="}"#));
    }

    #[tokio::test]
    async fn test_backend_error_message_is_surfaced() {
        let (base, _) = serve_once("400 Bad Request", r#"{"error":"No image data provided"}"#).await;
        let result = client(base)
            .classify_waste(&ImagePayload::Base64(String::new()), ScanMode::Advanced)
            .await;
        assert_eq!(error_message(&result), "No image data provided");
    }

    #[tokio::test]
    async fn test_status_without_message_uses_endpoint_fallback() {
        let (base, _) = serve_once("500 Internal Server Error", "oops").await;
        let result = client(base)
            .analyze_product(&ImagePayload::Demo, Contract::Canonical)
            .await;
        assert_eq!(error_message(&result), PRODUCT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_non_json_success_is_parse_failure() {
        let (base, _) = serve_once("200 OK", "<html>proxy login</html>").await;
        let result = client(base)
            .classify_waste(&ImagePayload::Demo, ScanMode::Advanced)
            .await;
        assert_eq!(error_message(&result), discriminator::PARSE_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_demo_product_sends_literal_and_decodes() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"sustainability_score":7.5,"confidence":0.9,"barcode_detected":false,"found_keywords":["organic"],"extracted_text":"Organic oats","recommendations":[],"analysis_method":"ocr"}"#,
        )
        .await;
        let result = client(base)
            .analyze_product(&ImagePayload::Demo, Contract::Canonical)
            .await;
        match result {
            ClassificationResult::Product(p) => {
                assert_eq!(p.analysis_method, Some(AnalysisMethod::Ocr));
                assert_eq!(p.local_assessment, None);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(request.await.unwrap().contains(r#"{"image":"demo"}"#));
    }

    #[tokio::test]
    async fn test_legacy_product_gets_local_assessment() {
        let (base, _) = serve_once(
            "200 OK",
            r#"{"sustainability_score":4,"found_keywords":["organic","plastic"],"extracted_text":"x"}"#,
        )
        .await;
        let result = client(base)
            .analyze_product(&ImagePayload::Demo, Contract::Legacy)
            .await;
        match result {
            ClassificationResult::Product(p) => {
                let report = p.local_assessment.unwrap();
                assert_eq!(report.score, 5);
                assert_eq!(report.negative, vec!["plastic"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refused_connection_is_connectivity_error() {
        // bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client(format!("http://{}", addr))
            .classify_waste(&ImagePayload::Demo, ScanMode::Advanced)
            .await;
        assert_eq!(error_message(&result), CONNECTIVITY_MESSAGE);
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let started = std::time::Instant::now();
        let result = client(format!("http://{}", addr))
            .classify_waste(&ImagePayload::Demo, ScanMode::Simple)
            .await;
        assert_eq!(error_message(&result), CONNECTIVITY_MESSAGE);
        assert!(started.elapsed() < Duration::from_secs(1) + HARD_TIMEOUT_SLACK + Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_profile_uses_bearer_token() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"username":"maria","total_scans":12,"recycling_score":8.5,"waste_breakdown":[],"achievements":[]}"#,
        )
        .await;
        let profile = client(base).fetch_profile("tok-1").await.unwrap();
        assert_eq!(profile.username, "maria");
        assert_eq!(profile.total_scans, 12);
        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /profile "));
        assert!(request.contains("authorization: bearer tok-1"));
    }

    #[tokio::test]
    async fn test_impact_rejection_is_backend_error() {
        let (base, _) = serve_once("401 Unauthorized", r#"{"error":"Token expired"}"#).await;
        match client(base).fetch_impact("stale").await {
            Err(AppError::Backend { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Token expired");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (base, _) = serve_once(
            "200 OK",
            r#"{"status":"healthy","version":"3.2","supported_formats":["JPEG","PNG"],"classifiers":{"advanced":"loaded"}}"#,
        )
        .await;
        let health = client(base).health().await.unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.classifiers.get("advanced").map(String::as_str), Some("loaded"));
    }
}
