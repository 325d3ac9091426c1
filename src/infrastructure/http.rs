use gloo_net::http::{Request, RequestBuilder, Response};

use crate::domain::errors::NetworkError;
use crate::domain::forecast::{
    CompanyCatalog, CompanyId, ForecastRepository, OhlcSnapshot, PredictionResult, PriceQuote,
};
use crate::domain::logging::LogComponent;
use crate::infrastructure::dto;

/// HTTP client for the forecast service, built on gloo-net
#[derive(Debug, Clone)]
pub struct ForecastApiClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl ForecastApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        }
    }

    pub fn add_header(mut self, key: &str, value: &str) -> Self {
        self.default_headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn companies_url(&self) -> String {
        format!("{}/companies", self.base_url)
    }

    pub fn latest_url(&self, company: &CompanyId) -> String {
        format!("{}/latest/{}", self.base_url, urlencoding::encode(company.value()))
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }
        request
    }

    async fn get_text(&self, url: &str) -> Result<String, NetworkError> {
        crate::log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

        let response = self
            .with_headers(Request::get(url))
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

        Self::read_body(response).await
    }

    async fn post_text(&self, url: &str, body: String) -> Result<String, NetworkError> {
        crate::log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 POST: {}", url);

        let response = self
            .with_headers(Request::post(url))
            .body(body)
            .map_err(|e| NetworkError::RequestFailed(format!("Failed to create request body: {}", e)))?
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

        Self::read_body(response).await
    }

    /// Non-2xx is a failure whatever the body says.
    async fn read_body(response: Response) -> Result<String, NetworkError> {
        if !response.ok() {
            let error = NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            };
            crate::log_error!(LogComponent::Infrastructure("HTTP"), "{}", error);
            return Err(error);
        }

        let text = response
            .text()
            .await
            .map_err(|e| NetworkError::InvalidPayload(format!("Failed to read response: {}", e)))?;

        crate::log_debug!(LogComponent::Infrastructure("HTTP"), "✅ Response: {} bytes", text.len());

        Ok(text)
    }
}

impl ForecastRepository for ForecastApiClient {
    async fn list_companies(&self) -> Result<CompanyCatalog, NetworkError> {
        let body = self.get_text(&self.companies_url()).await?;
        dto::decode_companies(&body)
    }

    async fn latest_quote(&self, company: &CompanyId) -> Result<OhlcSnapshot, NetworkError> {
        let body = self.get_text(&self.latest_url(company)).await?;
        dto::decode_latest_quote(&body)
    }

    async fn predict(&self, quote: &PriceQuote) -> Result<PredictionResult, NetworkError> {
        let payload = dto::encode_predict_request(quote)?;
        let body = self.post_text(&self.predict_url(), payload).await?;
        dto::decode_prediction(&body)
    }
}
