//! Steadfast fraud-flag adapter.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::api_types::{PhoneLookupRequest, SteadfastResponse};
use super::config::SteadfastConfig;
use crate::application::ports::{CourierError, RiskFlagPort};

/// `RiskFlagPort` implementation backed by the Steadfast API.
#[derive(Debug, Clone)]
pub struct SteadfastAdapter {
    client: Client,
    base_url: String,
    api_key: String,
    secret_key: String,
}

impl SteadfastAdapter {
    /// Create a new adapter from config.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` for empty credentials and
    /// `ConnectionError` if the HTTP client cannot be built.
    pub fn new(config: &SteadfastConfig) -> Result<Self, CourierError> {
        if config.api_key.is_empty() || config.secret_key.is_empty() {
            return Err(CourierError::AuthenticationFailed);
        }
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CourierError::ConnectionError {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
        })
    }
}

#[async_trait]
impl RiskFlagPort for SteadfastAdapter {
    async fn is_risky(&self, phone_digits: &str) -> Result<Option<bool>, CourierError> {
        let response = self
            .client
            .post(format!("{}/api/v1/courier-check", self.base_url))
            .header("Api-Key", &self.api_key)
            .header("Secret-Key", &self.secret_key)
            .json(&PhoneLookupRequest {
                phone: phone_digits.to_string(),
            })
            .send()
            .await
            .map_err(|e| CourierError::ConnectionError {
                message: e.to_string(),
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(CourierError::AuthenticationFailed)
            }
            StatusCode::NOT_FOUND => Ok(None),
            status if !status.is_success() => Err(CourierError::ApiError {
                message: format!("Steadfast answered {status}"),
            }),
            _ => {
                let body: SteadfastResponse =
                    response.json().await.map_err(|e| CourierError::ApiError {
                        message: e.to_string(),
                    })?;
                if body.risky.is_none() && body.fraud_status.is_none() {
                    return Ok(None);
                }
                let risky = body.risky.unwrap_or(false)
                    || body.fraud_status.as_deref() == Some("risky");
                Ok(Some(risky))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer) -> SteadfastAdapter {
        SteadfastAdapter::new(&SteadfastConfig::new(
            server.uri(),
            "key".to_string(),
            "secret".to_string(),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn textual_verdict_marks_risky() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courier-check"))
            .and(header("Api-Key", "key"))
            .and(header("Secret-Key", "secret"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"fraud_status": "risky"})),
            )
            .mount(&server)
            .await;

        let flag = adapter(&server).is_risky("8801712345678").await.unwrap();

        assert_eq!(flag, Some(true));
    }

    #[tokio::test]
    async fn clean_verdict_is_not_risky() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"risky": false, "fraud_status": "clean"})),
            )
            .mount(&server)
            .await;

        let flag = adapter(&server).is_risky("8801712345678").await.unwrap();

        assert_eq!(flag, Some(false));
    }

    #[tokio::test]
    async fn unknown_phone_yields_no_signal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let flag = adapter(&server).is_risky("880170").await.unwrap();

        assert!(flag.is_none());
    }

    #[tokio::test]
    async fn empty_body_yields_no_signal() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let flag = adapter(&server).is_risky("8801712345678").await.unwrap();

        assert!(flag.is_none());
    }
}
