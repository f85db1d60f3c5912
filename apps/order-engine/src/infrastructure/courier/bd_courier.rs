//! BD Courier delivery-history adapter.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::api_types::{BdCourierResponse, PhoneLookupRequest};
use super::config::BdCourierConfig;
use crate::application::ports::{CourierError, DeliveryHistoryPort};
use crate::domain::fraud::CourierStats;

/// `DeliveryHistoryPort` implementation backed by the BD Courier API.
#[derive(Debug, Clone)]
pub struct BdCourierAdapter {
    client: Client,
    base_url: String,
    api_token: String,
}

impl BdCourierAdapter {
    /// Create a new adapter from config.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` for an empty token and
    /// `ConnectionError` if the HTTP client cannot be built.
    pub fn new(config: &BdCourierConfig) -> Result<Self, CourierError> {
        if config.api_token.is_empty() {
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
            api_token: config.api_token.clone(),
        })
    }

    async fn lookup(&self, phone: &str) -> Result<BdCourierResponse, CourierError> {
        let response = self
            .client
            .post(format!("{}/courier-check", self.base_url))
            .bearer_auth(&self.api_token)
            .json(&PhoneLookupRequest {
                phone: phone.to_string(),
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
            status if !status.is_success() => Err(CourierError::ApiError {
                message: format!("BD Courier answered {status}"),
            }),
            _ => response
                .json::<BdCourierResponse>()
                .await
                .map_err(|e| CourierError::ApiError {
                    message: e.to_string(),
                }),
        }
    }
}

#[async_trait]
impl DeliveryHistoryPort for BdCourierAdapter {
    async fn delivery_stats(
        &self,
        phone_digits: &str,
    ) -> Result<Option<CourierStats>, CourierError> {
        let body = self.lookup(phone_digits).await?;
        if !body.success {
            return Ok(None);
        }
        let (Some(delivery_ratio), Some(total_orders)) = (body.order_ratio, body.total_order)
        else {
            return Ok(None);
        };
        Ok(Some(CourierStats {
            delivery_ratio,
            total_orders,
        }))
    }

    async fn probe(&self) -> Result<(), CourierError> {
        let response = self
            .client
            .get(format!("{}/check-connection", self.base_url))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| CourierError::ConnectionError {
                message: e.to_string(),
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(CourierError::AuthenticationFailed)
            }
            status if !status.is_success() => Err(CourierError::ApiError {
                message: format!("BD Courier answered {status}"),
            }),
            _ => Ok(()),
        }
    }
}
