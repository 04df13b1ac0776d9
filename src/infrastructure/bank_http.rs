use crate::domain::bank::{BankAuthorizationResult, status_from_authorization, to_bank_request};
use crate::domain::payment::{PaymentRequest, PaymentStatus};
use crate::domain::ports::BankClient;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Authorizes payments against the acquiring bank over HTTP.
///
/// Makes exactly one `POST {base_url}/payments` per call. Transport errors,
/// timeouts, non-2xx statuses and unreadable bodies all come back as
/// `Declined`; nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpBankClient {
    http: reqwest::Client,
    payments_url: String,
}

impl HttpBankClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            payments_url: format!("{}/payments", base_url.trim_end_matches('/')),
        }
    }

    pub fn payments_url(&self) -> &str {
        &self.payments_url
    }
}

#[async_trait]
impl BankClient for HttpBankClient {
    async fn authorize(&self, request: &PaymentRequest) -> PaymentStatus {
        let payload = to_bank_request(request);

        let response = match self.http.post(&self.payments_url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Bank call failed");
                return PaymentStatus::Declined;
            }
        };

        let http_status = response.status();
        if !http_status.is_success() {
            tracing::warn!(%http_status, "Bank non-OK response");
            return PaymentStatus::Declined;
        }

        match response.json::<BankAuthorizationResult>().await {
            Ok(result) => {
                let status = status_from_authorization(result.authorized);
                tracing::info!(result = %status, "Bank authorization result");
                status
            }
            Err(e) => {
                tracing::warn!(%http_status, error = %e, "Bank response body unreadable");
                PaymentStatus::Declined
            }
        }
    }
}
