//! Payment processor client.
//!
//! `PaymentGateway` is the seam between the payment service and the processor. The
//! production implementation talks to the Stripe REST API with form encoded requests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::server::error::payment::PaymentError;

/// Payment intent as reported by the processor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
    /// Processor status such as `requires_payment_method`, `processing` or `succeeded`.
    pub status: String,
    pub amount: i64,
    pub latest_charge: Option<String>,
    pub last_payment_error: Option<PaymentIntentError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentIntentError {
    pub message: Option<String>,
}

impl PaymentIntent {
    pub fn failure_message(&self) -> Option<String> {
        self.last_payment_error
            .as_ref()
            .and_then(|e| e.message.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Refund {
    pub id: String,
    pub amount: i64,
    pub status: Option<String>,
}

/// Request to charge a reservation.
#[derive(Debug, Clone)]
pub struct NewPaymentIntent {
    pub amount: i64,
    pub currency: String,
    pub metadata: HashMap<String, String>,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        intent: NewPaymentIntent,
    ) -> Result<PaymentIntent, PaymentError>;

    async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError>;

    /// Refunds `amount` cents of a charge, the whole charge when `None`.
    async fn create_refund(
        &self,
        charge_id: &str,
        amount: Option<i64>,
        reason: Option<String>,
    ) -> Result<Refund, PaymentError>;
}

#[derive(Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

pub struct StripeGateway {
    http_client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

impl StripeGateway {
    pub fn new(http_client: reqwest::Client, api_url: String, secret_key: String) -> Self {
        Self {
            http_client,
            api_url,
            secret_key,
        }
    }

    async fn send<T>(&self, request: reqwest::RequestBuilder) -> Result<T, PaymentError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = request.bearer_auth(&self.secret_key).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorBody>(&body)
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(PaymentError::Processor(message));
        }

        serde_json::from_str(&body).map_err(|e| PaymentError::UnexpectedResponse(e.to_string()))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        intent: NewPaymentIntent,
    ) -> Result<PaymentIntent, PaymentError> {
        let mut form = vec![
            ("amount".to_string(), intent.amount.to_string()),
            ("currency".to_string(), intent.currency),
            (
                "automatic_payment_methods[enabled]".to_string(),
                "true".to_string(),
            ),
        ];
        form.extend(
            intent
                .metadata
                .into_iter()
                .map(|(key, value)| (format!("metadata[{}]", key), value)),
        );

        let request = self
            .http_client
            .post(format!("{}/payment_intents", self.api_url))
            .form(&form);

        self.send(request).await
    }

    async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError> {
        let request = self
            .http_client
            .get(format!("{}/payment_intents/{}", self.api_url, id));

        self.send(request).await
    }

    async fn create_refund(
        &self,
        charge_id: &str,
        amount: Option<i64>,
        reason: Option<String>,
    ) -> Result<Refund, PaymentError> {
        let mut form = vec![("charge".to_string(), charge_id.to_string())];
        if let Some(amount) = amount {
            form.push(("amount".to_string(), amount.to_string()));
        }
        if let Some(reason) = reason {
            form.push(("metadata[reason]".to_string(), reason));
        }

        let request = self
            .http_client
            .post(format!("{}/refunds", self.api_url))
            .form(&form);

        self.send(request).await
    }
}
