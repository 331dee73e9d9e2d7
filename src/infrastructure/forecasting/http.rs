use crate::domain::error::DomainError;
use crate::domain::ports::forecast_provider::ForecastProvider;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Client for a model-serving endpoint that hosts the trained per-product
/// models. `POST {base_url}/forecast` answers with one value per day.
pub struct HttpForecastProvider {
    client: Client,
    base_url: String,
    model_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastRequest<'a> {
    product: &'a str,
    start_date: NaiveDate,
    periods: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastResponse {
    #[serde(alias = "forecast_values")]
    forecast_values: Vec<f64>,
}

impl HttpForecastProvider {
    pub fn new(base_url: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model_name: model_name.into(),
        }
    }
}

#[async_trait]
impl ForecastProvider for HttpForecastProvider {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn forecast(
        &self,
        product: &str,
        start: NaiveDate,
        days: usize,
    ) -> Result<Vec<f64>, DomainError> {
        let url = format!("{}/forecast", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ForecastRequest {
                product,
                start_date: start,
                periods: days,
            })
            .send()
            .await
            .map_err(|e| DomainError::Forecast(format!("Forecast service unreachable: {e}")))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::NotFound(format!(
                "Model for '{product}' not found"
            )));
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Forecast(format!(
                "Forecast service {status}: {body}"
            )));
        }

        let result: ForecastResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Forecast(format!("Bad forecast response: {e}")))?;
        Ok(result.forecast_values)
    }
}
