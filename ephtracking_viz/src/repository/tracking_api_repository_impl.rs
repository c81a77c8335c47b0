use crate::common::*;

use crate::model::configs::tracking_api_config::*;

use crate::traits::repository_traits::tracking_api_repository::*;

#[derive(Debug, Clone)]
pub struct TrackingApiRepositoryImpl {
    client: Client,
    base_url: String,
}

impl TrackingApiRepositoryImpl {
    pub fn new(api_config: &TrackingApiConfig) -> Result<Self, anyhow::Error> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(*api_config.timeout_secs()))
            .build()
            .context("[TrackingApiRepositoryImpl->new] Failed to build the http client")?;

        Ok(TrackingApiRepositoryImpl {
            client,
            base_url: api_config.base_url().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TrackingApiRepository for TrackingApiRepositoryImpl {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    #[doc = "Single GET attempt against the tracking API, the body is decoded as JSON"]
    async fn get_json(&self, url: &str) -> Result<Value, anyhow::Error> {
        let response: reqwest::Response = self.client.get(url).send().await.map_err(|e| {
            anyhow!(
                "[TrackingApiRepositoryImpl->get_json] request to {} failed: {}",
                url,
                e
            )
        })?;

        let status: StatusCode = response.status();

        if status.is_success() {
            let response_body: Value = response.json::<Value>().await.map_err(|e| {
                anyhow!(
                    "[TrackingApiRepositoryImpl->get_json] response of {} is not valid JSON: {}",
                    url,
                    e
                )
            })?;
            Ok(response_body)
        } else {
            let error_body: String = response.text().await.unwrap_or_default();
            Err(anyhow!(
                "[TrackingApiRepositoryImpl->get_json] response status is failed: {} {:?}",
                status,
                error_body
            ))
        }
    }
}
