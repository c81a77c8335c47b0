use crate::common::*;

#[async_trait]
pub trait TrackingApiRepository: Send + Sync {
    fn base_url(&self) -> &str;
    async fn get_json(&self, url: &str) -> Result<Value, anyhow::Error>;
}
