pub mod system_config;
pub mod total_config;
pub mod tracking_api_config;
