pub mod chart_data_options;
pub mod chart_list_config;
pub mod disposal_token;
