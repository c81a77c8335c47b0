pub mod chart_image_service;
pub mod chart_service;
pub mod data_fetch_service;
pub mod series_service;
