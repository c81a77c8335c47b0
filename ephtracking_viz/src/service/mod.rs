pub mod animator;
pub mod bubble_service_impl;
pub mod chart_image_service_impl;
pub mod choropleth_service_impl;
pub mod data_fetch_service_impl;
pub mod line_chart_service_impl;
pub mod series_service_impl;
