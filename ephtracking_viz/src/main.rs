/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Renders Environmental Public Health Tracking measures as line charts,
              choropleth maps and bubble charts, animated year by year.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod error;

mod dto;

mod enums;

mod repository;
use repository::tracking_api_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::{system_config::*, total_config::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    bubble_service_impl::*, chart_image_service_impl::*, choropleth_service_impl::*,
    data_fetch_service_impl::*, line_chart_service_impl::*, series_service_impl::*,
};

mod controller;
use controller::main_controller::*;

type FetchService = DataFetchServiceImpl<TrackingApiRepositoryImpl>;

#[tokio::main]
async fn main() {
    /* global logger and initial setup */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Tracking chart program start!");

    /* Tracking API connection */
    let api_conn: TrackingApiRepositoryImpl =
        TrackingApiRepositoryImpl::new(get_tracking_api_config_info()).unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing api_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* dependency injection */
    let fetch_service: Arc<FetchService> = Arc::new(DataFetchServiceImpl::new(Arc::new(api_conn)));
    let system_config: SystemConfig = get_system_config_info().clone();

    let line_chart_service: LineChartServiceImpl<FetchService, SeriesServiceImpl, ChartImageServiceImpl> =
        LineChartServiceImpl::new(
            Arc::clone(&fetch_service),
            SeriesServiceImpl::new(),
            ChartImageServiceImpl::new(),
            system_config.clone(),
        );

    let choropleth_service: ChoroplethServiceImpl<FetchService, SeriesServiceImpl> =
        ChoroplethServiceImpl::new(
            Arc::clone(&fetch_service),
            SeriesServiceImpl::new(),
            system_config.clone(),
        );

    let bubble_service: BubbleServiceImpl<FetchService, SeriesServiceImpl> =
        BubbleServiceImpl::new(
            Arc::clone(&fetch_service),
            SeriesServiceImpl::new(),
            system_config,
        );

    let main_controller: MainController<
        LineChartServiceImpl<FetchService, SeriesServiceImpl, ChartImageServiceImpl>,
        ChoroplethServiceImpl<FetchService, SeriesServiceImpl>,
        BubbleServiceImpl<FetchService, SeriesServiceImpl>,
    > = MainController::new(line_chart_service, choropleth_service, bubble_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    info!("Tracking chart program end!");
}
