pub mod tracking_api_repository;
