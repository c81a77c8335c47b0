pub use chrono::{Datelike, Local};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use futures::future::{join_all, try_join_all};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::{Client, StatusCode};
pub use urlencoding::encode;
