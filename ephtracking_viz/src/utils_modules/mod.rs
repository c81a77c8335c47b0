pub mod io_utils;
pub mod logger_utils;
pub mod scale_utils;
pub mod traits;
