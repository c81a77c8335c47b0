pub mod palette;
pub mod series;
pub mod series_collection;
pub mod series_options;
