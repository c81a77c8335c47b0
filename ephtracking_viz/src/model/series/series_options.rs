use crate::common::*;

use crate::model::record::raw_record::*;
use crate::model::series::{palette::*, series::*};

pub const DEFAULT_MAX_SERIES: usize = 10;

#[doc = "How records are grouped into series"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeriesGrouping {
    #[default]
    Geography,
    GeographyAndStratification,
}

impl SeriesGrouping {
    pub fn key_for(&self, record: &RawRecord) -> SeriesKey {
        match self {
            SeriesGrouping::Geography => SeriesKey::new(record.geo_id().to_string(), None),
            SeriesGrouping::GeographyAndStratification => SeriesKey::new(
                record.geo_id().to_string(),
                record.stratification_group_id().clone(),
            ),
        }
    }
}

#[doc = r#"
    Caller supplied settings of one series build.

    * `max_series` bounds the rendered/animated set, the collection keeps every group
    * `require_values` turns a missing or non-numeric value into a build failure
    * `stratification_names` resolves stratification ids for labels
"#]
#[derive(Debug, Clone, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
pub struct SeriesOptions {
    grouping: SeriesGrouping,
    max_series: usize,
    require_values: bool,
    stratification_names: HashMap<String, String>,
    palette: Palette,
}

impl SeriesOptions {
    pub fn new(grouping: SeriesGrouping) -> Self {
        SeriesOptions {
            grouping,
            max_series: DEFAULT_MAX_SERIES,
            require_values: false,
            stratification_names: HashMap::new(),
            palette: Palette::default(),
        }
    }

    pub fn with_max_series(mut self, max_series: usize) -> Self {
        self.max_series = max_series;
        self
    }

    pub fn with_required_values(mut self) -> Self {
        self.require_values = true;
        self
    }

    pub fn with_stratification_names(mut self, names: HashMap<String, String>) -> Self {
        self.stratification_names = names;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for SeriesOptions {
    fn default() -> Self {
        SeriesOptions::new(SeriesGrouping::default())
    }
}
