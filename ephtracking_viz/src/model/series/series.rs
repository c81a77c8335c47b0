use crate::common::*;

use crate::model::record::raw_record::*;

#[doc = "Composite series identity: geography id plus optional stratification id"]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesKey {
    geo_id: String,
    stratification_id: Option<String>,
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.stratification_id {
            Some(strat) => write!(f, "{}/{}", self.geo_id, strat),
            None => write!(f, "{}", self.geo_id),
        }
    }
}

#[doc = r#"
    One datapoint of a series. `value` is `None` when the record carries no numeric
    value: a gap in the plotted line, never a zero.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesPoint {
    record: RawRecord,
    value: Option<f64>,
}

#[doc = r#"
    Time-indexed data of one geography (and optional stratification).
    `points` is keyed by the normalized four digit year and holds at most one point
    per year, every point shares the series key.
"#]
#[derive(Debug, Clone, PartialEq, Getters, Setters)]
#[getset(get = "pub")]
pub struct Series {
    key: SeriesKey,
    #[getset(get = "pub", set = "pub")]
    label: String,
    color: String,
    points: BTreeMap<String, SeriesPoint>,
}

impl Series {
    pub fn new(key: SeriesKey, color: String) -> Self {
        Series {
            key,
            label: String::new(),
            color,
            points: BTreeMap::new(),
        }
    }

    #[doc = "Inserts the point for `year`, replacing any earlier point of the same year"]
    pub fn upsert(&mut self, year: String, point: SeriesPoint) -> Option<SeriesPoint> {
        self.points.insert(year, point)
    }

    pub fn point(&self, year: &str) -> Option<&SeriesPoint> {
        self.points.get(year)
    }

    pub fn value_at(&self, year: &str) -> Option<f64> {
        self.points.get(year).and_then(|p| p.value)
    }

    pub fn years(&self) -> Vec<&str> {
        self.points.keys().map(String::as_str).collect()
    }

    #[doc = "Latest point in chronological order"]
    pub fn last_point(&self) -> Option<(&String, &SeriesPoint)> {
        self.points.iter().next_back()
    }

    #[doc = "Points up to and including `year`, the visible part of an animated line"]
    pub fn points_through<'a>(
        &'a self,
        year: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a SeriesPoint)> + 'a {
        self.points
            .iter()
            .take_while(move |(point_year, _)| point_year.as_str() <= year)
    }
}
