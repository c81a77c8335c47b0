use crate::common::*;

use crate::model::series::series::*;

#[doc = r#"
    Ordered series of one chart render, in first-seen order.

    Every group built from the fetched records is kept. The first `max_rendered`
    groups form the set a renderer draws and animates.
    Rebuilt on every fetch, never mutated in place by renderers.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct SeriesCollection {
    series: Vec<Series>,
    max_rendered: usize,
}

impl SeriesCollection {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[doc = "The rendered subset: the first `max_rendered` series"]
    pub fn rendered(&self) -> &[Series] {
        let end: usize = self.max_rendered.min(self.series.len());
        &self.series[..end]
    }

    #[doc = "Number of groups held back from rendering by the series cap"]
    pub fn truncated_count(&self) -> usize {
        self.series.len().saturating_sub(self.max_rendered)
    }

    pub fn find(&self, key: &SeriesKey) -> Option<&Series> {
        self.series.iter().find(|s| s.key() == key)
    }

    #[doc = "Sorted union of the years present in any series"]
    pub fn years(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .series
            .iter()
            .flat_map(|s| s.points().keys().cloned())
            .collect();
        years.sort();
        years.dedup();
        years
    }

    #[doc = "Minimum and maximum defined value over the rendered series"]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.rendered()
            .iter()
            .flat_map(|s| s.points().values().filter_map(|p| *p.value()))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    #[doc = "Point of every rendered series at `year`, `None` where the series has no record"]
    pub fn points_at<'a>(&'a self, year: &'a str) -> Vec<(&'a Series, Option<&'a SeriesPoint>)> {
        self.rendered().iter().map(|s| (s, s.point(year))).collect()
    }
}
