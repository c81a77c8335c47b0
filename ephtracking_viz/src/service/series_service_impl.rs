use crate::common::*;

use crate::error::chart_error::*;

use crate::model::record::raw_record::*;
use crate::model::series::{series::*, series_collection::*, series_options::*};

use crate::traits::service_traits::series_service::*;

#[doc = r#"
    Buckets a year label by its trailing four digits, so a multi-year label such as
    `2000-2004` lands on `2004`. A plain year and a range label that share the last
    year end up in the same bucket.
"#]
pub fn normalize_year(year: &str) -> Option<&str> {
    let year: &str = year.trim();
    let split: usize = year.len().checked_sub(4)?;

    if !year.is_char_boundary(split) {
        return None;
    }

    let tail: &str = &year[split..];
    tail.bytes().all(|b| b.is_ascii_digit()).then_some(tail)
}

#[derive(Debug, Clone, Default, new)]
pub struct SeriesServiceImpl;

impl SeriesServiceImpl {
    #[doc = r#"
        Label of a series, derived from its latest record:
        `{geo}[, {stratification}]: {display value} ({year})`.
        The stratification segment is left out when the id is not in the lookup.
    "#]
    fn make_label(series: &Series, options: &SeriesOptions) -> String {
        let Some((year, point)) = series.last_point() else {
            return series.key().to_string();
        };

        let record: &RawRecord = point.record();

        let geo: &str = if record.geo().is_empty() {
            record.geo_id()
        } else {
            record.geo()
        };

        let stratification: Option<&String> = series
            .key()
            .stratification_id()
            .as_ref()
            .and_then(|id| options.stratification_names().get(id));

        let display_value: &str = record.display_value().as_deref().unwrap_or("no data");

        match stratification {
            Some(strat_name) => format!("{}, {}: {} ({})", geo, strat_name, display_value, year),
            None => format!("{}: {} ({})", geo, display_value, year),
        }
    }
}

impl SeriesService for SeriesServiceImpl {
    #[doc = r#"
        1. Normalize every record year to its trailing four digits
        2. Stable sort by normalized year, equal years keep fetch order
        3. Group by the configured key, groups keep first-seen order
        4. A repeated year inside a group overwrites the earlier point
        5. Label every group from its latest point

        # Errors
        * `MalformedRecord` - while `require_values` is set, a year without trailing
          digits or a missing/non-numeric value. Otherwise such a record is skipped
          or left as a gap and only its own point is affected
    "#]
    fn build_series(
        &self,
        records: &[RawRecord],
        options: &SeriesOptions,
    ) -> ChartResult<SeriesCollection> {
        let mut ordered: Vec<(&str, &RawRecord)> = Vec::with_capacity(records.len());

        for record in records {
            match normalize_year(record.year()) {
                Some(year) => ordered.push((year, record)),
                None if *options.require_values() => {
                    return Err(ChartError::malformed(
                        record.geo_id(),
                        record.year(),
                        "year label has no trailing four digit year",
                    ));
                }
                None => {
                    warn!(
                        "[SeriesServiceImpl->build_series] skipping record of {} with year label {:?}",
                        record.geo_id(),
                        record.year()
                    );
                }
            }
        }

        /* sort_by is stable */
        ordered.sort_by(|a, b| a.0.cmp(b.0));

        let mut positions: HashMap<SeriesKey, usize> = HashMap::new();
        let mut series_list: Vec<Series> = Vec::new();
        let mut gap_cnt: usize = 0;

        for (year, record) in ordered {
            let value: Option<f64> = record.numeric_value();

            if value.is_none() {
                if *options.require_values() {
                    return Err(ChartError::malformed(
                        record.geo_id(),
                        record.year(),
                        format!("data value {:?} is not numeric", record.data_value()),
                    ));
                }
                gap_cnt += 1;
            }

            let key: SeriesKey = options.grouping().key_for(record);

            let pos: usize = match positions.get(&key) {
                Some(pos) => *pos,
                None => {
                    let pos: usize = series_list.len();
                    let color: String = options.palette().color_for(pos).to_string();
                    series_list.push(Series::new(key.clone(), color));
                    positions.insert(key, pos);
                    pos
                }
            };

            let replaced: Option<SeriesPoint> = series_list[pos]
                .upsert(year.to_string(), SeriesPoint::new(record.clone(), value));

            if replaced.is_some() {
                debug!(
                    "[SeriesServiceImpl->build_series] duplicate year {} for {}, keeping the later record",
                    year,
                    series_list[pos].key()
                );
            }
        }

        for series in series_list.iter_mut() {
            let label: String = Self::make_label(series, options);
            series.set_label(label);
        }

        let collection: SeriesCollection =
            SeriesCollection::new(series_list, *options.max_series());

        if collection.truncated_count() > 0 {
            info!(
                "[SeriesServiceImpl->build_series] {} of {} series exceed the cap of {} and are not rendered",
                collection.truncated_count(),
                collection.len(),
                options.max_series()
            );
        }

        if gap_cnt > 0 {
            debug!(
                "[SeriesServiceImpl->build_series] {} records without a numeric value left as gaps",
                gap_cnt
            );
        }

        Ok(collection)
    }
}
