use crate::common::*;

use crate::error::chart_error::*;

#[doc = r#"
    Temporal option as written in a chart request: either a single string
    (`"2005"` or `"2000-2005"`) or an explicit list of years.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TemporalInput {
    Text(String),
    Years(Vec<String>),
}

#[doc = r#"
    Canonical, non-empty sequence of year strings a chart covers.

    Built once per chart request through `parse_temporal` and never mutated afterwards.
    Range inputs are expanded in ascending order. Explicit lists are kept as given.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct TemporalSpec {
    years: Vec<String>,
}

impl TemporalSpec {
    #[doc = "Caller-side default: every year from `first_year` through the current calendar year"]
    pub fn default_span(first_year: i32) -> Self {
        let current_year: i32 = Local::now().year();
        let last_year: i32 = current_year.max(first_year);

        TemporalSpec {
            years: (first_year..=last_year).map(|y| y.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn first(&self) -> &str {
        /* non-empty by construction */
        &self.years[0]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.years.get(index).map(String::as_str)
    }

    #[doc = r#"
        Renders the years as the temporal path segment of the tracking API.

        1. A single year is sent as-is
        2. Ascending consecutive years are sent as the range `start-end`
        3. Any other list is comma-joined in its given order
    "#]
    pub fn to_wire(&self) -> String {
        let numeric: Vec<i32> = self
            .years
            .iter()
            .filter_map(|y| y.parse::<i32>().ok())
            .collect();

        let contiguous: bool = numeric.len() == self.years.len()
            && numeric.len() > 1
            && numeric.windows(2).all(|pair| pair[1] == pair[0] + 1);

        match (contiguous, self.years.first(), self.years.last()) {
            (true, Some(first), Some(last)) => format!("{}-{}", first, last),
            _ => self.years.join(","),
        }
    }
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

#[doc = r#"
    Validates a temporal option and normalizes it into a `TemporalSpec`.

    1. length 4 (digits only) -> single-element sequence
    2. length 9 `YYYY-YYYY` with start <= stop -> every year from start to stop inclusive
    3. explicit list -> passed through unchanged, it must not be empty
    4. anything else -> `ChartError::InvalidTemporal`

    # Arguments
    * `input` - the temporal option, `None` when the request did not carry one

    # Returns
    * `ChartResult<TemporalSpec>`
"#]
pub fn parse_temporal(input: Option<&TemporalInput>) -> ChartResult<TemporalSpec> {
    let input: &TemporalInput =
        input.ok_or_else(|| ChartError::invalid_temporal("temporal option is missing"))?;

    match input {
        TemporalInput::Years(years) => {
            if years.is_empty() {
                return Err(ChartError::invalid_temporal("year list is empty"));
            }
            Ok(TemporalSpec {
                years: years.clone(),
            })
        }
        TemporalInput::Text(text) => parse_temporal_str(text),
    }
}

#[doc = "String form of `parse_temporal`"]
pub fn parse_temporal_str(text: &str) -> ChartResult<TemporalSpec> {
    match text.len() {
        4 => {
            if !is_year(text) {
                return Err(ChartError::invalid_temporal(format!(
                    "'{}' is not a four digit year",
                    text
                )));
            }
            Ok(TemporalSpec {
                years: vec![text.to_string()],
            })
        }
        9 => {
            let (start, stop) = text
                .split_once('-')
                .filter(|(start, stop)| is_year(start) && is_year(stop))
                .ok_or_else(|| {
                    ChartError::invalid_temporal(format!("'{}' does not match YYYY-YYYY", text))
                })?;

            /* zero-padded four digit years, so string order equals numeric order */
            if start > stop {
                return Err(ChartError::invalid_temporal(format!(
                    "range '{}' starts after it stops",
                    text
                )));
            }

            let start: i32 = start.parse().map_err(|_| {
                ChartError::invalid_temporal(format!("'{}' has a non numeric start", text))
            })?;
            let stop: i32 = stop.parse().map_err(|_| {
                ChartError::invalid_temporal(format!("'{}' has a non numeric stop", text))
            })?;

            Ok(TemporalSpec {
                years: (start..=stop).map(|y| y.to_string()).collect(),
            })
        }
        len => Err(ChartError::invalid_temporal(format!(
            "'{}' has length {}, expected YYYY or YYYY-YYYY",
            text, len
        ))),
    }
}
