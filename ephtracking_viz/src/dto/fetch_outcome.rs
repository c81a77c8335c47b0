use crate::model::record::raw_record::*;

#[doc = r#"
    Result of a successful fetch. `Empty` is a valid outcome meaning "no data",
    callers draw a placeholder instead of a chart.
"#]
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Records(Vec<RawRecord>),
    Empty,
}

impl FetchOutcome {
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        if records.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Records(records)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FetchOutcome::Empty)
    }

    pub fn records(&self) -> &[RawRecord] {
        match self {
            FetchOutcome::Records(records) => records,
            FetchOutcome::Empty => &[],
        }
    }
}
