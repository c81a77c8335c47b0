use crate::common::*;

use crate::error::chart_error::*;

use crate::traits::{
    repository_traits::tracking_api_repository::*, service_traits::data_fetch_service::*,
};

use crate::model::record::raw_record::*;

use crate::dto::{fetch_outcome::*, request_spec::*};

use crate::utils_modules::traits::*;

/* response field naming the key of the result array */
const RESULT_KEY_FIELD: &str = "tableReturnType";
/* result array key of endpoints that do not self-describe */
const FALLBACK_RESULT_KEY: &str = "tableResult";

#[doc = r#"
    Locates the result array of a tracking API response.

    1. read the result key from `tableReturnType` (fallback `tableResult`)
    2. look the array up under that key
    3. absent key or `null` -> `None` (no data), non-array value -> error

    # Arguments
    * `response_body` - decoded JSON response

    # Returns
    * `Option<&Vec<Value>>` - the result array, `None` when the response carries none
"#]
pub fn extract_result_array(response_body: &Value) -> Result<Option<&Vec<Value>>, anyhow::Error> {
    let result_key: &str = match response_body.get(RESULT_KEY_FIELD) {
        Some(Value::String(key)) => key.as_str(),
        Some(Value::Null) | None => FALLBACK_RESULT_KEY,
        Some(other) => {
            return Err(anyhow!(
                "[extract_result_array] '{}' is not a string: {}",
                RESULT_KEY_FIELD,
                other
            ));
        }
    };

    match response_body.get(result_key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(anyhow!(
            "[extract_result_array] '{}' is not an array",
            result_key
        )),
    }
}

#[derive(Debug, new)]
pub struct DataFetchServiceImpl<R: TrackingApiRepository> {
    api_conn: Arc<R>,
}

impl<R: TrackingApiRepository> DataFetchServiceImpl<R> {
    #[doc = r#"
        Decodes the items of the result array into `T`.

        An item that does not decode is logged and skipped, the rest of the result
        set is kept. Fails only when not a single item of a non-empty array decodes.
    "#]
    fn get_result_vec<T: FromResultItem>(&self, items: &[Value]) -> Result<Vec<T>, anyhow::Error> {
        let mut decoded: Vec<T> = Vec::with_capacity(items.len());
        let mut last_err: Option<anyhow::Error> = None;

        for item in items {
            match T::from_result_item(item) {
                Ok(value) => decoded.push(value),
                Err(e) => {
                    warn!("[DataFetchServiceImpl->get_result_vec] skipping item: {:#}", e);
                    last_err = Some(e);
                }
            }
        }

        match last_err {
            Some(e) if decoded.is_empty() => Err(e.context(format!(
                "[DataFetchServiceImpl->get_result_vec] none of {} result items could be decoded",
                items.len()
            ))),
            _ => Ok(decoded),
        }
    }
}

#[async_trait]
impl<R: TrackingApiRepository> DataFetchService for DataFetchServiceImpl<R> {
    async fn fetch(&self, spec: &RequestSpec) -> ChartResult<FetchOutcome> {
        let url: String = spec.to_url(self.api_conn.base_url());
        info!("[DataFetchServiceImpl->fetch] GET {}", url);

        let response_body: Value = self
            .api_conn
            .get_json(&url)
            .await
            .map_err(ChartError::fetch)?;

        let items: &Vec<Value> = match extract_result_array(&response_body)
            .map_err(ChartError::fetch)?
        {
            Some(items) => items,
            None => {
                info!(
                    "[DataFetchServiceImpl->fetch] measure {} returned no result array",
                    spec.measure_id()
                );
                return Ok(FetchOutcome::Empty);
            }
        };

        let records: Vec<RawRecord> = self
            .get_result_vec::<RawRecord>(items)
            .map_err(ChartError::fetch)?;

        Ok(FetchOutcome::from_records(records))
    }

    async fn fetch_all(&self, specs: &[RequestSpec]) -> ChartResult<Vec<FetchOutcome>> {
        try_join_all(specs.iter().map(|spec| self.fetch(spec))).await
    }
}
