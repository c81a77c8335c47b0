use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = r#"
    Accepts a JSON string, number or null and keeps it as an optional string.
    The tracking API is not consistent about quoting numeric fields.
"#]
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_required_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer)?.ok_or_else(|| serde::de::Error::custom("field is null"))
}

fn lenient_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

#[doc = r#"
    Rollover text arrives either as an array of lines (`rollover`) or as a single
    string (`rolloverText`).
"#]
fn rollover_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Some(Value::String(s)) => vec![s],
        _ => Vec::new(),
    })
}

#[doc = r#"
    One datum of a tracking API result array. Read-only once fetched.

    `year` may be a multi-year label such as `2000-2004`, `data_value` is kept as the
    raw string so a missing or non-numeric value can be told apart from zero.
"#]
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters, new)]
#[serde(rename_all = "camelCase")]
#[getset(get = "pub")]
pub struct RawRecord {
    #[serde(deserialize_with = "lenient_required_string")]
    pub year: String,
    #[serde(deserialize_with = "lenient_required_string")]
    pub geo_id: String,
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub geo: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub data_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stratification_group_id: Option<String>,
    #[serde(default, alias = "rolloverText", deserialize_with = "rollover_lines")]
    pub rollover: Vec<String>,
}

impl RawRecord {
    #[doc = "Numeric value of the record, `None` when it is absent or not a finite number"]
    pub fn numeric_value(&self) -> Option<f64> {
        self.data_value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.replace(',', "").parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    #[doc = "First rollover line, used as tooltip text"]
    pub fn rollover_text(&self) -> Option<&str> {
        self.rollover.first().map(String::as_str)
    }
}

impl FromResultItem for RawRecord {
    fn from_result_item(item: &Value) -> Result<Self, anyhow::Error> {
        serde_json::from_value(item.to_owned()).map_err(|e| {
            anyhow!(
                "[RawRecord->from_result_item] Failed to decode result item {}: {}",
                item,
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_item_with_mixed_field_types() {
        let item: Value = json!({
            "year": 2004,
            "geoId": "06",
            "geo": "California",
            "dataValue": "12.5",
            "displayValue": "12.5",
            "stratificationGroupId": 3,
            "rollover": ["California: 12.5", null]
        });

        let record: RawRecord = RawRecord::from_result_item(&item).unwrap();
        assert_eq!(record.year(), "2004");
        assert_eq!(record.geo_id(), "06");
        assert_eq!(record.stratification_group_id().as_deref(), Some("3"));
        assert_eq!(record.numeric_value(), Some(12.5));
        assert_eq!(record.rollover_text(), Some("California: 12.5"));
    }

    #[test]
    fn rollover_text_alias_and_missing_fields() {
        let item: Value = json!({
            "year": "2000-2004",
            "geoId": "36",
            "rolloverText": "New York"
        });

        let record: RawRecord = RawRecord::from_result_item(&item).unwrap();
        assert_eq!(record.data_value(), &None);
        assert_eq!(record.numeric_value(), None);
        assert_eq!(record.rollover_text(), Some("New York"));
        assert_eq!(record.geo(), "");
    }

    #[test]
    fn non_numeric_value_is_not_zero() {
        let mut record = RawRecord::new(
            "2001".into(),
            "06".into(),
            "California".into(),
            Some("Suppressed".into()),
            Some("Suppressed".into()),
            None,
            Vec::new(),
        );
        assert_eq!(record.numeric_value(), None);

        record.data_value = Some("1,234.5".into());
        assert_eq!(record.numeric_value(), Some(1234.5));
    }

    #[test]
    fn missing_geo_id_fails_decoding() {
        let item: Value = json!({ "year": "2001", "dataValue": "3" });
        assert!(RawRecord::from_result_item(&item).is_err());
    }
}
