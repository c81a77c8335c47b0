use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into the requested structure.

    Used for the server configuration and the chart request list.

    1. Reads the file at `file_path` into a string
    2. Deserializes it into `T` with `toml::from_str()`

    # Arguments
    * `file_path` - path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - the parsed structure

    # Errors
    - the file does not exist or cannot be read
    - the TOML is invalid or does not match the fields of `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file] cannot read '{}'", file_path))?;

    let toml: T = toml::from_str(&toml_content)
        .with_context(|| format!("[read_toml_from_file] cannot parse '{}'", file_path))?;

    Ok(toml)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::chart::chart_list_config::*;
    use crate::model::configs::total_config::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_server_config_with_defaults() {
        let file = write_temp(
            r#"
            [tracking_api]
            base_url = "https://ephtracking.cdc.gov/apigateway/api/v1"

            [system]
            max_series = 5
            "#,
        );

        let config: TotalConfig = read_toml_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.system().max_series(), &5);
        assert_eq!(config.system().animation_interval_ms(), &1500);
        assert_eq!(config.tracking_api().timeout_secs(), &10);
    }

    #[test]
    fn reads_chart_list() {
        let file = write_temp(
            r#"
            [[chart]]
            type = "choropleth"
            container = "map"
            [chart.data]
            measure_id = "296"
            "#,
        );

        let list: ChartListConfig = read_toml_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(list.chart()[0].container(), "map");
    }

    #[test]
    fn missing_file_and_bad_toml_are_errors() {
        assert!(read_toml_from_file::<ChartListConfig>("/nonexistent/chart_list.toml").is_err());

        let file = write_temp("[[chart]\ntype = ");
        assert!(read_toml_from_file::<ChartListConfig>(file.path().to_str().unwrap()).is_err());
    }
}
