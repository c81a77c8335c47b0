use crate::common::*;

#[doc = r#"
    Reads an environment variable, treating a missing one as a fatal error.

    Mandatory settings are provided through environment variables (or `.env`),
    the program cannot run without them, so a missing key ends it immediately.

    1. look up `key` with `env::var()`
    2. return the value when present
    3. otherwise log the error message and panic with the same message

    # Arguments
    * `key` - environment variable name

    # Returns
    * `String` - environment variable value

    # Panics
    When the environment variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the server configuration file (TOML), read from `SERVER_CONFIG_PATH`.

    # Expected contents
    - `[tracking_api]` base url and request timeout of the tracking API
    - `[system]` animation interval, series cap, output directory, replay count

    # Panics
    When `SERVER_CONFIG_PATH` is not set
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    Path of the chart request list (TOML), read from `CHART_LIST_PATH`.
    Every `[[chart]]` entry is one render request dispatched by the main controller.

    # Panics
    When `CHART_LIST_PATH` is not set
"#]
pub static CHART_LIST_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("CHART_LIST_PATH"));
