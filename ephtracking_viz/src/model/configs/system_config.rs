use crate::common::*;

use crate::model::series::series_options::DEFAULT_MAX_SERIES;

fn default_animation_interval_ms() -> u64 {
    1500
}

fn default_max_series() -> usize {
    DEFAULT_MAX_SERIES
}

fn default_output_dir() -> String {
    String::from("./output")
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SystemConfig {
    #[serde(default = "default_animation_interval_ms")]
    pub animation_interval_ms: u64,
    #[serde(default = "default_max_series")]
    pub max_series: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub replay_count: usize,
}

impl SystemConfig {
    pub fn animation_interval(&self) -> Duration {
        Duration::from_millis(self.animation_interval_ms)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            animation_interval_ms: default_animation_interval_ms(),
            max_series: default_max_series(),
            output_dir: default_output_dir(),
            replay_count: 0,
        }
    }
}
