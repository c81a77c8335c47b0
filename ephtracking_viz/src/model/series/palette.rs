use crate::common::*;

/* line chart scheme, one color per rendered series */
const DEFAULT_SERIES_COLORS: [&str; 10] = [
    "#c06568", "#64ac48", "#8361cc", "#9a963f", "#c167b1", "#4aac8d", "#d14076", "#688bcd",
    "#ce4f34", "#c98743",
];

#[doc = r#"
    Explicit color assignment keyed by series index.
    Each chart render receives its own palette, nothing is shared between renders.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            return Palette::default();
        }
        Palette { colors }
    }

    #[doc = "Color of the series at `index`, cycling when the index exceeds the palette"]
    pub fn color_for(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_SERIES_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
