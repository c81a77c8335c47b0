use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    LineChart,
    Choropleth,
    Bubble,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::LineChart => "line-chart",
            ChartKind::Choropleth => "choropleth",
            ChartKind::Bubble => "bubble",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line-chart" => Ok(ChartKind::LineChart),
            "choropleth" => Ok(ChartKind::Choropleth),
            "bubble" => Ok(ChartKind::Bubble),
            other => Err(anyhow!("no such visualization type: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminators_round_trip() {
        for kind in [ChartKind::LineChart, ChartKind::Choropleth, ChartKind::Bubble] {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
        assert!("unknown-type".parse::<ChartKind>().is_err());
    }
}
