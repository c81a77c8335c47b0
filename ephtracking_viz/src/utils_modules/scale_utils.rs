#[doc = "Linear mapping of a value domain onto an output range, degenerate domains map to the range start"]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }

        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

#[doc = r#"
    Splits `[min, max]` into as many equal-width classes as there are colors.
    Values below the domain take the first color, values above it the last one.
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    min: f64,
    max: f64,
    colors: Vec<&'static str>,
}

impl ThresholdScale {
    pub fn new(min: f64, max: f64, colors: &[&'static str]) -> Self {
        ThresholdScale {
            min,
            max,
            colors: colors.to_vec(),
        }
    }

    pub fn class_of(&self, value: f64) -> usize {
        let classes: usize = self.colors.len();
        let width: f64 = self.max - self.min;

        if classes == 0 || width <= 0.0 {
            return 0;
        }

        let class: f64 = ((value - self.min) / width * classes as f64).floor();
        (class.max(0.0) as usize).min(classes - 1)
    }

    pub fn color_of(&self, value: f64) -> &'static str {
        self.colors.get(self.class_of(value)).copied().unwrap_or("grey")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_endpoints() {
        let scale = LinearScale::new((0.0, 100.0), (5.0, 30.0));
        assert_eq!(scale.apply(0.0), 5.0);
        assert_eq!(scale.apply(100.0), 30.0);
        assert_eq!(scale.apply(50.0), 17.5);

        let flat = LinearScale::new((7.0, 7.0), (5.0, 30.0));
        assert_eq!(flat.apply(7.0), 5.0);
    }

    #[test]
    fn threshold_classes_are_clamped() {
        let scale = ThresholdScale::new(0.0, 9.0, &["a", "b", "c"]);
        assert_eq!(scale.color_of(-1.0), "a");
        assert_eq!(scale.color_of(0.0), "a");
        assert_eq!(scale.color_of(4.0), "b");
        assert_eq!(scale.color_of(9.0), "c");
        assert_eq!(scale.color_of(50.0), "c");
    }
}
