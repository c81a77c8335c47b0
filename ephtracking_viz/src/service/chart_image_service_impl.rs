use crate::common::*;
use crate::dto::line_plot::*;
use crate::traits::service_traits::chart_image_service::*;
use plotters::prelude::*;

#[doc = "Parses `#rrggbb` into its channels"]
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex: &str = hex.strip_prefix('#')?;

    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r: u8 = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g: u8 = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b: u8 = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

#[doc = "Splits a value row into contiguous runs of defined values, gaps end a run"]
pub fn split_segments(values: &[Option<f64>]) -> Vec<Vec<(usize, f64)>> {
    let mut segments: Vec<Vec<(usize, f64)>> = Vec::new();
    let mut current: Vec<(usize, f64)> = Vec::new();

    for (idx, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push((idx, *v)),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[derive(Debug, Clone, new)]
pub struct ChartImageServiceImpl;

impl ChartImageServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    pub fn calculate_y_range(&self, lines: &[LinePlot]) -> (f64, f64) {
        let values: Vec<f64> = lines
            .iter()
            .flat_map(|line| line.values().iter().flatten().copied())
            .collect();

        if values.is_empty() {
            return (0.0, 100.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

        let y_min: f64 = if min_val >= 0.0 {
            (min_val - padding).max(0.0)
        } else {
            min_val - padding
        };
        let y_max: f64 = max_val + padding;

        (y_min, y_max)
    }
}

#[async_trait]
impl ChartImageService for ChartImageServiceImpl {
    async fn generate_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        lines: Vec<LinePlot>,
        output_path: &std::path::Path,
    ) -> anyhow::Result<()> {
        if x_labels.is_empty() {
            return Err(anyhow!(
                "[ChartImageServiceImpl->generate_line_chart] Cannot generate chart with empty data"
            ));
        }

        if let Some(line) = lines.iter().find(|l| l.values().len() != x_labels.len()) {
            return Err(anyhow!(
                "[ChartImageServiceImpl->generate_line_chart] X labels and values of '{}' must have the same length: {} vs {}",
                line.label(),
                x_labels.len(),
                line.values().len()
            ));
        }

        /* Create parent directory if it doesn't exist */
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();

        /* Calculate y_range before moving into closure */
        let (y_min, y_max) = self.calculate_y_range(&lines);

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&output_path_str, (1400, 700)).into_drawing_area();
                root.fill(&WHITE)?;

                /* a single year still needs a non-empty x range */
                let x_max: usize = x_labels.len().max(2) - 1;

                let mut chart = ChartBuilder::on(&root)
                    .caption(&title, ("sans-serif", 32).into_font())
                    .margin(30)
                    .x_label_area_size(50)
                    .y_label_area_size(80)
                    .build_cartesian_2d(0..x_max, y_min..y_max)?;

                chart
                    .configure_mesh()
                    .x_labels(x_labels.len().min(20))
                    .y_labels(10)
                    .light_line_style(ShapeStyle::from(&RGBColor(235, 235, 235)).stroke_width(1))
                    .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                    .draw()?;

                for line in &lines {
                    let (r, g, b) = parse_hex_color(line.color()).unwrap_or((70, 130, 180));
                    let style: ShapeStyle = ShapeStyle::from(&RGBColor(r, g, b)).stroke_width(2);

                    let mut labelled: bool = false;

                    for segment in split_segments(line.values()) {
                        let series = chart.draw_series(LineSeries::new(segment, style))?;

                        if !labelled {
                            let legend_style: ShapeStyle = style;
                            series.label(line.label().as_str()).legend(move |(x, y)| {
                                PathElement::new(vec![(x, y), (x + 20, y)], legend_style)
                            });
                            labelled = true;
                        }
                    }
                }

                chart
                    .configure_series_labels()
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartImageServiceImpl->generate_line_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result
            .context("[ChartImageServiceImpl->generate_line_chart] drawing/present failed")?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#c06568"), Some((0xc0, 0x65, 0x68)));
        assert_eq!(parse_hex_color("c06568"), None);
        assert_eq!(parse_hex_color("#c065"), None);
    }

    #[test]
    fn gaps_split_segments() {
        let segments = split_segments(&[Some(1.0), Some(2.0), None, Some(4.0), None, None]);
        assert_eq!(segments, vec![vec![(0, 1.0), (1, 2.0)], vec![(3, 4.0)]]);
        assert!(split_segments(&[None, None]).is_empty());
    }

    #[test]
    fn y_range_pads_and_ignores_gaps() {
        let service = ChartImageServiceImpl::new();
        let lines = vec![LinePlot::new(
            "CA".into(),
            "#000000".into(),
            vec![Some(10.0), None, Some(20.0)],
        )];
        assert_eq!(service.calculate_y_range(&lines), (9.0, 21.0));
        assert_eq!(service.calculate_y_range(&[]), (0.0, 100.0));
    }

    #[tokio::test]
    async fn empty_x_axis_is_rejected() {
        let service = ChartImageServiceImpl::new();
        let result = service
            .generate_line_chart("t", Vec::new(), Vec::new(), Path::new("unused.png"))
            .await;
        assert!(result.is_err());
    }
}
