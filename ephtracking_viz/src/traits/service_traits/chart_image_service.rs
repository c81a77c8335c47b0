use crate::common::*;

use crate::dto::line_plot::*;

#[async_trait]
pub trait ChartImageService: Send + Sync {
    #[doc = "
        Generate a multi-series line chart and save it as an image file
        # Arguments
        * `title` - Chart title
        * `x_labels` - Years on the X-axis
        * `lines` - One entry per series, values aligned with `x_labels`, `None` is a gap
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_line_chart(
        &self,
        title: &str,
        x_labels: Vec<String>,
        lines: Vec<LinePlot>,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
