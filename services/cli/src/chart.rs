use fan_engagement::error::AppError;
use fan_engagement::surveys::report::BarChartSpec;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const CHART_SIZE: (u32, u32) = (800, 500);
const BAR_INSET: f64 = 0.2;

/// Draw a chart spec to a bitmap file. Presentation only; nothing reads the
/// image back.
pub(crate) fn draw(spec: &BarChartSpec, path: &Path) -> Result<(), AppError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let bar_count = spec.categories.len();
    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..bar_count as f64, 0f64..spec.y_max as f64)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bar_count)
        .x_label_formatter(&|x| {
            spec.categories
                .get(x.floor() as usize)
                .map(|category| category.label.to_string())
                .unwrap_or_default()
        })
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .draw()
        .map_err(render_error)?;

    let palette = [
        BLUE.to_rgba(),
        GREEN.to_rgba(),
        RED.to_rgba(),
        RGBColor(128, 128, 128).to_rgba(),
    ];

    // Anchor annotations at bottom-center so each number sits over its bar.
    let annotation_style = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (index, category) in spec.categories.iter().enumerate() {
        let color = palette[index % palette.len()];
        let left = index as f64 + BAR_INSET;
        let right = (index + 1) as f64 - BAR_INSET;
        let value = category.value as f64;

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(left, 0.0), (right, value)],
                color.filled(),
            )))
            .map_err(render_error)?;
        chart
            .draw_series(std::iter::once(Text::new(
                category.value.to_string(),
                (index as f64 + 0.5, value + 0.5),
                annotation_style.clone(),
            )))
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}

fn render_error<E>(err: E) -> AppError
where
    E: std::error::Error + Send + Sync + 'static,
{
    AppError::Render(Box::new(err))
}
