use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{Error, Result};
use crate::graph::GraphDocument;
use crate::table::GraphTable;

use super::color::resolve_color;
use super::config::{PlotKind, PlotSettings};

/// Render the pivoted table as a bar or line chart PNG.
///
/// Each table column is drawn as one series in document order, colored per
/// the series' resolved color. Every value gets a label, the x-axis shows
/// the original labels in table order, y tick labels are hidden, and no
/// axis frame is drawn. The image is written to `path` and then opened with
/// the system viewer when [`PlotSettings::show`] is set.
///
/// Fails with [`Error::UnsupportedPlotType`] when the document's plot type
/// is neither `bar` nor `line`, and with [`Error::Empty`] when the table has
/// no rows or no columns. Any drawing error aborts the whole render.
pub fn render_png<P: AsRef<Path>>(
    doc: &GraphDocument,
    table: &GraphTable,
    settings: &PlotSettings,
    path: P,
) -> Result<()> {
    let kind = PlotKind::from_str(&doc.kind)
        .ok_or_else(|| Error::UnsupportedPlotType(doc.kind.clone()))?;

    if table.is_empty() {
        return Err(Error::Empty("nothing to plot".to_string()));
    }

    // Resolve every series color up front so a bad color aborts before drawing
    let mut colors = Vec::with_capacity(doc.sequences.len());
    for seq in &doc.sequences {
        colors.push(resolve_color(&seq.color)?);
    }

    let rows = table.row_count();
    let ncols = table.column_count();
    let labels = table.labels();

    // Y range with headroom so value labels stay inside the plot area
    let y_max = table.max_value().unwrap_or(0.0);
    let y_min = table.min_value().unwrap_or(0.0);
    let y_top = if y_max > 0.0 { y_max * 1.15 } else { 1.0 };
    let y_bottom = if y_min < 0.0 { y_min * 1.15 } else { 0.0 };
    let y_span = y_top - y_bottom;

    let background = RGBColor(
        settings.background.0,
        settings.background.1,
        settings.background.2,
    );
    let foreground = RGBColor(
        settings.foreground.0,
        settings.foreground.1,
        settings.foreground.2,
    );

    let root = BitMapBackend::new(path.as_ref(), (settings.width, settings.height))
        .into_drawing_area();
    root.fill(&background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            &doc.title,
            ("sans-serif", settings.caption_font_size as i32)
                .into_font()
                .color(&foreground),
        )
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(0)
        .build_cartesian_2d(-0.5f64..(rows as f64 - 0.5), y_bottom..y_top)?;

    // X ticks show the original labels in table order. The grid is disabled
    // and the axis lines are stroked in the background color, which leaves
    // the plot without a visible frame; dropping the y label area above
    // removes the y tick labels.
    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(&background)
        .x_labels(rows)
        .x_label_formatter(&|x: &f64| {
            let slot = x.round();
            if slot < 0.0 || (x - slot).abs() > 0.25 {
                return String::new();
            }
            labels
                .get(slot as usize)
                .cloned()
                .unwrap_or_default()
        })
        .label_style(
            ("sans-serif", settings.label_font_size as i32)
                .into_font()
                .color(&foreground),
        )
        .draw()?;

    let value_style = ("sans-serif", settings.value_font_size as i32)
        .into_font()
        .color(&foreground)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (col, seq) in doc.sequences.iter().enumerate() {
        let color = colors[col];
        let points: Vec<(f64, f64)> = (0..rows)
            .filter_map(|row| table.get(row, col).map(|v| (row as f64, v)))
            .collect();

        // Horizontal center of this series within each label slot (bars are
        // offset per series, lines sit on the slot itself)
        let offset = match kind {
            PlotKind::Bar => {
                let bar_width = 0.8 / ncols as f64;
                (col as f64 - (ncols as f64 - 1.0) / 2.0) * bar_width
            }
            PlotKind::Line => 0.0,
        };

        match kind {
            PlotKind::Bar => {
                let bar_width = 0.8 / ncols as f64;
                let bars: Vec<_> = points
                    .iter()
                    .map(|&(x, y)| {
                        Rectangle::new(
                            [
                                (x + offset - bar_width / 2.0, 0.0),
                                (x + offset + bar_width / 2.0, y),
                            ],
                            color.filled(),
                        )
                    })
                    .collect();
                chart
                    .draw_series(bars)?
                    .label(seq.title.clone())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
                    });
            }
            PlotKind::Line => {
                chart
                    .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
                    .label(seq.title.clone())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                    });
            }
        }

        // 各値の上にラベルを描く
        if settings.value_labels {
            let nudge = y_span * 0.015;
            let texts: Vec<_> = points
                .iter()
                .map(|&(x, y)| {
                    Text::new(format!("{:.1}", y), (x + offset, y + nudge), value_style.clone())
                })
                .collect();
            chart.draw_series(texts)?;
        }
    }

    if settings.show_legend && !doc.sequences.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&background.mix(0.85))
            .border_style(&background)
            .label_font(
                ("sans-serif", settings.label_font_size as i32)
                    .into_font()
                    .color(&foreground),
            )
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    root.present()?;
    log::info!("chart written to {}", path.as_ref().display());

    if settings.show {
        open::that(path.as_ref()).map_err(Error::Io)?;
    }

    Ok(())
}
