use eframe::egui::{Color32, Ui};
use egui_extras::{Size, StripBuilder};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Points};

use crate::render::{histogram, RenderPlan, ScatterSpec};
use crate::state::AppState;

const SINGLE_COLOR: Color32 = Color32::LIGHT_BLUE;
const MARGIN_SIZE: f32 = 110.0;
const HIST_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Central panel – the QC scatterplot
// ---------------------------------------------------------------------------

/// Render the content panel: heading plus the scatterplot (with marginal
/// histograms when requested).
pub fn qc_plot(ui: &mut Ui, state: &AppState) {
    ui.heading("GTEx sample QC scatterplot");
    ui.add_space(4.0);

    match state.render_plan() {
        // Empty tissue selection: no filtered view exists, draw nothing
        // until the selection becomes valid again.
        RenderPlan::Suspended => {}
        RenderPlan::MissingAxes => {
            ui.colored_label(
                Color32::RED,
                "Unable to render plot: the dataset needs at least two numeric columns.",
            );
        }
        RenderPlan::Scatter(spec) => {
            if spec.show_margins {
                joint_plot(ui, state, &spec);
            } else {
                scatter_plot(ui, state, &spec, ui.available_height());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Plain scatter
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, state: &AppState, spec: &ScatterSpec<'_>, height: f32) {
    Plot::new("qc_scatter")
        .x_axis_label(spec.x)
        .y_axis_label(spec.y)
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if spec.hue {
                // One Points series per tissue, in the fixed colour order.
                for tissue in spec.hue_order {
                    let points: PlotPoints = spec
                        .rows
                        .iter()
                        .filter(|&&i| {
                            state.table.rows[i].group().as_deref() == Some(tissue)
                        })
                        .filter_map(|&i| point_at(state, spec, i))
                        .collect();
                    plot_ui.points(
                        Points::new(points)
                            .color(state.color_map.color_for(tissue))
                            .radius(2.5),
                    );
                }
            } else {
                let points: PlotPoints = spec
                    .rows
                    .iter()
                    .filter_map(|&i| point_at(state, spec, i))
                    .collect();
                plot_ui.points(Points::new(points).color(SINGLE_COLOR).radius(2.5));
            }
        });
}

/// The (x, y) of one row under the current axis selection. Rows with a null
/// cell on either axis are skipped.
fn point_at(state: &AppState, spec: &ScatterSpec<'_>, row: usize) -> Option<[f64; 2]> {
    let r = &state.table.rows[row];
    Some([r.number(spec.x)?, r.number(spec.y)?])
}

// ---------------------------------------------------------------------------
// Joint plot: scatter + marginal histograms
// ---------------------------------------------------------------------------

/// Seaborn-style joint layout: X histogram on top, Y histogram on the right,
/// scatter in the main cell.
fn joint_plot(ui: &mut Ui, state: &AppState, spec: &ScatterSpec<'_>) {
    let plot_height = ui.available_height() - MARGIN_SIZE;

    StripBuilder::new(ui)
        .size(Size::exact(MARGIN_SIZE))
        .size(Size::remainder())
        .vertical(|mut strip| {
            // Top row: X-axis histogram, empty corner.
            strip.strip(|builder| {
                builder
                    .size(Size::remainder())
                    .size(Size::exact(MARGIN_SIZE))
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            margin_hist(ui, state, spec, MarginAxis::X);
                        });
                        strip.empty();
                    });
            });
            // Bottom row: scatter, Y-axis histogram.
            strip.strip(|builder| {
                builder
                    .size(Size::remainder())
                    .size(Size::exact(MARGIN_SIZE))
                    .horizontal(|mut strip| {
                        strip.cell(|ui| {
                            scatter_plot(ui, state, spec, plot_height);
                        });
                        strip.cell(|ui| {
                            margin_hist(ui, state, spec, MarginAxis::Y);
                        });
                    });
            });
        });
}

#[derive(Clone, Copy)]
enum MarginAxis {
    X,
    Y,
}

fn margin_hist(ui: &mut Ui, state: &AppState, spec: &ScatterSpec<'_>, axis: MarginAxis) {
    let (column, id) = match axis {
        MarginAxis::X => (spec.x, "margin_x"),
        MarginAxis::Y => (spec.y, "margin_y"),
    };

    let plot = Plot::new(id)
        .show_axes([false, false])
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false);

    plot.show(ui, |plot_ui| {
        if spec.hue {
            // Overlaid per-tissue histograms in the fixed colour order.
            for tissue in spec.hue_order {
                let values: Vec<f64> = spec
                    .rows
                    .iter()
                    .filter(|&&i| {
                        state.table.rows[i].group().as_deref() == Some(tissue)
                    })
                    .filter_map(|&i| state.table.rows[i].number(column))
                    .collect();
                let color = state.color_map.color_for(tissue).gamma_multiply(0.6);
                plot_ui.bar_chart(bar_chart(&values, axis).color(color));
            }
        } else {
            let values: Vec<f64> = spec
                .rows
                .iter()
                .filter_map(|&i| state.table.rows[i].number(column))
                .collect();
            plot_ui.bar_chart(bar_chart(&values, axis).color(SINGLE_COLOR));
        }
    });
}

fn bar_chart(values: &[f64], axis: MarginAxis) -> BarChart {
    let bars: Vec<Bar> = histogram(values, HIST_BINS)
        .into_iter()
        .map(|bin| Bar::new(bin.center, bin.count as f64).width(bin.width))
        .collect();
    let chart = BarChart::new(bars);
    match axis {
        MarginAxis::X => chart,
        // Y-axis margin: bars grow sideways so they line up with the
        // scatter's vertical axis.
        MarginAxis::Y => chart.horizontal(),
    }
}
