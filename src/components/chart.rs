//! Chart Components
//!
//! Canvas-drawn charts for the analysis and training views: a labelled
//! line chart, a donut breakdown and the live training curves.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::EpochStat;

/// Palette shared by chart series and legends
pub const SERIES_COLORS: [&str; 5] = [
    "#3B82F6", // Blue (primary)
    "#6366F1", // Indigo
    "#8B5CF6", // Violet
    "#22C55E", // Green
    "#F59E0B", // Amber
];

const LOSS_COLOR: &str = "#F87171";
const ACCURACY_COLOR: &str = "#34D399";

/// One labelled sample on a line chart
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelledPoint {
    pub label: &'static str,
    pub value: f64,
}

/// One slice of a donut chart
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
}

/// Single-series line chart over labelled points
#[component]
pub fn LineChart(
    points: Vec<LabelledPoint>,
    #[prop(default = SERIES_COLORS[0])]
    color: &'static str,
    #[prop(default = "w-full h-48 rounded-lg")]
    class: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_line_chart(&canvas, &points, color);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="600" height="240" class=class />
    }
}

/// Donut chart with an HTML legend underneath
#[component]
pub fn DonutChart(slices: Vec<Slice>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let slices_for_draw = slices.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_donut_chart(&canvas, &slices_for_draw);
        }
    });

    let total: f64 = slices.iter().map(|s| s.value).sum();

    view! {
        <div>
            <canvas node_ref=canvas_ref width="260" height="200" class="mx-auto" />
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {slices
                    .into_iter()
                    .enumerate()
                    .map(|(idx, slice)| {
                        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
                        let share = if total > 0.0 {
                            (slice.value / total * 100.0).round() as u32
                        } else {
                            0
                        };
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">
                                    {format!("{} {}%", slice.name, share)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Loss and accuracy curves for a training run, redrawn as epochs land
#[component]
pub fn TrainingChart(
    #[prop(into)]
    stats: Signal<Vec<EpochStat>>,
    #[prop(into)]
    total_epochs: Signal<u32>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let recorded = stats.get();
        let total = total_epochs.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_training_chart(&canvas, &recorded, total);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="600" height="260" class="w-full h-56 rounded-lg" />
            <div class="flex justify-center gap-4 mt-3">
                <div class="flex items-center space-x-2">
                    <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", LOSS_COLOR) />
                    <span class="text-sm text-gray-300">"Loss"</span>
                </div>
                <div class="flex items-center space-x-2">
                    <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", ACCURACY_COLOR) />
                    <span class="text-sm text-gray-300">"Accuracy"</span>
                </div>
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

struct ChartFrame {
    width: f64,
    height: f64,
    margin_left: f64,
    margin_top: f64,
    chart_width: f64,
    chart_height: f64,
}

/// Clear the canvas, draw the horizontal grid with y labels and return the
/// plot geometry.
fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    y_min: f64,
    y_max: f64,
    y_decimals: usize,
) -> ChartFrame {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 44.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 32.0;

    let frame = ChartFrame {
        width,
        height,
        margin_left,
        margin_top,
        chart_width: width - margin_left - margin_right,
        chart_height: height - margin_top - margin_bottom,
    };

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines with y-axis labels
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * frame.chart_height;

        ctx.set_stroke_style(&"#374151".into()); // gray-700
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.*}", y_decimals, value), 6.0, y + 4.0);
    }

    frame
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, frame: &ChartFrame, message: &str) {
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("14px sans-serif");
    let _ = ctx.fill_text(message, frame.width / 2.0 - 70.0, frame.height / 2.0);
}

fn draw_line_chart(canvas: &HtmlCanvasElement, points: &[LabelledPoint], color: &str) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    // Pad the observed range so the line never hugs the frame
    let mut y_min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let mut y_max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    if points.is_empty() {
        y_min = 0.0;
        y_max = 100.0;
    }
    let padding = ((y_max - y_min) * 0.1).max(1.0);
    y_min -= padding;
    y_max += padding;

    let frame = draw_frame(&ctx, canvas, y_min, y_max, 0);

    if points.is_empty() {
        draw_empty_message(&ctx, &frame, "No data");
        return;
    }

    let step = if points.len() > 1 {
        frame.chart_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let scale_y =
        |value: f64| frame.margin_top + ((y_max - value) / (y_max - y_min)) * frame.chart_height;

    // Series line
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = frame.margin_left + step * i as f64;
        let y = scale_y(point.value);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers and x labels
    ctx.set_fill_style(&color.into());
    for (i, point) in points.iter().enumerate() {
        let x = frame.margin_left + step * i as f64;
        ctx.begin_path();
        let _ = ctx.arc(x, scale_y(point.value), 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let x = frame.margin_left + step * i as f64;
        let _ = ctx.fill_text(point.label, x - 10.0, frame.height - 10.0);
    }
}

fn draw_donut_chart(canvas: &HtmlCanvasElement, slices: &[Slice]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total <= 0.0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 28.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let outer = 80.0;
    let inner = 60.0;

    let mut angle = -std::f64::consts::FRAC_PI_2;
    for (idx, slice) in slices.iter().enumerate() {
        let sweep = slice.value / total * std::f64::consts::PI * 2.0;
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, angle, angle + sweep);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, angle + sweep, angle, true);
        ctx.close_path();
        ctx.fill();

        angle += sweep;
    }
}

fn draw_training_chart(canvas: &HtmlCanvasElement, stats: &[EpochStat], total_epochs: u32) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    // Fixed 0..1 domain keeps both curves comparable across runs
    let frame = draw_frame(&ctx, canvas, 0.0, 1.0, 2);

    if stats.is_empty() {
        draw_empty_message(&ctx, &frame, "No epochs recorded yet");
        return;
    }

    draw_curve(&ctx, &frame, stats, total_epochs, |s| s.loss, LOSS_COLOR);
    draw_curve(&ctx, &frame, stats, total_epochs, |s| s.accuracy, ACCURACY_COLOR);

    // Epoch count along the x axis
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text("1", frame.margin_left - 2.0, frame.height - 10.0);
    let _ = ctx.fill_text(
        &total_epochs.to_string(),
        frame.margin_left + frame.chart_width - 8.0,
        frame.height - 10.0,
    );
}

fn draw_curve(
    ctx: &CanvasRenderingContext2d,
    frame: &ChartFrame,
    stats: &[EpochStat],
    total_epochs: u32,
    pick: fn(&EpochStat) -> f64,
    color: &str,
) {
    let span = (total_epochs.max(1) as f64 - 1.0).max(1.0);
    let scale_x =
        |epoch: u32| frame.margin_left + (epoch.saturating_sub(1) as f64 / span) * frame.chart_width;
    let scale_y = |value: f64| frame.margin_top + (1.0 - value) * frame.chart_height;

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, stat) in stats.iter().enumerate() {
        let x = scale_x(stat.epoch);
        let y = scale_y(pick(stat));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&color.into());
    for stat in stats {
        ctx.begin_path();
        let _ = ctx.arc(
            scale_x(stat.epoch),
            scale_y(pick(stat)),
            2.5,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }
}
