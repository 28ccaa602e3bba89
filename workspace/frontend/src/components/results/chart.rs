use common::format::format_date;
use compute::ChartRow;
use plotly::common::{DashType, Line, Mode};
use plotly::{Layout, Scatter};
use yew::prelude::*;

use crate::components::plot::{to_plot_json, PlotlyChart};
use compute::presentation::{ACTUAL_LABEL, INTERVAL_LABEL};

const ACTUAL_COLOR: &str = "#10B981";
const MODEL_A_COLOR: &str = "#3B82F6";
const MODEL_B_COLOR: &str = "#F59E0B";
const BOUND_COLOR: &str = "#6B7280";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<ChartRow>,
    pub model_a: String,
    pub model_b: String,
}

fn line(
    dates: &[String],
    values: Vec<Option<f64>>,
    name: &str,
    color: &'static str,
    width: f64,
    dash: Option<DashType>,
) -> Option<serde_json::Value> {
    let mut style = Line::new().color(color).width(width);
    if let Some(dash) = dash {
        style = style.dash(dash);
    }
    let trace = Scatter::new(dates.to_vec(), values)
        .mode(Mode::Lines)
        .name(name)
        .connect_gaps(false)
        .line(style);
    to_plot_json(&trace)
}

/// Actual sales, both predictions and the dashed prediction interval.
/// Missing values are gaps, never zeros.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let dates: Vec<String> = props.rows.iter().map(|r| format_date(r.timestamp)).collect();
    let column = |pick: fn(&ChartRow) -> Option<f64>| props.rows.iter().map(pick).collect::<Vec<_>>();

    let traces: Vec<serde_json::Value> = [
        line(&dates, column(|r| r.actual), ACTUAL_LABEL, ACTUAL_COLOR, 3.0, None),
        line(&dates, column(|r| r.prediction_a), &props.model_a, MODEL_A_COLOR, 2.0, None),
        line(&dates, column(|r| r.prediction_b), &props.model_b, MODEL_B_COLOR, 2.0, None),
        line(
            &dates,
            column(|r| r.lower_bound),
            &format!("{} (lower)", INTERVAL_LABEL),
            BOUND_COLOR,
            1.0,
            Some(DashType::Dash),
        ),
        line(
            &dates,
            column(|r| r.upper_bound),
            &format!("{} (upper)", INTERVAL_LABEL),
            BOUND_COLOR,
            1.0,
            Some(DashType::Dash),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let layout = Layout::new()
        .height(400)
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)");

    match to_plot_json(&layout) {
        Some(layout) => html! {
            <PlotlyChart div_id="forecast-chart" traces={traces} layout={layout} />
        },
        None => html! {},
    }
}
