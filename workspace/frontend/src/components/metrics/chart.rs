use compute::MetricBar;
use plotly::layout::BarMode;
use plotly::{Bar, Layout};
use yew::prelude::*;

use crate::components::plot::{to_plot_json, PlotlyChart};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub bars: Vec<MetricBar>,
    pub model_a: String,
    pub model_b: String,
}

/// Grouped bars of the raw metric values of both models.
#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &Props) -> Html {
    let labels: Vec<String> = props.bars.iter().map(|b| b.label.to_string()).collect();
    let values_a: Vec<f64> = props.bars.iter().map(|b| b.model_a).collect();
    let values_b: Vec<f64> = props.bars.iter().map(|b| b.model_b).collect();

    let traces: Vec<serde_json::Value> = [
        to_plot_json(&Bar::new(labels.clone(), values_a).name(&props.model_a)),
        to_plot_json(&Bar::new(labels, values_b).name(&props.model_b)),
    ]
    .into_iter()
    .flatten()
    .collect();

    let layout = Layout::new()
        .bar_mode(BarMode::Group)
        .height(400)
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)");

    match to_plot_json(&layout) {
        Some(layout) => html! {
            <PlotlyChart div_id="metrics-chart" traces={traces} layout={layout} />
        },
        None => html! {},
    }
}
