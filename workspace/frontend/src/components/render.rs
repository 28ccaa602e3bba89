use compute::{MetricsView, Render, ResultsView};
use yew::prelude::*;

use crate::common::error::DataUnavailable;
use crate::components::metrics::{
    ComparisonChart, ComparisonTable, Interpretation, MetricCards, MetricExplanations,
};
use crate::components::results::{ForecastChart, PredictionTable, SeriesLegend};

fn section(icon: &'static str, title: String, body: Html) -> Html {
    html! {
        <div class="card bg-base-100 shadow mb-8">
            <div class="card-body">
                <div class="flex items-center gap-2 mb-4">
                    <i class={classes!("fas", icon, "text-primary", "text-xl")}></i>
                    <h2 class="card-title text-2xl">{title}</h2>
                </div>
                {body}
            </div>
        </div>
    }
}

/// Renders views as Yew markup.
pub struct YewRenderer;

impl Render<ResultsView> for YewRenderer {
    type Output = Html;

    fn render(&self, view: &ResultsView) -> Html {
        html! {
            <>
                {section("fa-chart-line", format!("Predictions ({})", view.horizon), html! {
                    <ForecastChart
                        rows={view.chart.clone()}
                        model_a={view.model_a.clone()}
                        model_b={view.model_b.clone()}
                    />
                })}
                {section("fa-table", "Prediction table".to_string(), html! {
                    <PredictionTable
                        rows={view.table.clone()}
                        model_a={view.model_a.clone()}
                        model_b={view.model_b.clone()}
                    />
                })}
                {section("fa-info-circle", "How to read the chart".to_string(), html! {
                    <SeriesLegend entries={view.legend.clone()} />
                })}
            </>
        }
    }

    fn unavailable(&self, reason: &str) -> Html {
        html! { <DataUnavailable reason={reason.to_string()} /> }
    }
}

impl Render<MetricsView> for YewRenderer {
    type Output = Html;

    fn render(&self, view: &MetricsView) -> Html {
        html! {
            <>
                <div class="mb-8">
                    <MetricCards cards={view.cards.clone()} model={view.model_b.clone()} />
                </div>
                {section("fa-balance-scale", "Model comparison".to_string(), html! {
                    <ComparisonTable
                        rows={view.rows.clone()}
                        model_a={view.model_a.clone()}
                        model_b={view.model_b.clone()}
                    />
                })}
                {section("fa-book-open", "What do these metrics mean?".to_string(), html! {
                    <MetricExplanations />
                })}
                {section("fa-chart-bar", "Visual comparison".to_string(), html! {
                    <ComparisonChart
                        bars={view.bars.clone()}
                        model_a={view.model_a.clone()}
                        model_b={view.model_b.clone()}
                    />
                })}
                <Interpretation
                    headline={view.headline.clone()}
                    explained_variance={view.explained_variance.clone()}
                />
            </>
        }
    }

    fn unavailable(&self, reason: &str) -> Html {
        html! { <DataUnavailable reason={reason.to_string()} /> }
    }
}
